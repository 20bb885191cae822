//! Adapter implementations of the tracker ports.

pub mod logging;
pub mod memory;
