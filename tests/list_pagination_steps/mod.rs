//! Step definitions for list pagination scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
