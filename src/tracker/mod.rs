//! Work item lifecycle tracking.
//!
//! Holds the canonical collection of work items and their sub-items, maps
//! logical statuses onto Kanban lanes, and applies validated status changes.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Store and orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
