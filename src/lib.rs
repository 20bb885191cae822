//! Taskdeck: task and sub-task lifecycle engine for board-style views.
//!
//! The crate keeps a session-scoped store of work items, maps their logical
//! status onto Kanban lanes, applies drag-and-drop and explicit status
//! changes, and projects the store into filtered pages, lanes, and a
//! drill-down navigation stack. Persistence is delegated to a task API
//! collaborator.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`tracker`]: Work item store, status mapping, and transitions
//! - [`view`]: Kanban, list, navigation, and drag projections
//! - [`config`]: Board configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod telemetry;
pub mod tracker;
pub mod view;
