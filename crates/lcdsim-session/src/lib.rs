//! # lcdsim-session
//!
//! Session state and command routing for the lcdsim LCD monitor.
//!
//! This crate provides:
//! - The append-only command logs
//! - The `Session` controller that routes decoded commands into the logs
//!   and applies display commands to the panel buffer
//! - Serializable session snapshots for the presentation layer
//!
//! ## Architecture
//!
//! This is Layer 2 in the architecture - it depends on lcdsim-core and
//! lcdsim-emulator and owns all mutable state of a monitoring session.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod log;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use log::CommandLog;
pub use session::Session;
pub use snapshot::SessionSnapshot;
