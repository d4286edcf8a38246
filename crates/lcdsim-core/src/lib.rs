//! # lcdsim-core
//!
//! Core types for the lcdsim LCD monitor.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other lcdsim crates. It provides:
//!
//! - Geometry types (Position, Dimensions) for the emulated panel
//! - The `Command` sum type decoded from the device protocol
//! - Debug message modes and number formatting
//! - Configuration types
//! - Session identity types
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other lcdsim crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export all modules
pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod session;

// Re-export commonly used types
pub use command::{Command, CommandRecord, DebugLevel, NumberFormat, TextStyle};
pub use config::{DisplaySettings, LinkSettings, LogSettings, MonitorConfig};
pub use error::{Error, Result};
pub use geometry::{Dimensions, Position};
pub use session::SessionId;
