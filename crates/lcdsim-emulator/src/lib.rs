//! # lcdsim-emulator
//!
//! Protocol decoding and panel emulation for the lcdsim LCD monitor.
//!
//! This crate provides:
//! - Wire-format constants for the device protocol
//! - Stateful framing of the raw, arbitrarily chunked byte stream
//! - Interpretation of completed frames into typed commands
//! - The pure `DisplayBuffer` character-grid model
//! - Capture and replay of raw device traffic
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends on lcdsim-core and
//! provides everything between raw bytes and typed commands.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod capture;
pub mod decoder;
pub mod framer;
pub mod wire;

// Re-export commonly used types
pub use buffer::DisplayBuffer;
pub use capture::{CaptureEvent, CaptureHeader, Direction, TrafficRecorder};
pub use decoder::{decode, ProtocolDecoder};
pub use framer::{Frame, FrameDecoder};
