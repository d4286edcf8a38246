//! Typed commands decoded from the device protocol.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rendering style for display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    /// Dark characters on the lit background
    Normal,
    /// Lit characters on a dark background
    Inverse,
}

/// Severity of a device debug text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebugLevel {
    /// Plain diagnostic text
    Normal,
    /// Failure report
    Error,
    /// Success report
    Ok,
}

impl DebugLevel {
    /// Map the 1-based wire mode index to a level.
    ///
    /// Returns None for indices outside the mode table.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Normal),
            2 => Some(Self::Error),
            3 => Some(Self::Ok),
            _ => None,
        }
    }
}

/// Presentation format for a device debug number.
///
/// The device picks the format; the host only renders. The wire carries a
/// full little-endian u32 regardless of the nominal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// 8-bit hexadecimal (0x00)
    U8Hex,
    /// 16-bit hexadecimal (0x0000)
    U16Hex,
    /// 32-bit hexadecimal (0x00000000)
    U32Hex,
    /// 8-bit decimal
    U8Dec,
    /// 16-bit decimal
    U16Dec,
    /// 8-bit binary (0b00000000)
    U8Bin,
    /// 16-bit binary
    U16Bin,
    /// 32-bit binary
    U32Bin,
}

impl NumberFormat {
    /// Map the 1-based wire mode index to a format.
    ///
    /// Returns None for indices outside the mode table.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::U8Hex),
            2 => Some(Self::U16Hex),
            3 => Some(Self::U32Hex),
            4 => Some(Self::U8Dec),
            5 => Some(Self::U16Dec),
            6 => Some(Self::U8Bin),
            7 => Some(Self::U16Bin),
            8 => Some(Self::U32Bin),
            _ => None,
        }
    }

    /// Render a value in this format, zero-padded to the nominal width.
    pub fn render(&self, value: u32) -> String {
        match self {
            Self::U8Hex => format!("0x{value:02x}"),
            Self::U16Hex => format!("0x{value:04x}"),
            Self::U32Hex => format!("0x{value:08x}"),
            Self::U8Dec | Self::U16Dec => value.to_string(),
            Self::U8Bin => format!("0b{value:08b}"),
            Self::U16Bin => format!("0b{value:016b}"),
            Self::U32Bin => format!("0b{value:032b}"),
        }
    }
}

/// A decoded device command.
///
/// One variant per protocol operation. Consumers match exhaustively, so a new
/// opcode extends this enum rather than growing conditional logic elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Move the write cursor; only the supplied axes change
    SetCursor {
        /// Target row, None to keep the current row
        row: Option<u8>,
        /// Target column, None to keep the current column
        column: Option<u8>,
    },
    /// Write text at an explicit coordinate without moving the cursor
    Text {
        /// Characters to write
        text: String,
        /// Target row
        row: u8,
        /// Target start column
        column: u8,
        /// Normal or inverse rendering
        style: TextStyle,
    },
    /// Write a single character at the cursor, advancing it
    Char {
        /// The character to write
        ch: char,
        /// Normal or inverse rendering
        style: TextStyle,
    },
    /// Multi-column print; logged but with no confirmed panel effect
    PrintColumns {
        /// Characters carried by the command
        text: String,
        /// Target row
        row: u8,
        /// Target start column
        column: u8,
    },
    /// Blank the whole panel and home the cursor
    Clear,
    /// Diagnostic text message
    DebugText {
        /// Message text
        text: String,
        /// Message severity
        level: DebugLevel,
    },
    /// Diagnostic labelled number
    DebugNumber {
        /// Label text, zero-terminated on the wire
        label: String,
        /// The reported value
        value: u32,
        /// How the device wants the value rendered
        format: NumberFormat,
    },
}

impl Command {
    /// True for the diagnostic-only command family.
    pub fn is_debug(&self) -> bool {
        matches!(self, Self::DebugText { .. } | Self::DebugNumber { .. })
    }

    /// Short human-readable name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetCursor { .. } => "SetCursor",
            Self::Text { .. } => "Text",
            Self::Char { .. } => "Char",
            Self::PrintColumns { .. } => "PrintColumns",
            Self::Clear => "Clear",
            Self::DebugText { .. } => "DebugText",
            Self::DebugNumber { .. } => "DebugNumber",
        }
    }
}

/// A command together with the instant it was decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The decoded command
    pub command: Command,
    /// Decode time
    pub received_at: DateTime<Utc>,
}

impl CommandRecord {
    /// Wrap a command, stamping the current time.
    pub fn new(command: Command) -> Self {
        Self {
            command,
            received_at: Utc::now(),
        }
    }
}
