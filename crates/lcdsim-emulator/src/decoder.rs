//! Interpretation of completed frames into typed commands.

use tracing::debug;

use lcdsim_core::{Command, CommandRecord, DebugLevel, NumberFormat, TextStyle};

use crate::framer::{Frame, FrameDecoder};
use crate::wire;

/// Decode a completed frame into a command.
///
/// Returns None both for the recognized-but-inert opcodes and for anything
/// unrecognized (unknown group/subopcode, or a frame too short for the fields
/// its opcode requires). Unrecognized frames are logged for diagnostics;
/// nothing here is an error to the caller.
pub fn decode(frame: &Frame) -> Option<Command> {
    if is_inert(frame) {
        return None;
    }

    let command = interpret(frame);
    if command.is_none() {
        debug!(bytes = ?frame.bytes(), "discarding unrecognized frame");
    }
    command
}

/// Opcodes the device sends that have no host-side effect.
fn is_inert(frame: &Frame) -> bool {
    frame.group() == Some(wire::GROUP_DISPLAY)
        && matches!(
            frame.subopcode(),
            Some(wire::DISP_PRINT_LINE | wire::DISP_CLEAR_ROW)
        )
}

fn interpret(frame: &Frame) -> Option<Command> {
    match (frame.group()?, frame.subopcode()?) {
        (wire::GROUP_DISPLAY, wire::DISP_SET_CURSOR) => Some(Command::SetCursor {
            row: Some(frame.get(3)?),
            column: Some(frame.get(4)?),
        }),
        (wire::GROUP_DISPLAY, wire::DISP_SET_ROW) => Some(Command::SetCursor {
            row: Some(frame.get(3)?),
            column: None,
        }),
        (wire::GROUP_DISPLAY, wire::DISP_SET_COLUMN) => Some(Command::SetCursor {
            row: None,
            column: Some(frame.get(3)?),
        }),
        (wire::GROUP_DISPLAY, wire::DISP_PUT_CHAR | wire::DISP_CHAR) => Some(Command::Char {
            ch: char::from(frame.get(3)?),
            style: TextStyle::Normal,
        }),
        (wire::GROUP_DISPLAY, wire::DISP_CHAR_INVERSE) => Some(Command::Char {
            ch: char::from(frame.get(3)?),
            style: TextStyle::Inverse,
        }),
        (wire::GROUP_DISPLAY, wire::DISP_PRINT_COLUMNS) => Some(Command::PrintColumns {
            text: text_from_bytes(frame.tail(5)),
            row: frame.get(3)?,
            column: frame.get(4)?,
        }),
        (wire::GROUP_DISPLAY, subop @ (wire::DISP_TEXT | wire::DISP_TEXT_INVERSE)) => {
            Some(Command::Text {
                text: text_from_bytes(frame.tail(5)),
                row: frame.get(3)?,
                column: frame.get(4)?,
                style: if subop == wire::DISP_TEXT {
                    TextStyle::Normal
                } else {
                    TextStyle::Inverse
                },
            })
        }
        (wire::GROUP_DISPLAY, wire::DISP_CLEAR) => Some(Command::Clear),
        (wire::GROUP_DEBUG, wire::DBG_TEXT) => Some(Command::DebugText {
            text: text_from_bytes(frame.tail(4)),
            level: DebugLevel::from_index(frame.get(3)?)?,
        }),
        (wire::GROUP_DEBUG, wire::DBG_NUMBER) => Some(Command::DebugNumber {
            value: u32::from_le_bytes([
                frame.get(4)?,
                frame.get(5)?,
                frame.get(6)?,
                frame.get(7)?,
            ]),
            label: terminated_text(frame.tail(8)),
            format: NumberFormat::from_index(frame.get(3)?)?,
        }),
        _ => None,
    }
}

/// One character per byte; the panel speaks 8-bit extended ASCII, not UTF-8.
fn text_from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Like `text_from_bytes`, but stops at the first zero byte.
fn terminated_text(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| char::from(b))
        .collect()
}

/// Full decoding pipeline: raw chunks in, timestamped commands out.
///
/// Owns a `FrameDecoder` and runs every completed frame through `decode`,
/// so arbitrarily split transport chunks come out as an ordered sequence of
/// `CommandRecord`s. Dropping an instance at any point is safe; a new one
/// starts from a clean state.
#[derive(Debug, Default)]
pub struct ProtocolDecoder {
    framer: FrameDecoder,
}

impl ProtocolDecoder {
    /// Create a new protocol decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk of raw bytes.
    ///
    /// Returns the commands whose frames completed within this chunk, in
    /// arrival order, stamped with their decode time.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<CommandRecord> {
        self.framer
            .feed(chunk)
            .iter()
            .filter_map(decode)
            .map(CommandRecord::new)
            .collect()
    }

    /// Discard any partially accumulated frame.
    pub fn reset(&mut self) {
        self.framer.reset();
    }
}
