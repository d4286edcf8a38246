//! Wire-format constants for the device protocol.
//!
//! Frames travel as `MARKER, group, subopcode, length, payload...`. The
//! length byte counts payload bytes; a zero length means the frame carries a
//! fixed header only and terminates at the next marker. Text payloads are one
//! byte per character (8-bit clean, no multi-byte encoding); numbers are
//! 4-byte little-endian unsigned.

/// Start-of-frame marker ('#').
pub const MARKER: u8 = 35;

/// Acknowledgment byte the transport returns after consuming a chunk.
///
/// Flow control only; the decoder neither sends nor expects it.
pub const ACK: u8 = 7;

/// Display command group ('L').
pub const GROUP_DISPLAY: u8 = 76;

/// Debug command group ('D').
pub const GROUP_DEBUG: u8 = 68;

/// Set cursor row and column.
pub const DISP_SET_CURSOR: u8 = 2;
/// Set cursor row only.
pub const DISP_SET_ROW: u8 = 3;
/// Set cursor column only.
pub const DISP_SET_COLUMN: u8 = 4;
/// Print one character at the cursor.
pub const DISP_PUT_CHAR: u8 = 5;
/// Multi-column print.
pub const DISP_PRINT_COLUMNS: u8 = 6;
/// Positioned text, normal style.
pub const DISP_TEXT: u8 = 7;
/// Positioned text, inverse style.
pub const DISP_TEXT_INVERSE: u8 = 8;
/// Print one character, normal style.
pub const DISP_CHAR: u8 = 9;
/// Print one character, inverse style.
pub const DISP_CHAR_INVERSE: u8 = 10;
/// Print line; recognized but carries no host-side effect.
pub const DISP_PRINT_LINE: u8 = 12;
/// Clear row; recognized but carries no host-side effect.
pub const DISP_CLEAR_ROW: u8 = 13;
/// Clear the whole panel.
pub const DISP_CLEAR: u8 = 14;

/// Debug text message.
pub const DBG_TEXT: u8 = 1;
/// Debug labelled number.
pub const DBG_NUMBER: u8 = 2;
