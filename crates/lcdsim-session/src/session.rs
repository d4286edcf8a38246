//! Monitor session: routing of decoded commands into logs and panel state.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use lcdsim_core::{Command, CommandRecord, Dimensions, MonitorConfig, SessionId};
use lcdsim_emulator::{DisplayBuffer, ProtocolDecoder};

use crate::log::CommandLog;

/// One monitoring session against a connected device.
///
/// Owns the protocol decoder and every piece of mutable state: the debug log,
/// the display-command log, and the current panel buffer. Single-threaded by
/// contract - each transport chunk is processed to completion before the next
/// one is submitted, so commands are applied strictly in byte-arrival order.
///
/// Dropping a session at any point is safe; a new one starts from a clean
/// initial state with no leakage from its predecessor.
#[derive(Debug)]
pub struct Session {
    /// Session identifier
    id: SessionId,

    /// Framer plus command interpreter
    decoder: ProtocolDecoder,

    /// Diagnostic commands, arrival order
    debug_log: CommandLog,

    /// Display commands, arrival order
    display_log: CommandLog,

    /// Current panel state
    buffer: DisplayBuffer,

    /// Session creation time
    created_at: DateTime<Utc>,
}

impl Session {
    /// Create a session with the given panel dimensions and unbounded logs.
    pub fn new(dimensions: Dimensions) -> Self {
        Self::with_log_capacity(dimensions, 0)
    }

    /// Create a session from a monitor configuration.
    pub fn with_config(config: &MonitorConfig) -> Self {
        Self::with_log_capacity(config.display.dimensions(), config.log.max_entries)
    }

    /// Create a session with an explicit per-log retention capacity.
    pub fn with_log_capacity(dimensions: Dimensions, max_log_entries: usize) -> Self {
        let id = SessionId::new();
        info!(
            "Creating session: id={}, panel={}x{}",
            id, dimensions.rows, dimensions.cols
        );

        Self {
            id,
            decoder: ProtocolDecoder::new(),
            debug_log: CommandLog::with_capacity(max_log_entries),
            display_log: CommandLog::with_capacity(max_log_entries),
            buffer: DisplayBuffer::new(dimensions),
            created_at: Utc::now(),
        }
    }

    /// Get the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Get the session creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Panel dimensions of this session.
    pub fn dimensions(&self) -> Dimensions {
        self.buffer.dimensions()
    }

    /// Process one chunk of raw transport bytes.
    ///
    /// Runs the chunk through the decoder and applies every completed command
    /// in order. Returns the number of commands applied. Empty chunks are a
    /// no-op. The transport acknowledges the chunk afterwards; this method
    /// neither sends nor waits for anything.
    pub fn feed(&mut self, chunk: &[u8]) -> usize {
        let records = self.decoder.feed(chunk);
        let count = records.len();
        if count > 0 {
            debug!(
                "Processing chunk: id={}, {} bytes, {} commands",
                self.id,
                chunk.len(),
                count
            );
        }

        for record in records {
            self.apply(record);
        }
        count
    }

    /// Route one decoded command and apply its panel effect.
    ///
    /// Debug commands go to the debug log; everything else goes to the
    /// display log. Display-mutating commands then replace the current panel
    /// buffer with the result of the corresponding pure operation.
    pub fn apply(&mut self, record: CommandRecord) {
        match &record.command {
            Command::SetCursor { row, column } => {
                self.buffer = self.buffer.set_cursor(*row, *column);
            }
            Command::Text {
                text, row, column, ..
            } => {
                self.buffer = self.buffer.insert_text_at(text, *row, *column);
            }
            Command::Char { ch, .. } => {
                self.buffer = self.buffer.insert_text(&ch.to_string());
            }
            Command::Clear => {
                self.buffer = self.buffer.clear_lines();
            }
            // Logged only: no confirmed panel effect for this opcode
            Command::PrintColumns { .. } => {}
            Command::DebugText { .. } | Command::DebugNumber { .. } => {}
        }

        if record.command.is_debug() {
            self.debug_log.push(record);
        } else {
            self.display_log.push(record);
        }
    }

    /// Diagnostic commands in arrival order.
    pub fn debug_log(&self) -> &CommandLog {
        &self.debug_log
    }

    /// Display commands in arrival order.
    pub fn display_log(&self) -> &CommandLog {
        &self.display_log
    }

    /// Current panel state.
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Drop every debug log entry; panel and display log are untouched.
    pub fn clear_debug_log(&mut self) {
        self.debug_log.clear();
    }

    /// Drop every display log entry; panel and debug log are untouched.
    pub fn clear_display_log(&mut self) {
        self.display_log.clear();
    }

    /// Clear both logs and replace the panel with a fresh blank one of the
    /// same dimensions.
    pub fn reset_all(&mut self) {
        info!("Resetting session: id={}", self.id);
        self.debug_log.clear();
        self.display_log.clear();
        self.buffer = DisplayBuffer::new(self.buffer.dimensions());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcdsim_core::{DebugLevel, NumberFormat, Position, TextStyle};

    fn session() -> Session {
        Session::new(Dimensions::new(4, 20))
    }

    fn debug_record() -> CommandRecord {
        CommandRecord::new(Command::DebugText {
            text: "boot".to_string(),
            level: DebugLevel::Normal,
        })
    }

    #[test]
    fn test_session_ids_unique() {
        assert_ne!(session().id(), session().id());
    }

    #[test]
    fn test_debug_commands_routed_to_debug_log() {
        let mut session = session();
        session.apply(debug_record());
        session.apply(CommandRecord::new(Command::DebugNumber {
            label: "adc".to_string(),
            value: 512,
            format: NumberFormat::U16Dec,
        }));

        assert_eq!(session.debug_log().len(), 2);
        assert!(session.display_log().is_empty());
        assert!(session.buffer().is_blank());
    }

    #[test]
    fn test_display_commands_routed_to_display_log() {
        let mut session = session();
        session.apply(CommandRecord::new(Command::Clear));
        session.apply(CommandRecord::new(Command::SetCursor {
            row: Some(1),
            column: Some(2),
        }));

        assert_eq!(session.display_log().len(), 2);
        assert!(session.debug_log().is_empty());
    }

    #[test]
    fn test_char_command_writes_at_cursor() {
        let mut session = session();
        session.apply(CommandRecord::new(Command::SetCursor {
            row: Some(1),
            column: Some(3),
        }));
        session.apply(CommandRecord::new(Command::Char {
            ch: 'X',
            style: TextStyle::Normal,
        }));

        assert_eq!(session.buffer().char_at(1, 3), Some('X'));
        assert_eq!(session.buffer().cursor(), Position::new(1, 4));
    }

    #[test]
    fn test_text_command_leaves_cursor_alone() {
        let mut session = session();
        session.apply(CommandRecord::new(Command::Text {
            text: "HI".to_string(),
            row: 2,
            column: 5,
            style: TextStyle::Normal,
        }));

        assert_eq!(session.buffer().char_at(2, 5), Some('H'));
        assert_eq!(session.buffer().char_at(2, 6), Some('I'));
        assert_eq!(session.buffer().cursor(), Position::origin());
    }

    #[test]
    fn test_clear_command_blanks_panel() {
        let mut session = session();
        session.apply(CommandRecord::new(Command::Char {
            ch: 'X',
            style: TextStyle::Normal,
        }));
        assert!(!session.buffer().is_blank());

        session.apply(CommandRecord::new(Command::Clear));
        assert!(session.buffer().is_blank());
        assert_eq!(session.buffer().cursor(), Position::origin());
        // Both commands were still logged
        assert_eq!(session.display_log().len(), 2);
    }

    #[test]
    fn test_print_columns_logged_but_inert_on_panel() {
        let mut session = session();
        session.apply(CommandRecord::new(Command::PrintColumns {
            text: "METER".to_string(),
            row: 0,
            column: 0,
        }));

        assert_eq!(session.display_log().len(), 1);
        assert!(session.buffer().is_blank());
        assert_eq!(session.buffer().cursor(), Position::origin());
    }

    #[test]
    fn test_clear_debug_log_is_isolated() {
        let mut session = session();
        session.apply(debug_record());
        session.apply(CommandRecord::new(Command::Char {
            ch: 'X',
            style: TextStyle::Normal,
        }));

        session.clear_debug_log();

        assert!(session.debug_log().is_empty());
        assert_eq!(session.display_log().len(), 1);
        assert_eq!(session.buffer().char_at(0, 0), Some('X'));
    }

    #[test]
    fn test_clear_display_log_is_isolated() {
        let mut session = session();
        session.apply(debug_record());
        session.apply(CommandRecord::new(Command::Char {
            ch: 'X',
            style: TextStyle::Normal,
        }));

        session.clear_display_log();

        assert!(session.display_log().is_empty());
        assert_eq!(session.debug_log().len(), 1);
        assert_eq!(session.buffer().char_at(0, 0), Some('X'));
    }

    #[test]
    fn test_reset_all() {
        let mut session = session();
        session.apply(debug_record());
        session.apply(CommandRecord::new(Command::Char {
            ch: 'X',
            style: TextStyle::Normal,
        }));

        session.reset_all();

        assert!(session.debug_log().is_empty());
        assert!(session.display_log().is_empty());
        assert!(session.buffer().is_blank());
        assert_eq!(session.dimensions(), Dimensions::new(4, 20));
    }

    #[test]
    fn test_feed_counts_applied_commands() {
        let mut session = session();

        let count = session.feed(&[35, 76, 5, 1, 65, 35, 76, 5, 1, 66]);
        assert_eq!(count, 2);
        assert_eq!(session.buffer().char_at(0, 0), Some('A'));
        assert_eq!(session.buffer().char_at(0, 1), Some('B'));
    }

    #[test]
    fn test_feed_empty_chunk_is_noop() {
        let mut session = session();
        assert_eq!(session.feed(&[]), 0);
        assert!(session.buffer().is_blank());
    }

    #[test]
    fn test_log_capacity_from_config() {
        let mut config = MonitorConfig::default();
        config.log.max_entries = 2;
        let mut session = Session::with_config(&config);

        for _ in 0..5 {
            session.apply(CommandRecord::new(Command::Clear));
        }
        assert_eq!(session.display_log().len(), 2);
    }
}
