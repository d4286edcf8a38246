//! Serializable views of session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lcdsim_core::{CommandRecord, Dimensions, Position, SessionId};

use crate::session::Session;

/// A consistent point-in-time view of a session.
///
/// Everything the presentation layer needs, detached from the live session:
/// rendering a snapshot never races a later update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Session identifier
    pub id: SessionId,
    /// Snapshot time
    pub taken_at: DateTime<Utc>,
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// Cursor position at snapshot time
    pub cursor: Position,
    /// Panel rows, exactly one string per row, cell-exact
    pub lines: Vec<String>,
    /// Diagnostic commands, arrival order
    pub debug: Vec<CommandRecord>,
    /// Display commands, arrival order
    pub display: Vec<CommandRecord>,
}

impl Session {
    /// Capture a snapshot of the current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let buffer = self.buffer();
        let dimensions = buffer.dimensions();

        SessionSnapshot {
            id: *self.id(),
            taken_at: Utc::now(),
            dimensions,
            cursor: buffer.cursor(),
            lines: (0..dimensions.rows)
                .filter_map(|row| buffer.row_text(row))
                .collect(),
            debug: self.debug_log().to_vec(),
            display: self.display_log().to_vec(),
        }
    }
}
