//! Pure character-grid model of the emulated panel.

use serde::{Deserialize, Serialize};

use lcdsim_core::{Dimensions, Position};

/// Immutable character grid with a write cursor.
///
/// Every mutating operation returns a new `DisplayBuffer`; the prior value
/// stays valid and unchanged, which keeps snapshots trivially consistent for
/// the presentation layer. The cursor always satisfies `row < rows` and
/// `col < cols`.
///
/// All operations are total: no input within the declared parameter types can
/// panic or leave a buffer partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBuffer {
    /// Panel dimensions, fixed for the buffer's lifetime
    dimensions: Dimensions,
    /// Cell storage (row-major order), blank-initialized
    cells: Vec<char>,
    /// Current write position
    cursor: Position,
}

impl DisplayBuffer {
    /// Create a blank buffer with the given dimensions.
    ///
    /// Zero-sized dimensions are raised to 1x1 so the cursor invariant holds
    /// for every buffer that can exist.
    pub fn new(dimensions: Dimensions) -> Self {
        let dimensions = Dimensions::new(dimensions.rows.max(1), dimensions.cols.max(1));
        Self {
            cells: vec![' '; dimensions.cell_count()],
            dimensions,
            cursor: Position::origin(),
        }
    }

    /// Panel dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Character at a position, None when out of bounds.
    pub fn char_at(&self, row: u16, col: u16) -> Option<char> {
        if row < self.dimensions.rows && col < self.dimensions.cols {
            self.cells.get(self.index(row, col)).copied()
        } else {
            None
        }
    }

    /// One full row as a string, None when the row is out of bounds.
    pub fn row_text(&self, row: u16) -> Option<String> {
        if row < self.dimensions.rows {
            let start = self.index(row, 0);
            let end = start + self.dimensions.cols as usize;
            Some(self.cells[start..end].iter().collect())
        } else {
            None
        }
    }

    /// The whole panel as newline-separated rows, trailing blanks trimmed.
    pub fn to_plain_text(&self) -> String {
        (0..self.dimensions.rows)
            .filter_map(|row| self.row_text(row))
            .map(|line| line.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True when every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == ' ')
    }

    /// Write text at the cursor, advancing it per character.
    ///
    /// The cursor wraps to column 0 of the next row past the last column and
    /// rings back to row 0 past the last row, so long text overwrites the
    /// panel from the top like the physical module does.
    pub fn insert_text(&self, text: &str) -> Self {
        let mut next = self.clone();
        let mut row = next.cursor.row;
        let mut col = next.cursor.col;

        for ch in text.chars() {
            let idx = next.index(row, col);
            next.cells[idx] = ch;

            col += 1;
            if col >= next.dimensions.cols {
                col = 0;
                row += 1;
                if row >= next.dimensions.rows {
                    row = 0;
                }
            }
        }

        next.cursor = Position::new(row, col);
        next
    }

    /// Write text at an explicit coordinate without moving the cursor.
    ///
    /// Characters past the end of the target row are clipped, never carried
    /// to the next row. A start position outside the panel writes nothing.
    pub fn insert_text_at(&self, text: &str, row: u8, column: u8) -> Self {
        let row = u16::from(row);
        let start = u16::from(column);
        if row >= self.dimensions.rows || start >= self.dimensions.cols {
            return self.clone();
        }

        let mut next = self.clone();
        for (offset, ch) in text.chars().enumerate() {
            let col = start as usize + offset;
            if col >= next.dimensions.cols as usize {
                break;
            }
            let idx = next.index(row, col as u16);
            next.cells[idx] = ch;
        }
        next
    }

    /// Move the cursor; only the supplied axes change.
    ///
    /// Out-of-range values clamp to the last valid index on their axis.
    pub fn set_cursor(&self, row: Option<u8>, column: Option<u8>) -> Self {
        let mut next = self.clone();
        if let Some(row) = row {
            next.cursor.row = u16::from(row).min(self.dimensions.rows.saturating_sub(1));
        }
        if let Some(column) = column {
            next.cursor.col = u16::from(column).min(self.dimensions.cols.saturating_sub(1));
        }
        next
    }

    /// Blank every cell and home the cursor.
    pub fn clear_lines(&self) -> Self {
        Self::new(self.dimensions)
    }

    fn index(&self, row: u16, col: u16) -> usize {
        row as usize * self.dimensions.cols as usize + col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> DisplayBuffer {
        DisplayBuffer::new(Dimensions::new(4, 20))
    }

    #[test]
    fn test_new_buffer_is_blank() {
        let buf = buffer();
        assert!(buf.is_blank());
        assert_eq!(buf.cursor(), Position::origin());
        assert_eq!(buf.char_at(0, 0), Some(' '));
        assert_eq!(buf.char_at(3, 19), Some(' '));
        assert_eq!(buf.char_at(4, 0), None);
        assert_eq!(buf.char_at(0, 20), None);
    }

    #[test]
    fn test_zero_dimensions_raised() {
        let buf = DisplayBuffer::new(Dimensions::new(0, 0));
        assert_eq!(buf.dimensions(), Dimensions::new(1, 1));
        assert_eq!(buf.char_at(0, 0), Some(' '));
    }

    #[test]
    fn test_insert_text_advances_cursor() {
        let buf = buffer().insert_text("HELLO");

        assert_eq!(buf.row_text(0).unwrap(), "HELLO               ");
        assert_eq!(buf.cursor(), Position::new(0, 5));
    }

    #[test]
    fn test_insert_text_is_pure() {
        let before = buffer();
        let after = before.insert_text("X");

        assert!(before.is_blank());
        assert_eq!(before.cursor(), Position::origin());
        assert_eq!(after.char_at(0, 0), Some('X'));
    }

    #[test]
    fn test_insert_text_wraps_to_next_row() {
        let buf = DisplayBuffer::new(Dimensions::new(2, 4)).insert_text("ABCDEF");

        assert_eq!(buf.row_text(0).unwrap(), "ABCD");
        assert_eq!(buf.row_text(1).unwrap(), "EF  ");
        assert_eq!(buf.cursor(), Position::new(1, 2));
    }

    #[test]
    fn test_insert_text_rings_back_to_top_row() {
        let buf = DisplayBuffer::new(Dimensions::new(2, 4)).insert_text("ABCDEFGHIJ");

        // The tenth character lands back on row 0
        assert_eq!(buf.row_text(0).unwrap(), "IJCD");
        assert_eq!(buf.row_text(1).unwrap(), "EFGH");
        assert_eq!(buf.cursor(), Position::new(0, 2));
    }

    #[test]
    fn test_insert_text_cursor_in_bounds_for_any_length() {
        let dims = Dimensions::new(2, 4);
        let mut buf = DisplayBuffer::new(dims);
        for len in 0..40 {
            buf = buf.insert_text(&"x".repeat(len));
            assert!(dims.contains(&buf.cursor()));
        }
    }

    #[test]
    fn test_insert_text_at_clips_at_row_end() {
        let buf = DisplayBuffer::new(Dimensions::new(2, 4)).insert_text_at("LONGTEXT", 0, 2);

        assert_eq!(buf.row_text(0).unwrap(), "  LO");
        // Nothing carried over to the next row
        assert_eq!(buf.row_text(1).unwrap(), "    ");
    }

    #[test]
    fn test_insert_text_at_leaves_cursor_alone() {
        let buf = buffer().set_cursor(Some(2), Some(7));
        let after = buf.insert_text_at("HI", 0, 0);

        assert_eq!(after.cursor(), Position::new(2, 7));
        assert_eq!(after.char_at(0, 0), Some('H'));
        assert_eq!(after.char_at(0, 1), Some('I'));
    }

    #[test]
    fn test_insert_text_at_out_of_bounds_writes_nothing() {
        let buf = buffer();

        assert!(buf.insert_text_at("X", 4, 0).is_blank());
        assert!(buf.insert_text_at("X", 0, 20).is_blank());
        assert!(buf.insert_text_at("X", 255, 255).is_blank());
    }

    #[test]
    fn test_set_cursor_single_axis() {
        let buf = buffer().set_cursor(Some(2), Some(7));
        assert_eq!(buf.cursor(), Position::new(2, 7));

        let buf = buf.set_cursor(Some(1), None);
        assert_eq!(buf.cursor(), Position::new(1, 7));

        let buf = buf.set_cursor(None, Some(3));
        assert_eq!(buf.cursor(), Position::new(1, 3));

        let buf = buf.set_cursor(None, None);
        assert_eq!(buf.cursor(), Position::new(1, 3));
    }

    #[test]
    fn test_set_cursor_clamps_out_of_range() {
        let buf = buffer().set_cursor(Some(200), Some(200));
        assert_eq!(buf.cursor(), Position::new(3, 19));

        let buf = buffer().set_cursor(Some(4), None);
        assert_eq!(buf.cursor(), Position::new(3, 0));

        let buf = buffer().set_cursor(None, Some(20));
        assert_eq!(buf.cursor(), Position::new(0, 19));
    }

    #[test]
    fn test_clear_lines_equals_fresh_buffer() {
        let dirty = buffer()
            .insert_text("SOME TEXT")
            .set_cursor(Some(2), Some(5))
            .insert_text("MORE");

        let cleared = dirty.clear_lines();
        assert_eq!(cleared, DisplayBuffer::new(Dimensions::new(4, 20)));
        assert_eq!(cleared.cursor(), Position::origin());
        assert!(cleared.is_blank());
    }

    #[test]
    fn test_to_plain_text_trims_trailing_blanks() {
        let buf = buffer().insert_text_at("HI", 1, 3);
        let text = buf.to_plain_text();
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "   HI");
        assert_eq!(lines[2], "");
    }

    #[test]
    fn test_row_text_out_of_bounds() {
        assert!(buffer().row_text(4).is_none());
    }
}
