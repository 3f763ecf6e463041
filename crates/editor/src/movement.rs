//! Cursor navigation. None of these touch buffer content.
//!
//! Horizontal moves, jumps and clicks refresh the cursor's desired column.
//! Vertical moves clamp the column to the target line but keep the desired
//! column, so the caret snaps back once a long enough line is reached.

use gapedit_buffer::{Cursor, TextBuffer};

use crate::edit::clamp_cursor;

/// Moves one char left, wrapping to the end of the previous line.
pub fn move_left(buffer: &TextBuffer, cursor: &mut Cursor) {
    clamp_cursor(buffer, cursor);
    if cursor.col > 0 {
        cursor.col -= 1;
    } else if cursor.line > 0 {
        cursor.line -= 1;
        cursor.col = buffer.line_len(cursor.line);
    }
    cursor.remember_col();
}

/// Moves one char right, wrapping to the start of the next line.
pub fn move_right(buffer: &TextBuffer, cursor: &mut Cursor) {
    clamp_cursor(buffer, cursor);
    if cursor.col < buffer.line_len(cursor.line) {
        cursor.col += 1;
    } else if cursor.line + 1 < buffer.line_count() {
        cursor.line += 1;
        cursor.col = 0;
    }
    cursor.remember_col();
}

/// Moves one line up, aiming for the desired column.
pub fn move_up(buffer: &TextBuffer, cursor: &mut Cursor) {
    clamp_cursor(buffer, cursor);
    if cursor.line > 0 {
        cursor.line -= 1;
        cursor.col = cursor.desired_col.min(buffer.line_len(cursor.line));
    }
}

/// Moves one line down, aiming for the desired column.
pub fn move_down(buffer: &TextBuffer, cursor: &mut Cursor) {
    clamp_cursor(buffer, cursor);
    if cursor.line + 1 < buffer.line_count() {
        cursor.line += 1;
        cursor.col = cursor.desired_col.min(buffer.line_len(cursor.line));
    }
}

pub fn move_to_line_start(buffer: &TextBuffer, cursor: &mut Cursor) {
    clamp_cursor(buffer, cursor);
    cursor.col = 0;
    cursor.remember_col();
}

pub fn move_to_line_end(buffer: &TextBuffer, cursor: &mut Cursor) {
    clamp_cursor(buffer, cursor);
    cursor.col = buffer.line_len(cursor.line);
    cursor.remember_col();
}

pub fn move_to_buffer_start(cursor: &mut Cursor) {
    *cursor = Cursor::new(0, 0);
}

pub fn move_to_buffer_end(buffer: &TextBuffer, cursor: &mut Cursor) {
    let last_line = buffer.line_count() - 1;
    *cursor = Cursor::new(last_line, buffer.line_len(last_line));
}

/// Places the cursor at `(line, col)`, clamped into the document.
///
/// Used for pointer clicks, where the (line, column) pair is an estimate
/// derived from glyph metrics and may fall outside the text.
pub fn move_to(buffer: &TextBuffer, cursor: &mut Cursor, line: usize, col: usize) {
    let line = line.min(buffer.line_count() - 1);
    let col = col.min(buffer.line_len(line));
    *cursor = Cursor::new(line, col);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_left_within_line() {
        let buf = TextBuffer::from_str("hello");
        let mut cursor = Cursor::new(0, 3);
        move_left(&buf, &mut cursor);
        assert_eq!(cursor, Cursor::new(0, 2));
    }

    #[test]
    fn test_move_left_wraps_to_previous_line() {
        let buf = TextBuffer::from_str("hello\nworld");
        let mut cursor = Cursor::new(1, 0);
        move_left(&buf, &mut cursor);
        assert_eq!(cursor, Cursor::new(0, 5));
    }

    #[test]
    fn test_move_left_at_buffer_start() {
        let buf = TextBuffer::from_str("hello");
        let mut cursor = Cursor::new(0, 0);
        move_left(&buf, &mut cursor);
        assert_eq!(cursor, Cursor::new(0, 0));
    }

    #[test]
    fn test_move_right_wraps_to_next_line() {
        let buf = TextBuffer::from_str("hello\nworld");
        let mut cursor = Cursor::new(0, 5);
        move_right(&buf, &mut cursor);
        assert_eq!(cursor, Cursor::new(1, 0));
    }

    #[test]
    fn test_move_right_at_buffer_end() {
        let buf = TextBuffer::from_str("hello");
        let mut cursor = Cursor::new(0, 5);
        move_right(&buf, &mut cursor);
        assert_eq!(cursor, Cursor::new(0, 5));
    }

    #[test]
    fn test_horizontal_move_refreshes_desired_col() {
        let buf = TextBuffer::from_str("hello");
        let mut cursor = Cursor {
            line: 0,
            col: 2,
            desired_col: 9,
        };
        move_right(&buf, &mut cursor);
        assert_eq!(cursor.desired_col, 3);
    }

    #[test]
    fn test_move_up_at_first_line() {
        let buf = TextBuffer::from_str("hello\nworld");
        let mut cursor = Cursor::new(0, 3);
        move_up(&buf, &mut cursor);
        assert_eq!(cursor, Cursor::new(0, 3));
    }

    #[test]
    fn test_move_down_at_last_line() {
        let buf = TextBuffer::from_str("hello\nworld");
        let mut cursor = Cursor::new(1, 3);
        move_down(&buf, &mut cursor);
        assert_eq!(cursor, Cursor::new(1, 3));
    }

    #[test]
    fn test_move_up_clamps_but_keeps_desired() {
        let buf = TextBuffer::from_str("hi\nhello world");
        let mut cursor = Cursor::new(1, 8);
        move_up(&buf, &mut cursor);
        assert_eq!(cursor.position().col, 2);
        assert_eq!(cursor.desired_col, 8);
    }

    #[test]
    fn test_vertical_moves_snap_back() {
        let buf = TextBuffer::from_str("abc\nx\ndefgh");
        let mut cursor = Cursor::new(0, 3);

        move_down(&buf, &mut cursor);
        assert_eq!((cursor.line, cursor.col), (1, 1));

        move_down(&buf, &mut cursor);
        assert_eq!((cursor.line, cursor.col), (2, 3));

        move_up(&buf, &mut cursor);
        move_up(&buf, &mut cursor);
        assert_eq!((cursor.line, cursor.col), (0, 3));
    }

    #[test]
    fn test_vertical_moves_never_exceed_line_len() {
        let lines = ["", "a", "abcdef", "ab", "", "abcdefghij", "abc"];
        let buf = TextBuffer::from_str(&lines.join("\n"));
        for start_col in 0..12 {
            let mut cursor = Cursor::new(0, 0);
            move_to(&buf, &mut cursor, 5, start_col);
            for _ in 0..lines.len() {
                move_down(&buf, &mut cursor);
                assert!(cursor.col <= buf.line_len(cursor.line));
            }
            for _ in 0..lines.len() {
                move_up(&buf, &mut cursor);
                assert!(cursor.col <= buf.line_len(cursor.line));
            }
        }
    }

    #[test]
    fn test_line_start_and_end() {
        let buf = TextBuffer::from_str("hello\nworld");
        let mut cursor = Cursor::new(1, 2);
        move_to_line_end(&buf, &mut cursor);
        assert_eq!(cursor, Cursor::new(1, 5));
        move_to_line_start(&buf, &mut cursor);
        assert_eq!(cursor, Cursor::new(1, 0));
    }

    #[test]
    fn test_buffer_start_and_end() {
        let buf = TextBuffer::from_str("first\nsecond\nthird");
        let mut cursor = Cursor::new(1, 1);
        move_to_buffer_end(&buf, &mut cursor);
        assert_eq!(cursor, Cursor::new(2, 5));
        move_to_buffer_start(&mut cursor);
        assert_eq!(cursor, Cursor::new(0, 0));
    }

    #[test]
    fn test_move_to_clamps() {
        let buf = TextBuffer::from_str("ab\ncdef");
        let mut cursor = Cursor::default();
        move_to(&buf, &mut cursor, 9, 9);
        assert_eq!(cursor, Cursor::new(1, 4));
        move_to(&buf, &mut cursor, 0, 9);
        assert_eq!(cursor, Cursor::new(0, 2));
    }
}
