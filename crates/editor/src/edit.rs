//! Content-mutating operations.
//!
//! Each operation resolves the cursor to an offset, mutates the buffer (which
//! refreshes its line index), then updates the cursor. They return `true`
//! when the content changed and `false` for boundary no-ops.

use gapedit_buffer::{Cursor, TextBuffer};

/// Pulls a cursor back inside the document if it drifted out.
pub(crate) fn clamp_cursor(buffer: &TextBuffer, cursor: &mut Cursor) {
    cursor.line = cursor.line.min(buffer.line_count() - 1);
    cursor.col = cursor.col.min(buffer.line_len(cursor.line));
}

/// Inserts `ch` at the cursor and advances past it.
///
/// A `'\n'` is routed to [`insert_newline`].
pub fn insert_char(buffer: &mut TextBuffer, cursor: &mut Cursor, ch: char) -> bool {
    if ch == '\n' {
        return insert_newline(buffer, cursor);
    }
    clamp_cursor(buffer, cursor);

    let offset = buffer.resolve_offset(cursor);
    buffer.insert(offset, ch);
    cursor.col += 1;
    cursor.remember_col();
    true
}

/// Splits the current line at the cursor; the cursor lands at the start of
/// the new line.
pub fn insert_newline(buffer: &mut TextBuffer, cursor: &mut Cursor) -> bool {
    clamp_cursor(buffer, cursor);

    let offset = buffer.resolve_offset(cursor);
    buffer.insert(offset, '\n');
    cursor.line += 1;
    cursor.col = 0;
    cursor.remember_col();
    true
}

/// Deletes the char before the cursor (Backspace).
///
/// At column 0 this joins the line with the previous one. At the start of the
/// document it does nothing.
pub fn delete_char(buffer: &mut TextBuffer, cursor: &mut Cursor) -> bool {
    clamp_cursor(buffer, cursor);

    if cursor.line == 0 && cursor.col == 0 {
        return false;
    }

    if cursor.col > 0 {
        let offset = buffer.resolve_offset(cursor);
        if buffer.remove(offset - 1).is_none() {
            return false;
        }
        cursor.col -= 1;
    } else {
        // Line join: the newline ending the previous line goes
        cursor.line -= 1;
        cursor.col = buffer.line_len(cursor.line);
        let offset = buffer.resolve_offset(cursor);
        if buffer.remove(offset).is_none() {
            return false;
        }
    }

    cursor.remember_col();
    true
}

/// Deletes the char after the cursor (Delete key).
///
/// At the end of a line this joins the next line onto it. At the end of the
/// document it does nothing. The cursor does not move.
pub fn delete_forward(buffer: &mut TextBuffer, cursor: &mut Cursor) -> bool {
    clamp_cursor(buffer, cursor);

    let offset = buffer.resolve_offset(cursor);
    if buffer.remove(offset).is_none() {
        return false;
    }
    cursor.remember_col();
    true
}

/// Inserts every char of `text` in order, as if typed.
///
/// Each char is a separate mutation with its own line index rebuild, so the
/// cost grows with `text.len()` times the document length.
pub fn insert_str(buffer: &mut TextBuffer, cursor: &mut Cursor, text: &str) -> bool {
    let mut changed = false;
    for ch in text.chars() {
        changed |= insert_char(buffer, cursor, ch);
    }
    changed
}
