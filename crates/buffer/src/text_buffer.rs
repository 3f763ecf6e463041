//! TextBuffer pairs the gap buffer with its line index.
//!
//! It offers line-oriented and offset-oriented reads and the two primitive
//! mutations (insert one char, remove one char). Every mutation refreshes the
//! line index before returning, so reads never observe a stale index.

use crate::gap_buffer::GapBuffer;
use crate::line_index::{LineIndex, LineSpan};
use crate::types::Cursor;

/// Room reserved beyond the initial content.
pub const DEFAULT_INITIAL_GAP: usize = 256;

/// Gap-buffer backed text with a derived line index.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    buffer: GapBuffer,
    line_index: LineIndex,
}

impl TextBuffer {
    /// Creates a new empty text buffer.
    pub fn new() -> Self {
        Self::with_gap("", DEFAULT_INITIAL_GAP)
    }

    /// Creates a text buffer initialized with the given content.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        Self::with_gap(content, DEFAULT_INITIAL_GAP)
    }

    /// Creates a text buffer sized for `content` plus `gap` spare slots.
    pub fn with_gap(content: &str, gap: usize) -> Self {
        let char_count = content.chars().count();
        let mut buffer = GapBuffer::with_capacity(char_count + gap);
        for (pos, ch) in content.chars().enumerate() {
            buffer.insert(pos, ch);
        }

        let mut text = Self {
            buffer,
            line_index: LineIndex::new(),
        };
        text.rebuild_line_index();
        text
    }

    // ==================== Accessors ====================

    /// Returns the number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Returns the span of `line`, or `None` when it is out of range or the
    /// index no longer fits the content.
    pub fn line_span(&self, line: usize) -> Option<LineSpan> {
        let span = self.line_index.span(line)?;
        if span.end() > self.buffer.len() {
            return None;
        }
        Some(span)
    }

    /// Returns the chars of `line` without its newline.
    ///
    /// Empty when the line is out of range.
    pub fn line_chars(&self, line: usize) -> Vec<char> {
        match self.line_span(line) {
            Some(span) => self.buffer.range_chars(span.start, span.end()).collect(),
            None => Vec::new(),
        }
    }

    /// Returns the content of `line` as a String, without its newline.
    ///
    /// Empty when the line is out of range.
    pub fn line_content(&self, line: usize) -> String {
        match self.line_span(line) {
            Some(span) => self.buffer.slice(span.start, span.end()),
            None => String::new(),
        }
    }

    /// Returns the length of `line` (excluding newline), 0 when out of range.
    pub fn line_len(&self, line: usize) -> usize {
        self.line_span(line).map_or(0, |span| span.len)
    }

    /// Returns the total char count.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the entire content as a String.
    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.buffer.char_at(offset)
    }

    /// Read access to the underlying storage.
    pub fn storage(&self) -> &GapBuffer {
        &self.buffer
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    // ==================== Addressing ====================

    /// Maps a cursor to an absolute offset into the content.
    ///
    /// The column is clamped to the line length; an out-of-range line maps to 0.
    pub fn resolve_offset(&self, cursor: &Cursor) -> usize {
        match self.line_index.span(cursor.line) {
            Some(span) => span.start + cursor.col.min(span.len),
            None => 0,
        }
    }

    /// Maps an absolute offset (clamped to the content length) to a cursor
    /// that remembers its column.
    pub fn offset_to_cursor(&self, offset: usize) -> Cursor {
        let offset = offset.min(self.len());
        let line = self.line_index.line_at_offset(offset);
        let start = self.line_index.span(line).map_or(0, |span| span.start);
        Cursor::new(line, offset - start)
    }

    // ==================== Mutations ====================

    /// Rebuilds the line index from the current content.
    pub fn rebuild_line_index(&mut self) {
        self.line_index.rebuild(self.buffer.chars());
    }

    /// Inserts `ch` at `offset` and refreshes the line index.
    pub fn insert(&mut self, offset: usize, ch: char) {
        self.buffer.insert(offset, ch);
        self.rebuild_line_index();
    }

    /// Removes the char at `offset` and refreshes the line index.
    ///
    /// Returns `None` and leaves the buffer untouched when nothing is there.
    pub fn remove(&mut self, offset: usize) -> Option<char> {
        let removed = self.buffer.delete(offset)?;
        self.rebuild_line_index();
        Some(removed)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
