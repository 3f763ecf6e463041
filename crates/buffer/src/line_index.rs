//! Line index for tracking line boundaries in the text buffer.
//!
//! The index is a cache derived from the buffer content. It is rebuilt in full
//! from a linear scan after every mutation rather than patched in place.

/// Extent of one line: its first char offset and its length, excluding the
/// terminating newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineSpan {
    pub start: usize,
    pub len: usize,
}

impl LineSpan {
    /// Offset one past the last char of the line.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Table mapping line number to [`LineSpan`].
///
/// There is always at least one entry: an empty document has one empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    lines: Vec<LineSpan>,
}

impl LineIndex {
    /// Creates an index describing an empty document.
    pub fn new() -> Self {
        Self {
            lines: vec![LineSpan::default()],
        }
    }

    /// Rebuilds the index from the given content.
    ///
    /// O(n) in the content length.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.lines.clear();

        let mut line_start = 0;
        let mut offset = 0;
        for ch in content {
            if ch == '\n' {
                self.lines.push(LineSpan {
                    start: line_start,
                    len: offset - line_start,
                });
                line_start = offset + 1;
            }
            offset += 1;
        }

        // Remainder after the last newline, possibly empty
        self.lines.push(LineSpan {
            start: line_start,
            len: offset - line_start,
        });
    }

    /// Returns the number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the span of the given line, or `None` if out of bounds.
    pub fn span(&self, line: usize) -> Option<LineSpan> {
        self.lines.get(line).copied()
    }

    /// Returns the line containing the given offset.
    ///
    /// An offset sitting on a newline belongs to the line that newline
    /// terminates. Offsets past the end map to the last line.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.lines.binary_search_by(|span| span.start.cmp(&offset)) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Returns all spans in line order.
    pub fn spans(&self) -> &[LineSpan] {
        &self.lines
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
