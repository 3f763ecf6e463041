/// Position in the buffer as (line, column) where both are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

/// Caret location plus the column remembered for vertical movement.
///
/// `col` may equal the line length, meaning "just past the last char".
/// `desired_col` is refreshed by typing, horizontal movement and clicks, and
/// left alone by vertical movement so the caret snaps back when it reaches a
/// line long enough again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
    pub desired_col: usize,
}

impl Cursor {
    /// Creates a cursor at `(line, col)` that remembers `col`.
    pub fn new(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            desired_col: col,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Records the current column as the one to restore on vertical moves.
    pub fn remember_col(&mut self) {
        self.desired_col = self.col;
    }
}

/// Anchor/head pair describing a selection.
///
/// Editing and navigation never modify it; it is carried for hosts that
/// drive selection themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: Cursor,
    pub head: Cursor,
    pub active: bool,
}

impl Selection {
    /// Starts an active selection between `anchor` and `head`.
    pub fn new(anchor: Cursor, head: Cursor) -> Self {
        Self {
            anchor,
            head,
            active: true,
        }
    }

    /// Returns the selected range as `(start, end)` in document order.
    ///
    /// `None` when inactive or when anchor and head coincide.
    pub fn range(&self) -> Option<(Position, Position)> {
        if !self.active {
            return None;
        }
        let anchor = self.anchor.position();
        let head = self.head.position();
        if anchor == head {
            return None;
        }
        Some((anchor.min(head), anchor.max(head)))
    }
}
