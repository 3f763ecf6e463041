//! Gap buffer storage for editable text.
//!
//! The storage is a fixed-capacity array of chars with a movable empty region
//! (the gap). Edits happen at the gap, so typing and backspacing at one spot
//! cost O(1); relocating the gap costs O(distance moved).

use std::ops::Range;

/// Capacity used when growth starts from an empty allocation.
const MIN_GROWTH: usize = 16;
const GROWTH_FACTOR: usize = 2;

/// A gap buffer of `char`s.
///
/// Physical layout is `[content before gap | gap | content after gap]`.
/// The half-open range `gap_start..gap_end` never holds valid content.
#[derive(Debug, Clone)]
pub struct GapBuffer {
    data: Vec<char>,
    gap_start: usize,
    gap_end: usize,
}

impl GapBuffer {
    /// Creates an empty buffer whose gap spans the whole capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec!['\0'; capacity],
            gap_start: 0,
            gap_end: capacity,
        }
    }

    /// Returns the number of valid chars (the gap excluded).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    /// Returns true if the buffer holds no content.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the size of the backing storage.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the physical gap range `gap_start..gap_end`.
    pub fn gap_range(&self) -> Range<usize> {
        self.gap_start..self.gap_end
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Relocates the gap so that it starts at logical position `pos`.
    ///
    /// Positions past the end are clamped to the end. Cost is proportional to
    /// the distance between the old and new gap start.
    pub fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());

        if pos < self.gap_start {
            // [pos, gap_start) moves to the far side of the gap
            let shift = self.gap_start - pos;
            self.data
                .copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            // [gap_end, gap_end + shift) moves left across the gap
            let shift = pos - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Doubles the capacity, keeping the gap where it is.
    ///
    /// The added room becomes part of the gap; content after the gap is
    /// shifted to the new end of storage.
    fn grow(&mut self) {
        let old_capacity = self.data.len();
        let new_capacity = (old_capacity * GROWTH_FACTOR).max(MIN_GROWTH);
        let post_gap_len = old_capacity - self.gap_end;

        self.data.resize(new_capacity, '\0');
        if post_gap_len > 0 {
            self.data
                .copy_within(self.gap_end..old_capacity, new_capacity - post_gap_len);
        }
        self.gap_end = new_capacity - post_gap_len;

        log::debug!(
            "gap buffer grew from {} to {} (content {})",
            old_capacity,
            new_capacity,
            self.len()
        );
    }

    /// Inserts `ch` at logical position `pos` (clamped to the end).
    pub fn insert(&mut self, pos: usize, ch: char) {
        if self.gap_len() == 0 {
            self.grow();
        }
        self.move_gap_to(pos);
        self.data[self.gap_start] = ch;
        self.gap_start += 1;
    }

    /// Removes the char at logical position `pos`.
    ///
    /// Returns the removed char, or `None` (leaving the buffer untouched) when
    /// `pos` is past the last char.
    pub fn delete(&mut self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }

        if pos >= self.gap_start {
            // Absorb the char just after the gap
            self.move_gap_to(pos);
            let ch = self.data[self.gap_end];
            self.gap_end += 1;
            Some(ch)
        } else {
            // Absorb the char just before the gap
            self.move_gap_to(pos + 1);
            self.gap_start -= 1;
            Some(self.data[self.gap_start])
        }
    }

    /// Returns the char at logical position `pos`.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        let physical = if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        };
        Some(self.data[physical])
    }

    /// Iterates over the content in document order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Returns the whole content as one linear sequence.
    pub fn to_vec(&self) -> Vec<char> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.data[..self.gap_start]);
        out.extend_from_slice(&self.data[self.gap_end..]);
        out
    }

    /// Returns the chars in logical range `start..end` (clamped) as a String.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.range_chars(start, end).collect()
    }

    /// Iterates over the chars in logical range `start..end` (clamped)
    /// without walking the content before `start`.
    pub fn range_chars(&self, start: usize, end: usize) -> impl Iterator<Item = char> + '_ {
        let end = end.min(self.len());
        let start = start.min(end);

        let before = &self.data[start.min(self.gap_start)..end.min(self.gap_start)];
        let gap = self.gap_len();
        let after = &self.data[start.max(self.gap_start) + gap..end.max(self.gap_start) + gap];
        before.iter().chain(after.iter()).copied()
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
