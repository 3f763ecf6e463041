//! Viewport arithmetic for a fixed-pitch text grid.
//!
//! The viewport is the mapping layer between buffer coordinates and the
//! rendering surface. It knows the monospace glyph metrics, how many lines
//! fit on screen and how far the content is scrolled. It never looks at
//! buffer content; callers pass the line count where clamping needs it.
//!
//! - `visible_range()` returns which buffer lines are on screen
//! - `caret_origin()` places the caret in screen pixels
//! - `point_to_estimate()` turns a content-space point into an unclamped
//!   (line, column) estimate for click handling

use std::ops::Range;

use gapedit_buffer::Position;
use serde::{Deserialize, Serialize};

/// Fixed glyph cell size of a monospace font, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphMetrics {
    /// Horizontal advance of every glyph
    pub glyph_width: f32,
    /// Height of one text line
    pub line_height: f32,
}

impl GlyphMetrics {
    pub const DEFAULT: GlyphMetrics = GlyphMetrics {
        glyph_width: 8.0,
        line_height: 16.0,
    };

    pub fn new(glyph_width: f32, line_height: f32) -> Self {
        Self {
            glyph_width,
            line_height,
        }
    }

    /// True when both dimensions are finite and positive.
    pub fn is_valid(&self) -> bool {
        self.glyph_width.is_finite()
            && self.line_height.is_finite()
            && self.glyph_width > 0.0
            && self.line_height > 0.0
    }
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scroll state and screen mapping for the text area.
///
/// Scrolling is tracked as a whole first visible line; pixel offsets are
/// derived from it, so fractional line heights never shift the top line.
#[derive(Debug, Clone)]
pub struct Viewport {
    metrics: GlyphMetrics,
    first_line: usize,
    width_px: f32,
    height_px: f32,
    visible_lines: usize,
    visible_cols: usize,
}

impl Viewport {
    /// Creates a viewport with zero visible lines.
    ///
    /// Call `update_size()` once the surface dimensions are known.
    pub fn new(metrics: GlyphMetrics) -> Self {
        let metrics = if metrics.is_valid() {
            metrics
        } else {
            log::warn!("invalid glyph metrics {:?}, using defaults", metrics);
            GlyphMetrics::DEFAULT
        };
        Self {
            metrics,
            first_line: 0,
            width_px: 0.0,
            height_px: 0.0,
            visible_lines: 0,
            visible_cols: 0,
        }
    }

    pub fn metrics(&self) -> GlyphMetrics {
        self.metrics
    }

    /// Replaces the glyph metrics (e.g. after a font size change), keeping
    /// the surface size and the first visible line.
    pub fn set_metrics(&mut self, metrics: GlyphMetrics, line_count: usize) {
        if !metrics.is_valid() {
            log::warn!("ignoring invalid glyph metrics {:?}", metrics);
            return;
        }
        self.metrics = metrics;
        self.update_size(self.width_px, self.height_px, line_count);
    }

    /// Number of lines that fit fully on screen.
    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    /// Number of glyph columns that fit fully on screen.
    pub fn visible_cols(&self) -> usize {
        self.visible_cols
    }

    /// Scroll offset in pixels; always a whole number of lines.
    pub fn scroll_offset_px(&self) -> f32 {
        self.first_line as f32 * self.metrics.line_height
    }

    /// First buffer line drawn at the top of the surface.
    pub fn first_visible_line(&self) -> usize {
        self.first_line
    }

    /// Recomputes the visible grid from the surface size in pixels and
    /// re-clamps the scroll position.
    pub fn update_size(&mut self, width_px: f32, height_px: f32, line_count: usize) {
        self.width_px = sanitize_px(width_px);
        self.height_px = sanitize_px(height_px);
        self.visible_lines = (self.height_px / self.metrics.line_height).floor() as usize;
        self.visible_cols = (self.width_px / self.metrics.glyph_width).floor() as usize;
        self.scroll_to(self.first_line, line_count);
    }

    /// Sets the scroll offset in pixels, snapped to the nearest line.
    pub fn set_scroll_offset_px(&mut self, px: f32, line_count: usize) {
        let line = to_index((px / self.metrics.line_height).round());
        self.scroll_to(line, line_count);
    }

    /// Scrolls so that `line` is at the top, clamped so the last line cannot
    /// scroll above the bottom of the viewport.
    pub fn scroll_to(&mut self, line: usize, line_count: usize) {
        let max_line = line_count.saturating_sub(self.visible_lines);
        self.first_line = line.min(max_line);
    }

    /// Scrolls by `delta` lines (negative scrolls up), clamped.
    pub fn scroll_by_lines(&mut self, delta: isize, line_count: usize) {
        let line = if delta < 0 {
            self.first_line.saturating_sub(delta.unsigned_abs())
        } else {
            self.first_line.saturating_add(delta.unsigned_abs())
        };
        self.scroll_to(line, line_count);
    }

    /// Buffer lines that intersect the viewport.
    pub fn visible_range(&self, line_count: usize) -> Range<usize> {
        let start = self.first_line.min(line_count);
        let end = (start + self.visible_lines).min(line_count);
        start..end
    }

    /// Scrolls the minimum amount needed to bring `line` on screen.
    ///
    /// Returns `true` if the scroll position changed.
    pub fn ensure_visible(&mut self, line: usize, line_count: usize) -> bool {
        let old_first = self.first_line;
        let visible = self.visible_lines.max(1);

        if line < self.first_line {
            self.scroll_to(line, line_count);
        } else if line >= self.first_line + visible {
            self.scroll_to(line + 1 - visible, line_count);
        }

        self.first_line != old_first
    }

    /// Converts a point on the surface to content coordinates by undoing the
    /// scroll offset.
    pub fn screen_to_content(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (screen_x, screen_y + self.scroll_offset_px())
    }

    /// Estimates the (line, column) under a content-space point.
    ///
    /// The line is the row the point falls in; the column rounds to the
    /// nearest glyph boundary so a click on the right half of a glyph lands
    /// after it. Negative coordinates map to 0. The result is not clamped to
    /// the document.
    pub fn point_to_estimate(&self, content_x: f32, content_y: f32) -> Position {
        let line = (content_y / self.metrics.line_height).floor();
        let col = (content_x / self.metrics.glyph_width).round();
        Position::new(to_index(line), to_index(col))
    }

    /// Like [`point_to_estimate`](Self::point_to_estimate) for a surface
    /// point. The row is counted from the first visible line, so the top
    /// row always maps to it whatever the line height.
    pub fn screen_to_estimate(&self, screen_x: f32, screen_y: f32) -> Position {
        let row = (screen_y / self.metrics.line_height).floor();
        let col = (screen_x / self.metrics.glyph_width).round();
        Position::new(self.first_line + to_index(row), to_index(col))
    }

    /// Top-left pixel of the caret cell for `pos`, in surface coordinates.
    pub fn caret_origin(&self, pos: Position) -> (f32, f32) {
        let x = pos.col as f32 * self.metrics.glyph_width;
        let rows = pos.line as f32 - self.first_line as f32;
        (x, rows * self.metrics.line_height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(GlyphMetrics::DEFAULT)
    }
}

/// Negative and non-finite sizes become 0.
fn sanitize_px(px: f32) -> f32 {
    if px.is_finite() {
        px.max(0.0)
    } else {
        0.0
    }
}

/// Negative and NaN values become 0.
fn to_index(value: f32) -> usize {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value as usize
    }
}
