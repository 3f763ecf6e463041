//! The editor core: one document, one cursor, one viewport.
//!
//! `EditorCore` owns the text buffer, cursor and selection outright and only
//! exposes the operation set below, so nothing outside can break the
//! buffer/cursor invariants. Each operation runs to completion (mutate, reindex,
//! move cursor, keep the caret on screen) before returning.

use gapedit_buffer::{Cursor, Position, Selection, TextBuffer};

use crate::config::EditorConfig;
use crate::edit;
use crate::input::{resolve_command, Command, KeyEvent, MouseEvent, MouseEventKind, ScrollDelta};
use crate::movement;
use crate::viewport::{GlyphMetrics, Viewport};

/// Whether an event was consumed by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The event was consumed
    Yes,
    /// The event has no binding and was ignored
    No,
}

/// Editable in-memory document with cursor-relative operations.
#[derive(Debug)]
pub struct EditorCore {
    buffer: TextBuffer,
    cursor: Cursor,
    selection: Selection,
    viewport: Viewport,
    modified: bool,
    tab_width: usize,
}

impl EditorCore {
    /// Creates an empty document.
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_content("", config)
    }

    /// Creates a document holding `content`, cursor at the start.
    pub fn with_content(content: &str, config: &EditorConfig) -> Self {
        Self {
            buffer: TextBuffer::with_gap(content, config.initial_gap),
            cursor: Cursor::default(),
            selection: Selection::default(),
            viewport: Viewport::new(config.metrics()),
            modified: false,
            tab_width: config.tab_width,
        }
    }

    // ==================== Queries ====================

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Chars of `line` without its newline; empty when out of range.
    pub fn line(&self, line: usize) -> Vec<char> {
        self.buffer.line_chars(line)
    }

    /// Content of `line` as a String; empty when out of range.
    pub fn line_content(&self, line: usize) -> String {
        self.buffer.line_content(line)
    }

    pub fn content(&self) -> String {
        self.buffer.content()
    }

    pub fn cursor_position(&self) -> Position {
        self.cursor.position()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// True once the content has changed since creation or the last
    /// [`mark_saved`](Self::mark_saved).
    pub fn modified(&self) -> bool {
        self.modified
    }

    /// Clears the modified flag after the host has persisted the content.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    // ==================== Rendering collaborator ====================

    /// Updates the visible area after the surface was resized.
    pub fn resize(&mut self, width_px: f32, height_px: f32) {
        let line_count = self.buffer.line_count();
        self.viewport.update_size(width_px, height_px, line_count);
        self.viewport.ensure_visible(self.cursor.line, line_count);
    }

    /// Switches to new glyph metrics (e.g. after a font change).
    pub fn set_metrics(&mut self, metrics: GlyphMetrics) {
        let line_count = self.buffer.line_count();
        self.viewport.set_metrics(metrics, line_count);
        self.viewport.ensure_visible(self.cursor.line, line_count);
    }

    /// Top-left surface pixel of the caret cell.
    pub fn caret_origin(&self) -> (f32, f32) {
        self.viewport.caret_origin(self.cursor.position())
    }

    // ==================== Edits ====================

    pub fn insert_char(&mut self, ch: char) {
        let changed = edit::insert_char(&mut self.buffer, &mut self.cursor, ch);
        self.finish_edit("insert_char", changed);
    }

    /// Backspace: deletes before the cursor, joining lines at column 0.
    pub fn delete_char(&mut self) {
        let changed = edit::delete_char(&mut self.buffer, &mut self.cursor);
        self.finish_edit("delete_char", changed);
    }

    pub fn insert_newline(&mut self) {
        let changed = edit::insert_newline(&mut self.buffer, &mut self.cursor);
        self.finish_edit("insert_newline", changed);
    }

    /// Delete key: deletes after the cursor, joining lines at line end.
    pub fn delete_forward(&mut self) {
        let changed = edit::delete_forward(&mut self.buffer, &mut self.cursor);
        self.finish_edit("delete_forward", changed);
    }

    pub fn insert_str(&mut self, text: &str) {
        let changed = edit::insert_str(&mut self.buffer, &mut self.cursor, text);
        self.finish_edit("insert_str", changed);
    }

    /// Inserts `tab_width` spaces, or a literal tab when it is 0.
    pub fn insert_tab(&mut self) {
        let changed = if self.tab_width == 0 {
            edit::insert_char(&mut self.buffer, &mut self.cursor, '\t')
        } else {
            let spaces = " ".repeat(self.tab_width);
            edit::insert_str(&mut self.buffer, &mut self.cursor, &spaces)
        };
        self.finish_edit("insert_tab", changed);
    }

    // ==================== Navigation ====================

    pub fn move_left(&mut self) {
        movement::move_left(&self.buffer, &mut self.cursor);
        self.finish_move("move_left");
    }

    pub fn move_right(&mut self) {
        movement::move_right(&self.buffer, &mut self.cursor);
        self.finish_move("move_right");
    }

    pub fn move_up(&mut self) {
        movement::move_up(&self.buffer, &mut self.cursor);
        self.finish_move("move_up");
    }

    pub fn move_down(&mut self) {
        movement::move_down(&self.buffer, &mut self.cursor);
        self.finish_move("move_down");
    }

    pub fn move_to_line_start(&mut self) {
        movement::move_to_line_start(&self.buffer, &mut self.cursor);
        self.finish_move("move_to_line_start");
    }

    pub fn move_to_line_end(&mut self) {
        movement::move_to_line_end(&self.buffer, &mut self.cursor);
        self.finish_move("move_to_line_end");
    }

    pub fn move_to_buffer_start(&mut self) {
        movement::move_to_buffer_start(&mut self.cursor);
        self.finish_move("move_to_buffer_start");
    }

    pub fn move_to_buffer_end(&mut self) {
        movement::move_to_buffer_end(&self.buffer, &mut self.cursor);
        self.finish_move("move_to_buffer_end");
    }

    /// Places the cursor at `(line, col)`, clamped into the document.
    pub fn set_cursor(&mut self, line: usize, col: usize) {
        movement::move_to(&self.buffer, &mut self.cursor, line, col);
        self.finish_move("set_cursor");
    }

    /// Places the cursor under a content-space point (pixels from the top-left
    /// of the document, scroll already applied).
    pub fn move_to_point(&mut self, content_x: f32, content_y: f32) {
        let estimate = self.viewport.point_to_estimate(content_x, content_y);
        movement::move_to(&self.buffer, &mut self.cursor, estimate.line, estimate.col);
        self.finish_move("move_to_point");
    }

    // ==================== Event entry points ====================

    /// Executes one command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::InsertChar(ch) => self.insert_char(ch),
            Command::InsertNewline => self.insert_newline(),
            Command::InsertTab => self.insert_tab(),
            Command::DeleteBackward => self.delete_char(),
            Command::DeleteForward => self.delete_forward(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::MoveToLineStart => self.move_to_line_start(),
            Command::MoveToLineEnd => self.move_to_line_end(),
            Command::MoveToBufferStart => self.move_to_buffer_start(),
            Command::MoveToBufferEnd => self.move_to_buffer_end(),
        }
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> Handled {
        match resolve_command(event) {
            Some(command) => {
                self.apply(command);
                Handled::Yes
            }
            None => Handled::No,
        }
    }

    /// Mouse-down places the cursor; other mouse events are ignored.
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> Handled {
        if event.kind != MouseEventKind::Down {
            return Handled::No;
        }
        let (x, y) = event.position;
        let estimate = self.viewport.screen_to_estimate(x, y);
        movement::move_to(&self.buffer, &mut self.cursor, estimate.line, estimate.col);
        self.finish_move("handle_mouse");
        Handled::Yes
    }

    /// Scrolls by whole lines; sub-line deltas are dropped.
    pub fn handle_scroll(&mut self, delta: ScrollDelta) {
        let line_height = self.viewport.metrics().line_height;
        let lines = (delta.dy / line_height).round();
        if lines == 0.0 || !lines.is_finite() {
            return;
        }
        self.viewport
            .scroll_by_lines(lines as isize, self.buffer.line_count());
    }

    // ==================== Bookkeeping ====================

    fn finish_edit(&mut self, op: &str, changed: bool) {
        if changed {
            self.modified = true;
        }
        self.finish_move(op);
    }

    fn finish_move(&mut self, op: &str) {
        self.viewport
            .ensure_visible(self.cursor.line, self.buffer.line_count());
        log::trace!(
            "{}: cursor {:?} lines {}",
            op,
            self.cursor.position(),
            self.buffer.line_count()
        );
    }
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}
