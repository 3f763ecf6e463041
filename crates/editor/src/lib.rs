//! gapedit-editor: the editing core built on `gapedit-buffer`.
//!
//! [`EditorCore`] owns one document, its cursor and its viewport. Hosts feed
//! it key, mouse and scroll events (or call the operations directly) and read
//! back lines, the cursor position and the caret origin for drawing.
//!
//! # Example
//!
//! ```
//! use gapedit_editor::{EditorConfig, EditorCore, Key, KeyEvent};
//!
//! let mut editor = EditorCore::new(&EditorConfig::default());
//! for ch in "hi".chars() {
//!     editor.handle_key(&KeyEvent::char(ch));
//! }
//! editor.handle_key(&KeyEvent::plain(Key::Return));
//! editor.insert_char('x');
//!
//! assert_eq!(editor.line_count(), 2);
//! assert_eq!(editor.line_content(0), "hi");
//! assert_eq!(editor.cursor_position().line, 1);
//! assert!(editor.modified());
//! ```

pub mod config;
pub mod edit;
mod editor_core;
pub mod input;
pub mod movement;
pub mod viewport;

pub use config::{ConfigError, EditorConfig};
pub use editor_core::{EditorCore, Handled};
pub use gapedit_buffer::{Cursor, Position, Selection, TextBuffer};
pub use input::{
    resolve_command, Command, Key, KeyEvent, Modifiers, MouseEvent, MouseEventKind, ScrollDelta,
};
pub use viewport::{GlyphMetrics, Viewport};
