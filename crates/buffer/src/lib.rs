//! gapedit-buffer: gap buffer text storage for the gapedit editor core.
//!
//! This crate holds the document content and everything needed to address
//! it: a [`GapBuffer`] that absorbs edits at a movable gap, a [`LineIndex`]
//! derived from the content, and the [`Cursor`]/[`Selection`] types used to
//! address it in (line, column) terms.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Single-char insertion and removal at an absolute offset
//! - Line-based access for rendering
//! - Mapping between cursors and absolute offsets
//!
//! # Example
//!
//! ```
//! use gapedit_buffer::{Cursor, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_str("ab\ncd");
//! assert_eq!(buffer.line_count(), 2);
//! assert_eq!(buffer.line_content(1), "cd");
//!
//! let offset = buffer.resolve_offset(&Cursor::new(0, 2));
//! buffer.insert(offset, '!');
//! assert_eq!(buffer.content(), "ab!\ncd");
//! ```
//!
//! # Boundary handling
//!
//! Nothing here returns an error. Out-of-range lines read as empty, columns
//! past the end of a line are clamped, and removals with nothing to remove
//! are no-ops.

mod gap_buffer;
mod line_index;
mod text_buffer;
mod types;

pub use gap_buffer::GapBuffer;
pub use line_index::{LineIndex, LineSpan};
pub use text_buffer::{TextBuffer, DEFAULT_INITIAL_GAP};
pub use types::{Cursor, Position, Selection};
