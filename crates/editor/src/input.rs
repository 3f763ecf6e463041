//! Input event types and their mapping to editor commands.
//!
//! The windowing layer translates platform events into these types and feeds
//! them to [`EditorCore`](crate::EditorCore) one at a time, in arrival order.
//! Key repeat is the windowing layer's business: a held key arrives here as
//! a stream of ordinary key events.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self::new(Key::Char(ch), Modifiers::default())
    }

    /// Creates a KeyEvent for a non-character key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::default())
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub command: bool,
    pub option: bool,
    pub control: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.command && !self.option && !self.control
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    Backspace,
    /// Forward delete
    Delete,
    Return,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Escape,
}

/// A mouse event, positioned in surface pixels from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub position: (f32, f32),
}

impl MouseEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: MouseEventKind::Down,
            position: (x, y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down,
    Up,
    Moved,
}

/// Scroll delta from trackpad or mouse wheel, in pixels (positive = down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollDelta {
    pub dy: f32,
}

/// Discrete editor actions.
///
/// Every variant maps to exactly one [`EditorCore`](crate::EditorCore)
/// operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    InsertChar(char),
    InsertNewline,
    InsertTab,
    /// Delete the character before the cursor (Backspace)
    DeleteBackward,
    /// Delete the character after the cursor (Delete key)
    DeleteForward,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveToLineStart,
    MoveToLineEnd,
    MoveToBufferStart,
    MoveToBufferEnd,
}

/// Resolves a key event to a command.
///
/// Pure and stateless: every binding is a single modifier+key chord.
pub fn resolve_command(event: &KeyEvent) -> Option<Command> {
    let mods = &event.modifiers;

    match event.key {
        // Printable characters (no Command/Control modifier)
        Key::Char(ch) if !mods.command && !mods.control && !ch.is_control() => {
            Some(Command::InsertChar(ch))
        }

        Key::Return if !mods.command && !mods.control => Some(Command::InsertNewline),
        Key::Tab if !mods.command && !mods.control => Some(Command::InsertTab),

        Key::Backspace => Some(Command::DeleteBackward),
        Key::Delete => Some(Command::DeleteForward),

        Key::Left if !mods.command => Some(Command::MoveLeft),
        Key::Right if !mods.command => Some(Command::MoveRight),
        Key::Up if !mods.command => Some(Command::MoveUp),
        Key::Down if !mods.command => Some(Command::MoveDown),

        // Cmd+Left or Home → start of line
        Key::Left | Key::Home => Some(Command::MoveToLineStart),
        // Cmd+Right or End → end of line
        Key::Right | Key::End => Some(Command::MoveToLineEnd),

        Key::Up => Some(Command::MoveToBufferStart),
        Key::Down => Some(Command::MoveToBufferEnd),

        // Emacs-style line motions
        Key::Char('a') if mods.control && !mods.command => Some(Command::MoveToLineStart),
        Key::Char('e') if mods.control && !mods.command => Some(Command::MoveToLineEnd),

        _ => None,
    }
}
