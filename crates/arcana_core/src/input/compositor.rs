//! Virtual keyboard buffer.
//!
//! # Responsibility
//! - Assemble a message from discrete key events, independent of any UI.
//!
//! # Invariants
//! - Single writer: mutation requires `&mut self`.
//! - Every operation is total; backspace on an empty buffer is a no-op.
//! - There is one state (editable) until the owner drops the compositor.

use crate::codec::symbol_table::SPACE_GLYPH;

/// Discrete event emitted by an input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A symbol key; appended as-is.
    Glyph(char),
    Backspace,
    /// Appends the space glyph, not a raw `' '`.
    Space,
    Newline,
}

/// Append-only text builder driven by key events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputCompositor {
    buffer: String,
}

impl InputCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_glyph(&mut self, symbol: char) {
        self.buffer.push(symbol);
    }

    /// Removes the last unit; does nothing when the buffer is empty.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn append_space(&mut self) {
        self.buffer.push(SPACE_GLYPH);
    }

    pub fn append_newline(&mut self) {
        self.buffer.push('\n');
    }

    /// Dispatches one surface event to the matching operation.
    pub fn apply(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Glyph(symbol) => self.append_glyph(symbol),
            KeyEvent::Backspace => self.backspace(),
            KeyEvent::Space => self.append_space(),
            KeyEvent::Newline => self.append_newline(),
        }
    }

    /// Current contents; repeatable and non-mutating.
    pub fn snapshot(&self) -> String {
        self.buffer.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Empties the buffer so composition can restart.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of units (chars) in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
