// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ModifierState;

/// Keys the encoder knows how to send. Printable keys arrive as [`KeyCode::Char`] with
/// Shift already applied by the host (`'A'`, not `Shift+'a'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    Backspace,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Insert,
    Delete,
    PageUp,
    PageDown,
    /// F1 through F12.
    Function(u8),
    KeypadUp,
    KeypadDown,
    KeypadLeft,
    KeypadRight,
}

impl KeyCode {
    /// Cursor keys always get an ESC prefix for Alt and Meta.
    #[must_use]
    pub const fn is_cursor_key(self) -> bool {
        matches!(
            self,
            Self::Up | Self::Down | Self::Left | Self::Right | Self::Home | Self::End
        )
    }

    /// Keys that accept the xterm modifier parameter, along with the cursor keys.
    #[must_use]
    pub const fn is_function_key(self) -> bool {
        matches!(
            self,
            Self::Function(_) | Self::Insert | Self::Delete | Self::PageUp | Self::PageDown
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: ModifierState,
}

impl KeyEvent {
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: ModifierState) -> Self {
        Self { code, modifiers }
    }

    #[must_use]
    pub const fn plain(code: KeyCode) -> Self { Self::new(code, ModifierState::NONE) }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self { Self::plain(code) }
}
