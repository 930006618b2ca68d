// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{MOUSE_WHEEL_FLAG, ModifierState};

/// Pointer buttons. The discriminant is the identifier hosts use on the wire; the
/// report code is derived from it by [`ButtonId::report_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ButtonId {
    Left = 0,
    Middle = 1,
    Right = 2,
    ScrollDown = 4,
    ScrollUp = 5,
}

impl ButtonId {
    #[must_use]
    pub const fn is_wheel(self) -> bool { matches!(self, Self::ScrollDown | Self::ScrollUp) }

    /// Left/Middle/Right map to 0/1/2. Wheel buttons map to `(id - 4) | 64`.
    #[must_use]
    pub const fn report_code(self) -> u16 {
        let id = self as u16;
        if self.is_wheel() {
            (id - 4) | MOUSE_WHEEL_FLAG
        } else {
            id
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Pressed(ButtonId),
    Released(ButtonId),
    /// Motion with no button held.
    Moved,
    /// Motion with a button held.
    Dragged(ButtonId),
    WheelMoved(ButtonId),
}

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermSize {
    pub cols: u16,
    pub rows: u16,
}

/// 1-based cell position. Both coordinates are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermPos {
    col: u16,
    row: u16,
}

impl TermPos {
    /// Builds a position, bumping zero coordinates up to 1.
    #[must_use]
    pub fn new(col: u16, row: u16) -> Self {
        Self {
            col: col.max(1),
            row: row.max(1),
        }
    }

    /// Clamp arbitrary (possibly negative or out of range) host coordinates into
    /// `[1, cols] x [1, rows]`.
    #[must_use]
    pub fn clamped(x: i32, y: i32, size: TermSize) -> Self {
        let clamp = |value: i32, bound: u16| -> u16 {
            let bound = i32::from(bound.max(1));
            // In [1, u16::MAX] after the clamp.
            u16::try_from(value.clamp(1, bound)).unwrap_or(1)
        };
        Self {
            col: clamp(x, size.cols),
            row: clamp(y, size.rows),
        }
    }

    #[must_use]
    pub const fn col(self) -> u16 { self.col }

    #[must_use]
    pub const fn row(self) -> u16 { self.row }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pos: TermPos,
    pub modifiers: ModifierState,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(kind: PointerEventKind, pos: TermPos, modifiers: ModifierState) -> Self {
        Self {
            kind,
            pos,
            modifiers,
        }
    }
}
