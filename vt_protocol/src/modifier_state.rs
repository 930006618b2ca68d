// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keyboard modifier snapshot attached to every key and pointer event.
//!
//! A [`ModifierState`] is immutable once built. Host toolkits usually hand over
//! modifiers as a bitmask, so [`ModifierState::from_bitmask`] decodes the fixed bit
//! positions below. Every combination of bits is valid.
//!
//! | Modifier | Bit        |
//! | :------- | :--------- |
//! | Shift    | [`SHIFT_MASK`] |
//! | Ctrl     | [`CTRL_MASK`]  |
//! | Meta     | [`META_MASK`]  |
//! | Alt      | [`ALT_MASK`]   |

use crate::{MODIFIER_ALT, MODIFIER_CTRL, MODIFIER_META, MODIFIER_PARAMETER_BASE,
            MODIFIER_SHIFT};

pub const SHIFT_MASK: u32 = 1 << 0;
pub const CTRL_MASK: u32 = 1 << 1;
pub const META_MASK: u32 = 1 << 2;
pub const ALT_MASK: u32 = 1 << 3;

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierState {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl ModifierState {
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
        ctrl: false,
        meta: false,
    };

    pub const SHIFT: Self = Self { shift: true, ..Self::NONE };
    pub const ALT: Self = Self { alt: true, ..Self::NONE };
    pub const CTRL: Self = Self { ctrl: true, ..Self::NONE };
    pub const META: Self = Self { meta: true, ..Self::NONE };

    /// Decode a host modifier bitmask. Unknown bits are ignored.
    #[must_use]
    pub const fn from_bitmask(mask: u32) -> Self {
        Self {
            shift: mask & SHIFT_MASK != 0,
            alt: mask & ALT_MASK != 0,
            ctrl: mask & CTRL_MASK != 0,
            meta: mask & META_MASK != 0,
        }
    }

    #[must_use]
    pub const fn to_bitmask(self) -> u32 {
        let mut mask = 0;
        if self.shift {
            mask |= SHIFT_MASK;
        }
        if self.alt {
            mask |= ALT_MASK;
        }
        if self.ctrl {
            mask |= CTRL_MASK;
        }
        if self.meta {
            mask |= META_MASK;
        }
        mask
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.shift || self.alt || self.ctrl || self.meta)
    }

    /// Combine two snapshots.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            shift: self.shift || other.shift,
            alt: self.alt || other.alt,
            ctrl: self.ctrl || other.ctrl,
            meta: self.meta || other.meta,
        }
    }

    /// Same snapshot with `alt` and `meta` cleared. The key encoder strips these once
    /// they have been turned into an ESC prefix.
    #[must_use]
    pub const fn without_escape_modifiers(self) -> Self {
        Self {
            alt: false,
            meta: false,
            ..self
        }
    }

    /// The xterm modifier parameter: `1 + (Shift=1 | Alt=2 | Ctrl=4 | Meta=8)`.
    ///
    /// For example Shift+Left is sent as `CSI 1 ; 2 D`, and Ctrl+F1 as `CSI 1 ; 5 P`.
    #[must_use]
    pub const fn xterm_modifier_param(self) -> u8 {
        let mut bits = 0;
        if self.shift {
            bits |= MODIFIER_SHIFT;
        }
        if self.alt {
            bits |= MODIFIER_ALT;
        }
        if self.ctrl {
            bits |= MODIFIER_CTRL;
        }
        if self.meta {
            bits |= MODIFIER_META;
        }
        MODIFIER_PARAMETER_BASE + bits
    }
}

impl From<u32> for ModifierState {
    fn from(mask: u32) -> Self { Self::from_bitmask(mask) }
}
