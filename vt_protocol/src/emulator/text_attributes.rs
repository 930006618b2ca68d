// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// A color selected by SGR. `Indexed` covers the 8 basic colors (0-7), their bright
/// variants (8-15) and the 256 color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Indexed(u8),
    Rgb(u8, u8, u8),
}

/// The SGR "pen" the decoder maintains and hands to the sink with every glyph.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextAttributes {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub inverse: bool,
    pub hidden: bool,
    pub strikethrough: bool,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

impl TextAttributes {
    pub fn reset(&mut self) { *self = Self::default(); }

    #[must_use]
    pub fn is_default(&self) -> bool { *self == Self::default() }
}
