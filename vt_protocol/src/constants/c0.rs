// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C0 control bytes (0x00 - 0x1F) plus DEL.
//!
//! In Ground state each of these is a complete logical unit on its own. Inside a
//! sequence most of them break the sequence; CAN and SUB abort it silently.

/// NUL: ignored in Ground state.
pub const NUL: u8 = 0x00;

/// SOH: Ctrl+A.
pub const SOH: u8 = 0x01;

/// ENQ: Ctrl+E.
pub const ENQ: u8 = 0x05;

/// BEL: audible bell, also terminates OSC strings.
pub const BEL: u8 = 0x07;

/// BS: backspace.
pub const BS: u8 = 0x08;

/// HT: horizontal tab.
pub const HT: u8 = 0x09;

/// LF: line feed.
pub const LF: u8 = 0x0A;

/// VT: vertical tab, treated as LF.
pub const VT: u8 = 0x0B;

/// FF: form feed, treated as LF.
pub const FF: u8 = 0x0C;

/// CR: carriage return.
pub const CR: u8 = 0x0D;

/// SO: shift out, invoke G1 into GL.
pub const SO: u8 = 0x0E;

/// SI: shift in, invoke G0 into GL.
pub const SI: u8 = 0x0F;

/// CAN: cancel the sequence in progress.
pub const CAN: u8 = 0x18;

/// SUB: substitute, cancels the sequence in progress.
pub const SUB: u8 = 0x1A;

/// ESC: introduces every escape sequence.
pub const ESC: u8 = 0x1B;

/// FS: Ctrl+\.
pub const FS: u8 = 0x1C;

/// GS: Ctrl+].
pub const GS: u8 = 0x1D;

/// RS: Ctrl+^.
pub const RS: u8 = 0x1E;

/// US: Ctrl+_.
pub const US: u8 = 0x1F;

/// DEL: ignored in Ground state, sent by the Backspace key.
pub const DEL: u8 = 0x7F;

/// Mask applied to a letter to produce its Ctrl+letter control byte.
pub const CTRL_LETTER_MASK: u8 = 0x1F;

/// Returns true for the C0 range (0x00 - 0x1F).
#[must_use]
pub const fn is_c0_control(byte: u8) -> bool { byte < 0x20 }
