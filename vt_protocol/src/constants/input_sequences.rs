// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bytes that make up keyboard and mouse reports sent to the controlled process.
//!
//! # Keyboard
//!
//! - Cursor keys: `CSI A..D` (or `SS3 A..D` in application cursor mode)
//! - F1-F4: `SS3 P..S`
//! - F5-F12 and editing keys: `CSI n ~`
//! - Modifiers: `CSI 1 ; m final` or `CSI n ; m ~` where `m = 1 + bits` and the bits
//!   are Shift=1, Alt=2, Ctrl=4, Meta=8
//!
//! # Mouse
//!
//! The button code packs the button in bits 0-1, the modifiers in bits 2-4, the motion
//! flag in bit 5 and the wheel flag in bit 6.

// ==================== Keyboard finals ====================

/// Up arrow final byte.
pub const ARROW_UP_FINAL: u8 = b'A';

/// Down arrow final byte.
pub const ARROW_DOWN_FINAL: u8 = b'B';

/// Right arrow final byte.
pub const ARROW_RIGHT_FINAL: u8 = b'C';

/// Left arrow final byte.
pub const ARROW_LEFT_FINAL: u8 = b'D';

/// `CSI Z`: Shift+Tab.
pub const BACKTAB_FINAL: u8 = b'Z';

/// `CSI H`: Home.
pub const SPECIAL_HOME_FINAL: u8 = b'H';

/// `CSI F`: End.
pub const SPECIAL_END_FINAL: u8 = b'F';

/// Terminator of `CSI n ~` keys.
pub const FUNCTION_KEY_TERMINATOR: u8 = b'~';

/// SS3 finals for F1-F4.
pub const SS3_F1_FINAL: u8 = b'P';
pub const SS3_F2_FINAL: u8 = b'Q';
pub const SS3_F3_FINAL: u8 = b'R';
pub const SS3_F4_FINAL: u8 = b'S';

/// Meta+b / Meta+f word motion, sent for Alt+Left / Alt+Right on macOS.
pub const WORD_BACKWARD_FINAL: u8 = b'b';
pub const WORD_FORWARD_FINAL: u8 = b'f';

// ==================== Keyboard tilde codes ====================

/// `CSI 2 ~`: Insert.
pub const SPECIAL_INSERT_CODE: u16 = 2;

/// `CSI 3 ~`: Delete.
pub const SPECIAL_DELETE_CODE: u16 = 3;

/// `CSI 5 ~`: Page Up.
pub const SPECIAL_PAGE_UP_CODE: u16 = 5;

/// `CSI 6 ~`: Page Down.
pub const SPECIAL_PAGE_DOWN_CODE: u16 = 6;

// Function key codes have gaps (16 and 22 are unused).
pub const FUNCTION_F5_CODE: u16 = 15;
pub const FUNCTION_F6_CODE: u16 = 17;
pub const FUNCTION_F7_CODE: u16 = 18;
pub const FUNCTION_F8_CODE: u16 = 19;
pub const FUNCTION_F9_CODE: u16 = 20;
pub const FUNCTION_F10_CODE: u16 = 21;
pub const FUNCTION_F11_CODE: u16 = 23;
pub const FUNCTION_F12_CODE: u16 = 24;

// ==================== Keyboard modifier bits ====================

pub const MODIFIER_SHIFT: u8 = 1;
pub const MODIFIER_ALT: u8 = 2;
pub const MODIFIER_CTRL: u8 = 4;
pub const MODIFIER_META: u8 = 8;

/// The modifier parameter is `1 + bits`, so an unmodified key would be `1`.
pub const MODIFIER_PARAMETER_BASE: u8 = 1;

// ==================== Mouse ====================

/// `CSI M`: prefix of Default (X10) and UTF-8 reports.
pub const MOUSE_X10_PREFIX: &[u8] = b"\x1b[M";

/// `CSI <`: prefix of SGR reports.
pub const MOUSE_SGR_PREFIX: &[u8] = b"\x1b[<";

/// SGR press final.
pub const MOUSE_SGR_PRESS: u8 = b'M';

/// SGR release final.
pub const MOUSE_SGR_RELEASE: u8 = b'm';

/// URXVT final.
pub const MOUSE_URXVT_FINAL: u8 = b'M';

/// Offset added to every byte of X10 style reports.
pub const MOUSE_X10_OFFSET: u16 = 32;

/// Largest 1-based coordinate a single byte X10 report can carry (255 - 32).
pub const MOUSE_X10_MAX_COORD: u16 = 223;

/// Largest 1-based coordinate the UTF-8 extension can carry (2047 - 32).
pub const MOUSE_UTF8_MAX_COORD: u16 = 2015;

/// Button code reported for a release in Default and UTF-8 encodings.
pub const MOUSE_RELEASE_BUTTON_CODE: u16 = 3;

/// Flag added for motion reports.
pub const MOUSE_MOTION_FLAG: u16 = 32;

/// Flag added for wheel buttons.
pub const MOUSE_WHEEL_FLAG: u16 = 64;

pub const MOUSE_MODIFIER_SHIFT: u16 = 4;
pub const MOUSE_MODIFIER_META: u16 = 8;
pub const MOUSE_MODIFIER_CTRL: u16 = 16;

/// `CSI I`: focus gained.
pub const FOCUS_GAINED_FINAL: u8 = b'I';

/// `CSI O`: focus lost.
pub const FOCUS_LOST_FINAL: u8 = b'O';
