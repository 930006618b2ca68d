// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI (`CSI n h`) and DEC private (`CSI ? n h`) mode numbers.

// ANSI modes.

/// IRM - insert / replace mode (4).
pub const IRM_INSERT_MODE: u16 = 4;

/// LNM - automatic newline mode (20).
pub const LNM_AUTO_NEWLINE: u16 = 20;

// DEC terminal behavior modes.

/// DECCKM - application cursor keys (1).
pub const DECCKM_CURSOR_KEYS: u16 = 1;

/// DECCOLM - 132 column mode (3).
pub const DECCOLM_132_COLUMN: u16 = 3;

/// DECSCNM - reverse video (5).
pub const DECSCNM_REVERSE_VIDEO: u16 = 5;

/// DECOM - origin mode (6).
pub const DECOM_ORIGIN_MODE: u16 = 6;

/// DECAWM - auto wrap (7).
pub const DECAWM_AUTO_WRAP: u16 = 7;

/// att610 - blinking cursor (12).
pub const CURSOR_BLINK: u16 = 12;

/// DECTCEM - cursor visible (25).
pub const DECTCEM_SHOW_CURSOR: u16 = 25;

// Alternate screen.

/// Alternate screen buffer, legacy form (47).
pub const ALT_SCREEN_BUFFER_LEGACY: u16 = 47;

/// Alternate screen buffer (1047).
pub const ALT_SCREEN_BUFFER: u16 = 1047;

/// Save / restore cursor as in DECSC (1048).
pub const SAVE_CURSOR_DEC: u16 = 1048;

/// Save cursor and switch to the cleared alternate screen (1049).
pub const ALT_SCREEN_SAVE_CURSOR: u16 = 1049;

/// Bracketed paste (2004).
pub const BRACKETED_PASTE_MODE: u16 = 2004;

// Mouse reporting modes. Exactly one is active at a time.

/// Normal tracking: press and release (1000).
pub const MOUSE_NORMAL_MODE: u16 = 1000;

/// Highlight tracking (1001).
pub const MOUSE_HILITE_MODE: u16 = 1001;

/// Button event tracking: press, release and drag (1002).
pub const MOUSE_BUTTON_MOTION_MODE: u16 = 1002;

/// Any event tracking: everything including motion with no button held (1003).
pub const MOUSE_ALL_MOTION_MODE: u16 = 1003;

/// Focus in / out reporting (1004).
pub const MOUSE_FOCUS_EVENTS_MODE: u16 = 1004;

// Mouse report encodings. Independent of the reporting mode.

/// UTF-8 coordinate extension (1005).
pub const MOUSE_UTF8_ENCODING: u16 = 1005;

/// SGR extended reports (1006).
pub const MOUSE_SGR_ENCODING: u16 = 1006;

/// URXVT decimal reports (1015).
pub const MOUSE_URXVT_ENCODING: u16 = 1015;
