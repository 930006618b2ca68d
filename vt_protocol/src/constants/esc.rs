// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Direct ESC (Escape) sequence constants.
//!
//! ESC sequences are the non-parameterized terminal control codes that predate CSI.
//! The byte following ESC either completes the sequence, opens a longer one (CSI, OSC,
//! DCS), or is an intermediate that needs exactly one more byte.

// Sequence introducers.

/// ESC [ opens a CSI sequence.
pub const CSI_BRACKET: u8 = b'[';

/// ESC ] opens an OSC string.
pub const OSC_BRACKET: u8 = b']';

/// ESC P opens a DCS string.
pub const DCS_INTRODUCER: u8 = b'P';

/// ESC \ is the string terminator (ST).
pub const ST_BACKSLASH: u8 = b'\\';

/// ESC O is SS3, used for F1-F4 and application mode cursor keys.
pub const SS3_O: u8 = b'O';

// Cursor save / restore.

/// ESC 7 (DECSC): save cursor position and attributes.
pub const DECSC_SAVE_CURSOR: u8 = b'7';

/// ESC 8 (DECRC): restore cursor position and attributes.
pub const DECRC_RESTORE_CURSOR: u8 = b'8';

// Line movement.

/// ESC D (IND): index, move down one line scrolling at the bottom margin.
pub const IND_INDEX: u8 = b'D';

/// ESC E (NEL): next line.
pub const NEL_NEXT_LINE: u8 = b'E';

/// ESC M (RI): reverse index, move up one line scrolling at the top margin.
pub const RI_REVERSE_INDEX: u8 = b'M';

// Misc.

/// ESC H (HTS): set a tab stop at the cursor column.
pub const HTS_TAB_SET: u8 = b'H';

/// ESC c (RIS): reset to initial state.
pub const RIS_RESET_TERMINAL: u8 = b'c';

/// ESC = (DECKPAM): application keypad.
pub const DECKPAM_APPLICATION_KEYPAD: u8 = b'=';

/// ESC > (DECKPNM): normal keypad.
pub const DECKPNM_NORMAL_KEYPAD: u8 = b'>';

// Intermediates (need one more byte).

/// ESC ( designates G0.
pub const G0_CHARSET_INTERMEDIATE: u8 = b'(';

/// ESC ) designates G1.
pub const G1_CHARSET_INTERMEDIATE: u8 = b')';

/// ESC * designates G2.
pub const G2_CHARSET_INTERMEDIATE: u8 = b'*';

/// ESC + designates G3.
pub const G3_CHARSET_INTERMEDIATE: u8 = b'+';

/// ESC # introduces DEC line attribute and alignment sequences.
pub const DEC_LINE_INTERMEDIATE: u8 = b'#';

/// ESC # 8 (DECALN): fill the screen with `E`.
pub const DECALN_SCREEN_ALIGNMENT: u8 = b'8';

/// Returns true for the intermediate range (0x20 - 0x2F).
#[must_use]
pub const fn is_intermediate(byte: u8) -> bool { matches!(byte, 0x20..=0x2F) }

/// Returns true for bytes that finish an ESC or CSI sequence.
#[must_use]
pub const fn is_final(byte: u8) -> bool { matches!(byte, 0x30..=0x7E) }
