// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI (Control Sequence Introducer) final characters and related values.
//!
//! A CSI sequence is `ESC [ [marker] params [intermediates] final`. The final character
//! selects the operation, and the parameters default as listed on each constant.

// Cursor movement.

/// CSI A (CUU): cursor up n lines (default 1).
pub const CUU_CURSOR_UP: char = 'A';

/// CSI B (CUD): cursor down n lines (default 1).
pub const CUD_CURSOR_DOWN: char = 'B';

/// CSI C (CUF): cursor forward n columns (default 1).
pub const CUF_CURSOR_FORWARD: char = 'C';

/// CSI D (CUB): cursor backward n columns (default 1).
pub const CUB_CURSOR_BACKWARD: char = 'D';

/// CSI E (CNL): cursor to the start of the line n lines down.
pub const CNL_CURSOR_NEXT_LINE: char = 'E';

/// CSI F (CPL): cursor to the start of the line n lines up.
pub const CPL_CURSOR_PREV_LINE: char = 'F';

/// CSI G (CHA): cursor to absolute column.
pub const CHA_CURSOR_COLUMN: char = 'G';

/// CSI \` (HPA): cursor to absolute column, alias of CHA.
pub const HPA_CURSOR_COLUMN: char = '`';

/// CSI H (CUP): cursor to row;col (default 1;1).
pub const CUP_CURSOR_POSITION: char = 'H';

/// CSI f (HVP): same as CUP.
pub const HVP_CURSOR_POSITION: char = 'f';

/// CSI d (VPA): cursor to absolute row.
pub const VPA_LINE_POSITION: char = 'd';

/// CSI s (SCOSC): save cursor.
pub const SCP_SAVE_CURSOR: char = 's';

/// CSI u (SCORC): restore cursor.
pub const RCP_RESTORE_CURSOR: char = 'u';

// Erasing and editing.

/// CSI J (ED): erase in display.
pub const ED_ERASE_DISPLAY: char = 'J';

/// CSI K (EL): erase in line.
pub const EL_ERASE_LINE: char = 'K';

/// CSI X (ECH): erase n characters.
pub const ECH_ERASE_CHAR: char = 'X';

/// CSI @ (ICH): insert n blank characters.
pub const ICH_INSERT_CHAR: char = '@';

/// CSI P (DCH): delete n characters.
pub const DCH_DELETE_CHAR: char = 'P';

/// CSI L (IL): insert n lines.
pub const IL_INSERT_LINE: char = 'L';

/// CSI M (DL): delete n lines.
pub const DL_DELETE_LINE: char = 'M';

// Scrolling.

/// CSI S (SU): scroll up n lines.
pub const SU_SCROLL_UP: char = 'S';

/// CSI T (SD): scroll down n lines.
pub const SD_SCROLL_DOWN: char = 'T';

/// CSI r (DECSTBM): set top and bottom margins.
pub const DECSTBM_SET_MARGINS: char = 'r';

// Modes, attributes and tabs.

/// CSI m (SGR): select graphic rendition.
pub const SGR_SET_GRAPHICS: char = 'm';

/// CSI h (SM / DECSET): set mode.
pub const SM_SET_MODE: char = 'h';

/// CSI l (RM / DECRST): reset mode.
pub const RM_RESET_MODE: char = 'l';

/// CSI g (TBC): tab clear. 0 clears at cursor, 3 clears all.
pub const TBC_TAB_CLEAR: char = 'g';

/// TBC parameter that clears every tab stop.
pub const TBC_CLEAR_ALL: u16 = 3;

// Queries and window operations.

/// CSI c (DA): device attributes.
pub const DA_DEVICE_ATTRIBUTES: char = 'c';

/// CSI n (DSR): device status report.
pub const DSR_DEVICE_STATUS: char = 'n';

/// DSR 5: operating status query.
pub const DSR_STATUS_QUERY: u16 = 5;

/// DSR 6: cursor position query.
pub const DSR_CURSOR_POSITION_QUERY: u16 = 6;

/// Reply to DSR 5: terminal OK.
pub const DSR_STATUS_OK_REPLY: &[u8] = b"\x1b[0n";

/// Reply to primary and secondary DA: identify as VT102.
pub const DA_VT102_REPLY: &[u8] = b"\x1b[?6c";

/// CSI t (XTWINOPS): window manipulation.
pub const XTWINOPS_WINDOW_OPS: char = 't';

/// XTWINOPS 8: resize text area to rows;cols.
pub const XTWINOPS_RESIZE: u16 = 8;

// Private markers (only valid as the first byte after `ESC [`).

/// `?` marks DEC private modes.
pub const CSI_PRIVATE_MARKER: u8 = b'?';

/// `>` marks secondary DA and xterm key modifier options.
pub const CSI_GREATER_MARKER: u8 = b'>';

/// `<` and `=` are the remaining private markers.
pub const CSI_LESS_MARKER: u8 = b'<';

/// See [`CSI_LESS_MARKER`].
pub const CSI_EQUALS_MARKER: u8 = b'=';

/// Parameter separator.
pub const CSI_PARAM_SEPARATOR: u8 = b';';

/// Sub-parameter separator (SGR colon syntax).
pub const CSI_SUB_PARAM_SEPARATOR: u8 = b':';

/// Returns true for bytes that may open a CSI parameter string as a private marker.
#[must_use]
pub const fn is_private_marker(byte: u8) -> bool { matches!(byte, b'<'..=b'?') }
