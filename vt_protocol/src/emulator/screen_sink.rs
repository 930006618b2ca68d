// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The capability the decoder drives.
//!
//! The decoder never touches a grid. It turns every logical unit of input into one or
//! more calls on a [`ScreenSink`], and the embedder decides what they mean on screen.
//! Every method has an empty default body so a sink only implements what it renders.
//!
//! | Input                    | Sink call                                        |
//! | :----------------------- | :----------------------------------------------- |
//! | Printable character      | [`ScreenSink::write_glyphs`] (one char per call) |
//! | BEL, BS, HT, LF, CR      | [`ScreenSink::bell`], [`ScreenSink::backspace`], ... |
//! | Cursor movement          | [`ScreenSink::move_cursor`]                      |
//! | ED, EL, ECH              | [`ScreenSink::erase`]                            |
//! | SGR                      | [`ScreenSink::set_attributes`]                   |
//! | SM, RM, DECSET, DECRST   | [`ScreenSink::set_mode`]                         |
//! | OSC 0, 1, 2, 8           | titles and [`ScreenSink::set_hyperlink`]         |

use crate::{MouseEncoding, MouseReportingMode, TextAttributes};

/// Cursor movement. Counts and positions are 1-based with zero already replaced by the
/// default of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMotion {
    Up(u16),
    Down(u16),
    Forward(u16),
    Backward(u16),
    /// Down n lines, to column 1.
    NextLine(u16),
    /// Up n lines, to column 1.
    PrecedingLine(u16),
    ToColumn(u16),
    ToRow(u16),
    To { row: u16, col: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    /// From the cursor to the end (0).
    ToEnd,
    /// From the start to the cursor (1).
    ToStart,
    /// Everything (2).
    All,
    /// Scrollback buffer, display only (3).
    Scrollback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseRegion {
    Display(EraseMode),
    Line(EraseMode),
    /// Blank n characters starting at the cursor without moving it.
    Characters(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetSlot {
    G0,
    G1,
    G2,
    G3,
}

/// Modes toggled by `CSI h` / `CSI l` (with or without `?`) and the keypad ESC
/// sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    InsertMode,
    AutoNewLine,
    ApplicationCursorKeys,
    ApplicationKeypad,
    Column132,
    ReverseVideo,
    OriginMode,
    AutoWrap,
    CursorBlink,
    CursorVisible,
    AlternateBuffer,
    SaveCursor,
    AlternateBufferSaveCursor,
    BracketedPaste,
    /// The mode named by the sequence. The shared protocol state already holds the
    /// resulting value when this is called.
    MouseReporting(MouseReportingMode),
    MouseEncoding(MouseEncoding),
}

#[allow(unused_variables)]
pub trait ScreenSink {
    fn write_glyphs(&mut self, text: &str, attrs: &TextAttributes) {}

    fn bell(&mut self) {}
    fn backspace(&mut self) {}
    fn horizontal_tab(&mut self) {}
    fn line_feed(&mut self) {}
    fn carriage_return(&mut self) {}

    fn move_cursor(&mut self, motion: CursorMotion) {}
    fn save_cursor(&mut self) {}
    fn restore_cursor(&mut self) {}
    /// IND: down one line, scrolling at the bottom margin.
    fn index(&mut self) {}
    /// RI: up one line, scrolling at the top margin.
    fn reverse_index(&mut self) {}
    /// NEL: index plus carriage return.
    fn next_line(&mut self) {}

    fn set_tab_stop(&mut self) {}
    fn clear_tab_stop(&mut self, all: bool) {}

    fn erase(&mut self, region: EraseRegion) {}
    fn insert_blank_chars(&mut self, count: u16) {}
    fn delete_chars(&mut self, count: u16) {}
    fn insert_lines(&mut self, count: u16) {}
    fn delete_lines(&mut self, count: u16) {}

    /// Positive `delta` moves content up (SU), negative moves it down (SD).
    fn scroll(&mut self, delta: i32) {}
    /// `bottom` is [`None`] when the sequence left it out (use the last row).
    fn set_scroll_region(&mut self, top: u16, bottom: Option<u16>) {}

    fn set_attributes(&mut self, attrs: &TextAttributes) {}
    fn set_mode(&mut self, mode: TerminalMode, enabled: bool) {}

    fn designate_charset(&mut self, slot: CharsetSlot, designator: char) {}
    fn invoke_charset(&mut self, slot: CharsetSlot) {}
    /// DECALN.
    fn screen_alignment_pattern(&mut self) {}

    fn set_window_title(&mut self, title: &str) {}
    fn set_icon_title(&mut self, title: &str) {}
    /// OSC 8. [`None`] closes the current link.
    fn set_hyperlink(&mut self, uri: Option<&str>) {}

    /// RIS.
    fn reset(&mut self) {}

    /// `CSI 8 ; rows ; cols t`.
    fn resize_notify(&mut self, rows: u16, cols: u16) {}

    /// 1-based `(row, col)` used to answer DSR 6. Without it the query goes unanswered.
    fn cursor_position(&self) -> Option<(u16, u16)> { None }
}
