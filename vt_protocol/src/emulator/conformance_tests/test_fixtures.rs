// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A sink that records every call, and helpers that feed bytes through an [`Emulator`].

use crate::{CharsetSlot, ChunkedByteSource, CursorMotion, DecodeError, DecodeStep,
            DecoderConfig, Emulator, EraseRegion, ScreenSink, TerminalMode,
            TextAttributes};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Glyphs(String, TextAttributes),
    Bell,
    Backspace,
    HorizontalTab,
    LineFeed,
    CarriageReturn,
    MoveCursor(CursorMotion),
    SaveCursor,
    RestoreCursor,
    Index,
    ReverseIndex,
    NextLine,
    SetTabStop,
    ClearTabStop { all: bool },
    Erase(EraseRegion),
    InsertBlankChars(u16),
    DeleteChars(u16),
    InsertLines(u16),
    DeleteLines(u16),
    Scroll(i32),
    SetScrollRegion { top: u16, bottom: Option<u16> },
    SetAttributes(TextAttributes),
    SetMode(TerminalMode, bool),
    DesignateCharset(CharsetSlot, char),
    InvokeCharset(CharsetSlot),
    ScreenAlignmentPattern,
    WindowTitle(String),
    IconTitle(String),
    Hyperlink(Option<String>),
    Reset,
    ResizeNotify { rows: u16, cols: u16 },
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
    pub cursor: Option<(u16, u16)>,
}

impl RecordingSink {
    /// All glyphs concatenated, attributes ignored.
    pub fn text(&self) -> String {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Glyphs(text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Everything except glyphs.
    pub fn controls(&self) -> Vec<SinkEvent> {
        self.events
            .iter()
            .filter(|event| !matches!(event, SinkEvent::Glyphs(..)))
            .cloned()
            .collect()
    }

    fn record(&mut self, event: SinkEvent) { self.events.push(event); }
}

impl ScreenSink for RecordingSink {
    fn write_glyphs(&mut self, text: &str, attrs: &TextAttributes) {
        self.record(SinkEvent::Glyphs(text.to_owned(), *attrs));
    }

    fn bell(&mut self) { self.record(SinkEvent::Bell); }
    fn backspace(&mut self) { self.record(SinkEvent::Backspace); }
    fn horizontal_tab(&mut self) { self.record(SinkEvent::HorizontalTab); }
    fn line_feed(&mut self) { self.record(SinkEvent::LineFeed); }
    fn carriage_return(&mut self) { self.record(SinkEvent::CarriageReturn); }

    fn move_cursor(&mut self, motion: CursorMotion) { self.record(SinkEvent::MoveCursor(motion)); }
    fn save_cursor(&mut self) { self.record(SinkEvent::SaveCursor); }
    fn restore_cursor(&mut self) { self.record(SinkEvent::RestoreCursor); }
    fn index(&mut self) { self.record(SinkEvent::Index); }
    fn reverse_index(&mut self) { self.record(SinkEvent::ReverseIndex); }
    fn next_line(&mut self) { self.record(SinkEvent::NextLine); }

    fn set_tab_stop(&mut self) { self.record(SinkEvent::SetTabStop); }
    fn clear_tab_stop(&mut self, all: bool) { self.record(SinkEvent::ClearTabStop { all }); }

    fn erase(&mut self, region: EraseRegion) { self.record(SinkEvent::Erase(region)); }
    fn insert_blank_chars(&mut self, count: u16) { self.record(SinkEvent::InsertBlankChars(count)); }
    fn delete_chars(&mut self, count: u16) { self.record(SinkEvent::DeleteChars(count)); }
    fn insert_lines(&mut self, count: u16) { self.record(SinkEvent::InsertLines(count)); }
    fn delete_lines(&mut self, count: u16) { self.record(SinkEvent::DeleteLines(count)); }

    fn scroll(&mut self, delta: i32) { self.record(SinkEvent::Scroll(delta)); }
    fn set_scroll_region(&mut self, top: u16, bottom: Option<u16>) {
        self.record(SinkEvent::SetScrollRegion { top, bottom });
    }

    fn set_attributes(&mut self, attrs: &TextAttributes) { self.record(SinkEvent::SetAttributes(*attrs)); }
    fn set_mode(&mut self, mode: TerminalMode, enabled: bool) {
        self.record(SinkEvent::SetMode(mode, enabled));
    }

    fn designate_charset(&mut self, slot: CharsetSlot, designator: char) {
        self.record(SinkEvent::DesignateCharset(slot, designator));
    }
    fn invoke_charset(&mut self, slot: CharsetSlot) { self.record(SinkEvent::InvokeCharset(slot)); }
    fn screen_alignment_pattern(&mut self) { self.record(SinkEvent::ScreenAlignmentPattern); }

    fn set_window_title(&mut self, title: &str) { self.record(SinkEvent::WindowTitle(title.to_owned())); }
    fn set_icon_title(&mut self, title: &str) { self.record(SinkEvent::IconTitle(title.to_owned())); }
    fn set_hyperlink(&mut self, uri: Option<&str>) {
        self.record(SinkEvent::Hyperlink(uri.map(str::to_owned)));
    }

    fn reset(&mut self) { self.record(SinkEvent::Reset); }

    fn resize_notify(&mut self, rows: u16, cols: u16) {
        self.record(SinkEvent::ResizeNotify { rows, cols });
    }

    fn cursor_position(&self) -> Option<(u16, u16)> { self.cursor }
}

pub type TestEmulator = Emulator<ChunkedByteSource, RecordingSink>;

/// An emulator over a closed source holding `bytes`.
pub fn create_test_emulator(bytes: impl AsRef<[u8]>) -> TestEmulator {
    Emulator::new(ChunkedByteSource::from(bytes.as_ref()), RecordingSink::default())
}

pub fn create_test_emulator_with_config(
    bytes: impl AsRef<[u8]>,
    config: DecoderConfig,
) -> TestEmulator {
    Emulator::with_config(
        ChunkedByteSource::from(bytes.as_ref()),
        RecordingSink::default(),
        config,
    )
}

/// Calls `next()` until end of stream, collecting errors.
pub fn run_to_end(emulator: &mut TestEmulator) -> Vec<DecodeError> {
    let mut errors = vec![];
    loop {
        match emulator.next() {
            Ok(DecodeStep::Dispatched) => {}
            Ok(DecodeStep::EndOfStream) => return errors,
            Ok(DecodeStep::NeedMoreInput) => panic!("closed source asked for more input"),
            Err(error) => errors.push(error),
        }
    }
}

/// Decodes `bytes` completely and returns the sink. Fails the test on any error.
pub fn decode(bytes: impl AsRef<[u8]>) -> RecordingSink {
    let mut emulator = create_test_emulator(bytes);
    let errors = run_to_end(&mut emulator);
    assert_eq!(errors, vec![], "no decode errors expected");
    emulator.into_parts().1
}
