// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Printable characters and C0 controls in Ground state.

use super::test_fixtures::{SinkEvent, decode};
use crate::{CharsetSlot, TextAttributes};
use pretty_assertions::assert_eq;

#[test]
fn test_one_glyph_call_per_char() {
    let sink = decode("Hi");
    assert_eq!(
        sink.events,
        vec![
            SinkEvent::Glyphs("H".into(), TextAttributes::default()),
            SinkEvent::Glyphs("i".into(), TextAttributes::default()),
        ]
    );
}

#[test]
fn test_multibyte_utf8() {
    let sink = decode("héllo → 世界 🦀");
    assert_eq!(sink.text(), "héllo → 世界 🦀");
}

#[test]
fn test_invalid_utf8_becomes_replacement_char() {
    // Lone continuation byte, invalid lead byte, truncated 3 byte char.
    let sink = decode(b"a\x80b\xffc\xe2\x82d");
    assert_eq!(sink.text(), "a\u{FFFD}b\u{FFFD}c\u{FFFD}d");
}

#[test]
fn test_truncated_utf8_before_escape() {
    // The ESC that cut the character short still starts a sequence.
    let sink = decode(b"\xe2\x1b[Ax");
    assert_eq!(sink.text(), "\u{FFFD}x");
    assert_eq!(
        sink.controls(),
        vec![SinkEvent::MoveCursor(crate::CursorMotion::Up(1))]
    );
}

#[test]
fn test_c0_controls() {
    let sink = decode(b"\x07\x08\x09\x0a\x0b\x0c\x0d");
    assert_eq!(
        sink.events,
        vec![
            SinkEvent::Bell,
            SinkEvent::Backspace,
            SinkEvent::HorizontalTab,
            SinkEvent::LineFeed,
            SinkEvent::LineFeed,
            SinkEvent::LineFeed,
            SinkEvent::CarriageReturn,
        ]
    );
}

#[test]
fn test_shift_out_and_shift_in() {
    let sink = decode(b"\x0e\x0f");
    assert_eq!(
        sink.events,
        vec![
            SinkEvent::InvokeCharset(CharsetSlot::G1),
            SinkEvent::InvokeCharset(CharsetSlot::G0),
        ]
    );
}

#[test]
fn test_nul_and_del_ignored() {
    let sink = decode(b"a\x00b\x7fc");
    assert_eq!(sink.text(), "abc");
    assert_eq!(sink.controls(), vec![]);
}

#[test]
fn test_unsupported_c0_is_absorbed() {
    let sink = decode(b"a\x05b\x1cc");
    assert_eq!(sink.text(), "abc");
    assert_eq!(sink.controls(), vec![]);
}

#[test]
fn test_glyphs_carry_current_attributes() {
    let sink = decode("\x1b[1ma\x1b[0mb");
    let bold = TextAttributes {
        bold: true,
        ..TextAttributes::default()
    };
    assert_eq!(
        sink.events,
        vec![
            SinkEvent::SetAttributes(bold),
            SinkEvent::Glyphs("a".into(), bold),
            SinkEvent::SetAttributes(TextAttributes::default()),
            SinkEvent::Glyphs("b".into(), TextAttributes::default()),
        ]
    );
}
