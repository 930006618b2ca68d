// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement, scrolling, tabs and the two and three byte ESC sequences.

use super::test_fixtures::{SinkEvent, decode};
use crate::{CharsetSlot, CursorMotion, TerminalMode};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("\x1b[A", CursorMotion::Up(1) ; "cuu default")]
#[test_case("\x1b[0A", CursorMotion::Up(1) ; "cuu zero means one")]
#[test_case("\x1b[5A", CursorMotion::Up(5) ; "cuu")]
#[test_case("\x1b[3B", CursorMotion::Down(3) ; "cud")]
#[test_case("\x1b[2C", CursorMotion::Forward(2) ; "cuf")]
#[test_case("\x1b[4D", CursorMotion::Backward(4) ; "cub")]
#[test_case("\x1b[2E", CursorMotion::NextLine(2) ; "cnl")]
#[test_case("\x1b[F", CursorMotion::PrecedingLine(1) ; "cpl")]
#[test_case("\x1b[10G", CursorMotion::ToColumn(10) ; "cha")]
#[test_case("\x1b[7`", CursorMotion::ToColumn(7) ; "hpa")]
#[test_case("\x1b[12d", CursorMotion::ToRow(12) ; "vpa")]
#[test_case("\x1b[H", CursorMotion::To { row: 1, col: 1 } ; "cup home")]
#[test_case("\x1b[5;10H", CursorMotion::To { row: 5, col: 10 } ; "cup")]
#[test_case("\x1b[;8H", CursorMotion::To { row: 1, col: 8 } ; "cup missing row")]
#[test_case("\x1b[3;4f", CursorMotion::To { row: 3, col: 4 } ; "hvp")]
fn test_cursor_motion(input: &str, expected: CursorMotion) {
    assert_eq!(decode(input).events, vec![SinkEvent::MoveCursor(expected)]);
}

#[test_case("\x1b7", SinkEvent::SaveCursor ; "decsc")]
#[test_case("\x1b8", SinkEvent::RestoreCursor ; "decrc")]
#[test_case("\x1b[s", SinkEvent::SaveCursor ; "scp")]
#[test_case("\x1b[u", SinkEvent::RestoreCursor ; "rcp")]
#[test_case("\x1bD", SinkEvent::Index ; "ind")]
#[test_case("\x1bE", SinkEvent::NextLine ; "nel")]
#[test_case("\x1bM", SinkEvent::ReverseIndex ; "ri")]
#[test_case("\x1bH", SinkEvent::SetTabStop ; "hts")]
#[test_case("\x1b[g", SinkEvent::ClearTabStop { all: false } ; "tbc current")]
#[test_case("\x1b[3g", SinkEvent::ClearTabStop { all: true } ; "tbc all")]
#[test_case("\x1b[S", SinkEvent::Scroll(1) ; "su")]
#[test_case("\x1b[4T", SinkEvent::Scroll(-4) ; "sd")]
#[test_case("\x1b[2;20r", SinkEvent::SetScrollRegion { top: 2, bottom: Some(20) } ; "decstbm")]
#[test_case("\x1b[r", SinkEvent::SetScrollRegion { top: 1, bottom: None } ; "decstbm reset")]
#[test_case("\x1b[8;40;120t", SinkEvent::ResizeNotify { rows: 40, cols: 120 } ; "xtwinops resize")]
#[test_case("\x1b#8", SinkEvent::ScreenAlignmentPattern ; "decaln")]
#[test_case("\x1b(0", SinkEvent::DesignateCharset(CharsetSlot::G0, '0') ; "g0 line drawing")]
#[test_case("\x1b)B", SinkEvent::DesignateCharset(CharsetSlot::G1, 'B') ; "g1 ascii")]
#[test_case("\x1b=", SinkEvent::SetMode(TerminalMode::ApplicationKeypad, true) ; "deckpam")]
#[test_case("\x1b>", SinkEvent::SetMode(TerminalMode::ApplicationKeypad, false) ; "deckpnm")]
fn test_single_event(input: &str, expected: SinkEvent) {
    assert_eq!(decode(input).events, vec![expected]);
}

#[test]
fn test_full_reset() {
    let sink = decode("\x1b[1m\x1bcA");
    assert_eq!(
        sink.events.last(),
        Some(&SinkEvent::Glyphs("A".into(), crate::TextAttributes::default())),
        "pen is reset along with the sink"
    );
    assert!(sink.events.contains(&SinkEvent::Reset));
}

#[test]
fn test_unsupported_sequences_are_absorbed() {
    // Well formed but not implemented: no sink calls, no errors, text continues.
    let sink = decode("a\x1b[5i\x1b[>1;2m\x1bZ\x1b%Gb");
    assert_eq!(sink.text(), "ab");
    assert_eq!(sink.controls(), vec![]);
}
