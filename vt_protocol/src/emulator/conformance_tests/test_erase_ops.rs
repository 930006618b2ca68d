// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Erasing, inserting and deleting characters and lines.

use super::test_fixtures::{SinkEvent, decode};
use crate::{EraseMode, EraseRegion};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("\x1b[J", EraseRegion::Display(EraseMode::ToEnd) ; "ed default")]
#[test_case("\x1b[1J", EraseRegion::Display(EraseMode::ToStart) ; "ed to start")]
#[test_case("\x1b[2J", EraseRegion::Display(EraseMode::All) ; "ed all")]
#[test_case("\x1b[3J", EraseRegion::Display(EraseMode::Scrollback) ; "ed scrollback")]
#[test_case("\x1b[K", EraseRegion::Line(EraseMode::ToEnd) ; "el default")]
#[test_case("\x1b[1K", EraseRegion::Line(EraseMode::ToStart) ; "el to start")]
#[test_case("\x1b[2K", EraseRegion::Line(EraseMode::All) ; "el all")]
#[test_case("\x1b[X", EraseRegion::Characters(1) ; "ech default")]
#[test_case("\x1b[6X", EraseRegion::Characters(6) ; "ech")]
fn test_erase(input: &str, expected: EraseRegion) {
    assert_eq!(decode(input).events, vec![SinkEvent::Erase(expected)]);
}

#[test]
fn test_erase_line_has_no_scrollback_mode() {
    assert_eq!(decode("\x1b[3K").events, vec![]);
}

#[test_case("\x1b[@", SinkEvent::InsertBlankChars(1) ; "ich default")]
#[test_case("\x1b[4@", SinkEvent::InsertBlankChars(4) ; "ich")]
#[test_case("\x1b[2P", SinkEvent::DeleteChars(2) ; "dch")]
#[test_case("\x1b[L", SinkEvent::InsertLines(1) ; "il default")]
#[test_case("\x1b[3L", SinkEvent::InsertLines(3) ; "il")]
#[test_case("\x1b[9M", SinkEvent::DeleteLines(9) ; "dl")]
fn test_edit(input: &str, expected: SinkEvent) {
    assert_eq!(decode(input).events, vec![expected]);
}

#[test]
fn test_clear_screen_sequence_from_shell() {
    // What `clear` typically emits.
    let sink = decode("\x1b[H\x1b[2J\x1b[3J");
    assert_eq!(
        sink.events,
        vec![
            SinkEvent::MoveCursor(crate::CursorMotion::To { row: 1, col: 1 }),
            SinkEvent::Erase(EraseRegion::Display(EraseMode::All)),
            SinkEvent::Erase(EraseRegion::Display(EraseMode::Scrollback)),
        ]
    );
}
