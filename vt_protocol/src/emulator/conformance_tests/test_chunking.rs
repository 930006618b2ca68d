// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Input split at arbitrary points, end of stream and resumption.

use super::test_fixtures::{RecordingSink, SinkEvent, decode};
use crate::{ChunkedByteSource, DecodeStep, DecoderStateKind, Emulator, ReaderByteSource};
use pretty_assertions::assert_eq;
use std::io::Cursor;

const SESSION: &str = "\x1b]0;vim\x07\x1b[?1049h\x1b[?1006;1002h\x1b[H\x1b[2J\
                       \x1b[1;38;5;208m→ héllo\x1b[0m\r\n\x1b]8;;https://x.y\x1b\\z\
                       \x1b]8;;\x1b\\\x1b(0q\x1b(B\x1b[6n";

#[test]
fn test_byte_by_byte_matches_whole_input() {
    let whole = decode(SESSION);

    let mut emulator = Emulator::new(ChunkedByteSource::new(), RecordingSink::default());
    for byte in SESSION.bytes() {
        emulator.source_mut().push([byte]);
        emulator.decode_available();
    }

    assert_eq!(emulator.sink().events, whole.events);
}

#[test]
fn test_every_split_point_matches_whole_input() {
    let whole = decode(SESSION);
    let bytes = SESSION.as_bytes();

    for split in 1..bytes.len() {
        let mut emulator = Emulator::new(ChunkedByteSource::new(), RecordingSink::default());
        emulator.source_mut().push(&bytes[..split]);
        emulator.decode_available();
        emulator.source_mut().push(&bytes[split..]);
        emulator.decode_available();
        assert_eq!(emulator.sink().events, whole.events, "split at byte {split}");
    }
}

#[test]
fn test_sequence_survives_end_of_stream() {
    let mut emulator = Emulator::new(ChunkedByteSource::new(), RecordingSink::default());
    emulator.source_mut().push(b"\x1b[3");
    emulator.source_mut().close();

    assert_eq!(emulator.decode_available(), 0);
    assert!(!emulator.has_next());
    assert_eq!(emulator.state(), DecoderStateKind::CsiParam);

    // The producer resumes output.
    emulator.reset_eof();
    emulator.source_mut().push(b"Bok");
    assert_eq!(emulator.decode_available(), 3);
    assert_eq!(
        emulator.sink().events[0],
        SinkEvent::MoveCursor(crate::CursorMotion::Down(3))
    );
    assert_eq!(emulator.sink().text(), "ok");
}

#[test]
fn test_has_next_until_end_of_stream() {
    let mut emulator = Emulator::new(
        ChunkedByteSource::from(b"ab".as_slice()),
        RecordingSink::default(),
    );
    let mut steps = vec![];
    while emulator.has_next() {
        steps.push(emulator.next());
    }
    assert_eq!(
        steps,
        vec![
            Ok(DecodeStep::Dispatched),
            Ok(DecodeStep::Dispatched),
            Ok(DecodeStep::EndOfStream),
        ]
    );
}

#[test]
fn test_reader_byte_source() {
    let source = ReaderByteSource::new(Cursor::new(SESSION.as_bytes().to_vec()));
    let mut emulator = Emulator::new(source, RecordingSink::default());
    emulator.decode_available();
    assert!(!emulator.has_next());
    assert_eq!(emulator.sink().events, decode(SESSION).events);
}
