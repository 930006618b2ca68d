// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Malformed input. Every case checks that the decoder is back in Ground state and
//! that the input after the broken sequence is decoded normally.

use super::test_fixtures::{SinkEvent, create_test_emulator,
                           create_test_emulator_with_config, run_to_end};
use crate::{CursorMotion, DecodeError, DecoderConfig, DecoderStateKind, EraseMode,
            EraseRegion, SequenceKind, TextAttributes};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn small_config() -> DecoderConfig {
    DecoderConfig {
        max_csi_bytes: 8,
        max_csi_params: 4,
        max_string_bytes: 4,
    }
}

#[test]
fn test_over_long_csi() {
    let input = format!("\x1b[{}mX\x1b[2J", "1".repeat(20));
    let mut emulator = create_test_emulator_with_config(input, small_config());
    let errors = run_to_end(&mut emulator);

    assert_eq!(
        errors,
        vec![DecodeError::SequenceTooLong {
            kind: SequenceKind::Csi,
            limit: 8
        }]
    );
    assert_eq!(emulator.state(), DecoderStateKind::Ground);
    // The 9th byte is dropped, the rest of the digit run is plain text.
    assert_eq!(emulator.sink().text(), format!("{}mX", "1".repeat(11)));
    assert_eq!(
        emulator.sink().controls(),
        vec![SinkEvent::Erase(EraseRegion::Display(EraseMode::All))],
        "dispatch resumes after recovery"
    );
}

#[test]
fn test_too_many_params() {
    let config = DecoderConfig {
        max_csi_params: 4,
        ..DecoderConfig::default()
    };
    let mut emulator = create_test_emulator_with_config("\x1b[1;2;3;4;5;6mA", config);
    let errors = run_to_end(&mut emulator);
    assert_eq!(errors, vec![DecodeError::TooManyParams { limit: 4 }]);
    assert_eq!(emulator.sink().text(), "6mA");
    assert!(emulator.attributes().is_default(), "discarded SGR has no effect");
}

#[test_case(b"\x1b]2;abcdef\x07Z".as_slice(), SequenceKind::Osc ; "osc ended by bel")]
#[test_case(b"\x1b]2;abcdef\x1b\\Z".as_slice(), SequenceKind::Osc ; "osc ended by st")]
#[test_case(b"\x1bPq#0;2;0;0;0\x07\x1b\\Z".as_slice(), SequenceKind::Dcs ; "dcs ignores bel")]
fn test_over_long_string_is_skipped_to_its_terminator(input: &[u8], kind: SequenceKind) {
    let mut emulator = create_test_emulator_with_config(input, small_config());
    let errors = run_to_end(&mut emulator);
    assert_eq!(
        errors,
        vec![DecodeError::SequenceTooLong { kind, limit: 4 }],
        "reported once"
    );
    assert_eq!(emulator.state(), DecoderStateKind::Ground);
    assert_eq!(emulator.sink().text(), "Z", "nothing of the string is printed");
    assert_eq!(emulator.sink().controls(), vec![], "no title, no bell");
}

#[test]
fn test_large_clipboard_write_does_not_leak() {
    let payload = "A".repeat(5000);
    let input = format!("\x1b]52;c;{payload}\x07Z\x1b]2;next\x07");
    let mut emulator = create_test_emulator(input);
    let errors = run_to_end(&mut emulator);
    assert_eq!(
        errors,
        vec![DecodeError::SequenceTooLong {
            kind: SequenceKind::Osc,
            limit: DecoderConfig::default().max_string_bytes
        }]
    );
    assert_eq!(emulator.sink().text(), "Z");
    assert_eq!(
        emulator.sink().controls(),
        vec![SinkEvent::WindowTitle("next".into())],
        "the following OSC is decoded normally"
    );
}

#[test]
fn test_escape_interrupts_over_long_osc() {
    let mut emulator =
        create_test_emulator_with_config("\x1b]2;abcdefgh\x1b[2JZ", small_config());
    let errors = run_to_end(&mut emulator);
    assert_eq!(
        errors,
        vec![
            DecodeError::SequenceTooLong {
                kind: SequenceKind::Osc,
                limit: 4
            },
            DecodeError::UnexpectedByte {
                byte: 0x1b,
                kind: SequenceKind::Osc
            },
        ]
    );
    assert_eq!(
        emulator.sink().controls(),
        vec![SinkEvent::Erase(EraseRegion::Display(EraseMode::All))]
    );
    assert_eq!(emulator.sink().text(), "Z");
}

#[test]
fn test_escape_interrupts_csi() {
    let mut emulator = create_test_emulator("\x1b[12\x1b[3Cx");
    let errors = run_to_end(&mut emulator);
    assert_eq!(
        errors,
        vec![DecodeError::UnexpectedByte {
            byte: 0x1b,
            kind: SequenceKind::Csi
        }]
    );
    assert_eq!(
        emulator.sink().controls(),
        vec![SinkEvent::MoveCursor(CursorMotion::Forward(3))],
        "the interrupting ESC starts the next sequence"
    );
    assert_eq!(emulator.sink().text(), "x");
}

#[test]
fn test_escape_interrupts_osc() {
    let mut emulator = create_test_emulator("\x1b]2;title\x1b[1mZ");
    let errors = run_to_end(&mut emulator);
    assert_eq!(
        errors,
        vec![DecodeError::UnexpectedByte {
            byte: 0x1b,
            kind: SequenceKind::Osc
        }]
    );
    let bold = TextAttributes {
        bold: true,
        ..TextAttributes::default()
    };
    assert_eq!(
        emulator.sink().events,
        vec![
            SinkEvent::SetAttributes(bold),
            SinkEvent::Glyphs("Z".into(), bold)
        ]
    );
}

#[test]
fn test_control_byte_interrupts_escape() {
    let mut emulator = create_test_emulator("\x1b\x07a");
    let errors = run_to_end(&mut emulator);
    assert_eq!(
        errors,
        vec![DecodeError::UnexpectedByte {
            byte: 0x07,
            kind: SequenceKind::Escape
        }]
    );
    assert_eq!(emulator.sink().controls(), vec![SinkEvent::Bell], "BEL is replayed");
    assert_eq!(emulator.sink().text(), "a");
}

#[test]
fn test_misplaced_private_marker() {
    let mut emulator = create_test_emulator("\x1b[1?hA");
    let errors = run_to_end(&mut emulator);
    assert_eq!(errors, vec![DecodeError::MisplacedPrivateMarker { marker: '?' }]);
    assert_eq!(emulator.sink().text(), "hA");
    assert_eq!(emulator.sink().controls(), vec![]);
}

#[test_case(b"\x1b[12\x18A".as_slice() ; "can in csi")]
#[test_case(b"\x1b[12\x1aA".as_slice() ; "sub in csi")]
#[test_case(b"\x1b]2;abc\x18A".as_slice() ; "can in osc")]
#[test_case(b"\x1bP1;2\x1aA".as_slice() ; "sub in dcs")]
#[test_case(b"\x1b\x18A".as_slice() ; "can in escape")]
#[test_case(b"\x1b(\x18A".as_slice() ; "can after intermediate")]
fn test_cancel_aborts_silently(input: &[u8]) {
    let mut emulator = create_test_emulator(input);
    let errors = run_to_end(&mut emulator);
    assert_eq!(errors, vec![]);
    assert_eq!(emulator.sink().text(), "A");
    assert_eq!(emulator.sink().controls(), vec![]);
}

#[test]
fn test_nul_and_del_inside_csi_are_ignored() {
    let mut emulator = create_test_emulator(b"\x1b[2\x00\x7fA".as_slice());
    let errors = run_to_end(&mut emulator);
    assert_eq!(errors, vec![]);
    assert_eq!(
        emulator.sink().events,
        vec![SinkEvent::MoveCursor(CursorMotion::Up(2))]
    );
}

#[test]
fn test_error_messages() {
    let error = DecodeError::SequenceTooLong {
        kind: SequenceKind::Csi,
        limit: 64,
    };
    assert_eq!(
        error.to_string(),
        "CSI sequence exceeded 64 bytes and was discarded"
    );
    let error = DecodeError::UnexpectedByte {
        byte: 0x1b,
        kind: SequenceKind::Osc,
    };
    assert_eq!(error.to_string(), "Byte 0x1b interrupted a OSC sequence");
}
