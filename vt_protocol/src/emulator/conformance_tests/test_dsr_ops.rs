// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Device Attributes and Device Status Report replies.

use super::test_fixtures::{create_test_emulator, run_to_end};
use crate::{DA_VT102_REPLY, DSR_STATUS_OK_REPLY};
use pretty_assertions::assert_eq;

#[test]
fn test_dsr_status_report() {
    let mut emulator = create_test_emulator("\x1b[5n");
    run_to_end(&mut emulator);
    assert_eq!(emulator.take_responses(), DSR_STATUS_OK_REPLY, "expected ESC[0n");
}

#[test]
fn test_dsr_cursor_position_report() {
    let mut emulator = create_test_emulator("\x1b[6n");
    emulator.sink_mut().cursor = Some((4, 6));
    run_to_end(&mut emulator);
    assert_eq!(emulator.take_responses(), b"\x1b[4;6R", "expected 1-based row;col");
}

#[test]
fn test_dsr_cursor_position_unknown() {
    let mut emulator = create_test_emulator("\x1b[6n");
    run_to_end(&mut emulator);
    assert_eq!(emulator.take_responses(), b"", "sink without a cursor gets no reply");
}

#[test]
fn test_primary_and_secondary_device_attributes() {
    let mut emulator = create_test_emulator("\x1b[c\x1b[0c\x1b[>c");
    run_to_end(&mut emulator);
    assert_eq!(emulator.take_responses(), DA_VT102_REPLY.repeat(3));
}

#[test]
fn test_take_responses_drains() {
    let mut emulator = create_test_emulator("\x1b[5n");
    run_to_end(&mut emulator);
    assert_eq!(emulator.take_responses().len(), DSR_STATUS_OK_REPLY.len());
    assert_eq!(emulator.take_responses(), b"");
}
