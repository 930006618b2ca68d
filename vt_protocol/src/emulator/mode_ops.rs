// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `CSI n h` / `CSI n l` (ANSI modes) and `CSI ? n h` / `CSI ? n l` (DEC private
//! modes). Several modes may be given at once: `CSI ? 1000 ; 1006 h`.
//!
//! Mouse modes are written to the shared [`MouseProtocolState`] before the sink hears
//! about them, so an encoder reading the state from another thread never lags behind
//! what the sink was told.
//!
//! [`MouseProtocolState`]: crate::MouseProtocolState

use super::{csi_dispatch::log_unsupported, performer::Performer};
use crate::{ALT_SCREEN_BUFFER, ALT_SCREEN_BUFFER_LEGACY, ALT_SCREEN_SAVE_CURSOR,
            BRACKETED_PASTE_MODE, CURSOR_BLINK, CsiSequence, DECAWM_AUTO_WRAP,
            DECCKM_CURSOR_KEYS, DECCOLM_132_COLUMN, DECOM_ORIGIN_MODE,
            DECSCNM_REVERSE_VIDEO, DECTCEM_SHOW_CURSOR, IRM_INSERT_MODE,
            LNM_AUTO_NEWLINE, MouseEncoding, MouseProtocolChange, MouseReportingMode,
            SAVE_CURSOR_DEC, SM_SET_MODE, RM_RESET_MODE, ScreenSink, TerminalMode};

pub(crate) fn set_mode<K: ScreenSink>(
    performer: &mut Performer<K>,
    seq: &CsiSequence,
    enabled: bool,
) {
    let final_char = if enabled { SM_SET_MODE } else { RM_RESET_MODE };
    let is_private = seq.is_private();
    if seq.private_marker().is_some() && !is_private {
        return log_unsupported(seq, final_char);
    }

    for &number in seq.params() {
        let mode = if is_private {
            private_mode(performer, number, enabled)
        } else {
            ansi_mode(number)
        };
        match mode {
            Some(mode) => performer.sink.set_mode(mode, enabled),
            None => tracing::debug!(number, is_private, enabled, "unsupported mode absorbed"),
        }
    }
}

fn ansi_mode(number: u16) -> Option<TerminalMode> {
    match number {
        IRM_INSERT_MODE => Some(TerminalMode::InsertMode),
        LNM_AUTO_NEWLINE => Some(TerminalMode::AutoNewLine),
        _ => None,
    }
}

fn private_mode<K: ScreenSink>(
    performer: &mut Performer<K>,
    number: u16,
    enabled: bool,
) -> Option<TerminalMode> {
    if let Some(change) = performer.mouse.apply_private_mode(number, enabled) {
        return Some(match change {
            MouseProtocolChange::Mode(_) => TerminalMode::MouseReporting(
                MouseReportingMode::from_private_mode(number)?,
            ),
            MouseProtocolChange::Encoding(_) => {
                TerminalMode::MouseEncoding(MouseEncoding::from_private_mode(number)?)
            }
        });
    }

    match number {
        DECCKM_CURSOR_KEYS => Some(TerminalMode::ApplicationCursorKeys),
        DECCOLM_132_COLUMN => Some(TerminalMode::Column132),
        DECSCNM_REVERSE_VIDEO => Some(TerminalMode::ReverseVideo),
        DECOM_ORIGIN_MODE => Some(TerminalMode::OriginMode),
        DECAWM_AUTO_WRAP => Some(TerminalMode::AutoWrap),
        CURSOR_BLINK => Some(TerminalMode::CursorBlink),
        DECTCEM_SHOW_CURSOR => Some(TerminalMode::CursorVisible),
        ALT_SCREEN_BUFFER_LEGACY | ALT_SCREEN_BUFFER => Some(TerminalMode::AlternateBuffer),
        SAVE_CURSOR_DEC => Some(TerminalMode::SaveCursor),
        ALT_SCREEN_SAVE_CURSOR => Some(TerminalMode::AlternateBufferSaveCursor),
        BRACKETED_PASTE_MODE => Some(TerminalMode::BracketedPaste),
        _ => None,
    }
}
