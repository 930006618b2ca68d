// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI opcode table. See [`ScreenSink`] for what each call means.

use super::{mode_ops, performer::Performer, sgr_ops};
use crate::{CHA_CURSOR_COLUMN, CNL_CURSOR_NEXT_LINE, CPL_CURSOR_PREV_LINE,
            CSI_GREATER_MARKER, CUB_CURSOR_BACKWARD, CUD_CURSOR_DOWN,
            CUF_CURSOR_FORWARD, CUP_CURSOR_POSITION, CUU_CURSOR_UP, CsiSequence,
            CursorMotion, DA_DEVICE_ATTRIBUTES, DA_VT102_REPLY, DCH_DELETE_CHAR,
            DECSTBM_SET_MARGINS, DL_DELETE_LINE, DSR_CURSOR_POSITION_QUERY,
            DSR_DEVICE_STATUS, DSR_STATUS_OK_REPLY, DSR_STATUS_QUERY, ECH_ERASE_CHAR,
            ED_ERASE_DISPLAY, EL_ERASE_LINE, EraseMode, EraseRegion, HPA_CURSOR_COLUMN,
            HVP_CURSOR_POSITION, ICH_INSERT_CHAR, IL_INSERT_LINE, RCP_RESTORE_CURSOR,
            RM_RESET_MODE, SCP_SAVE_CURSOR, SD_SCROLL_DOWN, SGR_SET_GRAPHICS,
            SM_SET_MODE, SU_SCROLL_UP, ScreenSink, SequenceKind, TBC_CLEAR_ALL,
            TBC_TAB_CLEAR, UnsupportedSequence, VPA_LINE_POSITION, XTWINOPS_RESIZE,
            XTWINOPS_WINDOW_OPS};

pub(crate) fn dispatch<K: ScreenSink>(
    performer: &mut Performer<K>,
    seq: &CsiSequence,
    final_char: char,
) {
    // Private markers are only meaningful for modes, DA and DSR.
    let marker_ok = match seq.private_marker() {
        None => true,
        Some(_) => matches!(
            final_char,
            SM_SET_MODE | RM_RESET_MODE | DA_DEVICE_ATTRIBUTES | DSR_DEVICE_STATUS
        ),
    };
    if !marker_ok || !seq.intermediates().is_empty() {
        log_unsupported(seq, final_char);
        return;
    }

    #[allow(clippy::match_same_arms)]
    match final_char {
        // Cursor movement.
        CUU_CURSOR_UP => move_cursor(performer, CursorMotion::Up(seq.param_or(0, 1))),
        CUD_CURSOR_DOWN => move_cursor(performer, CursorMotion::Down(seq.param_or(0, 1))),
        CUF_CURSOR_FORWARD => {
            move_cursor(performer, CursorMotion::Forward(seq.param_or(0, 1)));
        }
        CUB_CURSOR_BACKWARD => {
            move_cursor(performer, CursorMotion::Backward(seq.param_or(0, 1)));
        }
        CNL_CURSOR_NEXT_LINE => {
            move_cursor(performer, CursorMotion::NextLine(seq.param_or(0, 1)));
        }
        CPL_CURSOR_PREV_LINE => {
            move_cursor(performer, CursorMotion::PrecedingLine(seq.param_or(0, 1)));
        }
        CHA_CURSOR_COLUMN | HPA_CURSOR_COLUMN => {
            move_cursor(performer, CursorMotion::ToColumn(seq.param_or(0, 1)));
        }
        VPA_LINE_POSITION => {
            move_cursor(performer, CursorMotion::ToRow(seq.param_or(0, 1)));
        }
        CUP_CURSOR_POSITION | HVP_CURSOR_POSITION => move_cursor(
            performer,
            CursorMotion::To {
                row: seq.param_or(0, 1),
                col: seq.param_or(1, 1),
            },
        ),
        SCP_SAVE_CURSOR => performer.sink.save_cursor(),
        RCP_RESTORE_CURSOR => performer.sink.restore_cursor(),

        // Erasing and editing.
        ED_ERASE_DISPLAY => erase(performer, seq, final_char, EraseRegion::Display),
        EL_ERASE_LINE => erase(performer, seq, final_char, EraseRegion::Line),
        ECH_ERASE_CHAR => performer
            .sink
            .erase(EraseRegion::Characters(seq.param_or(0, 1))),
        ICH_INSERT_CHAR => performer.sink.insert_blank_chars(seq.param_or(0, 1)),
        DCH_DELETE_CHAR => performer.sink.delete_chars(seq.param_or(0, 1)),
        IL_INSERT_LINE => performer.sink.insert_lines(seq.param_or(0, 1)),
        DL_DELETE_LINE => performer.sink.delete_lines(seq.param_or(0, 1)),

        // Scrolling.
        SU_SCROLL_UP => performer.sink.scroll(i32::from(seq.param_or(0, 1))),
        SD_SCROLL_DOWN => performer.sink.scroll(-i32::from(seq.param_or(0, 1))),
        DECSTBM_SET_MARGINS => {
            let bottom = Some(seq.raw_param(1)).filter(|&bottom| bottom != 0);
            performer.sink.set_scroll_region(seq.param_or(0, 1), bottom);
        }

        // Attributes and modes.
        SGR_SET_GRAPHICS => sgr_ops::set_graphics_rendition(performer, seq),
        SM_SET_MODE => mode_ops::set_mode(performer, seq, true),
        RM_RESET_MODE => mode_ops::set_mode(performer, seq, false),

        // Tabs.
        TBC_TAB_CLEAR => match seq.raw_param(0) {
            0 => performer.sink.clear_tab_stop(false),
            TBC_CLEAR_ALL => performer.sink.clear_tab_stop(true),
            _ => log_unsupported(seq, final_char),
        },

        // Queries.
        DA_DEVICE_ATTRIBUTES => device_attributes(performer, seq, final_char),
        DSR_DEVICE_STATUS => device_status_report(performer, seq, final_char),

        XTWINOPS_WINDOW_OPS => match seq.raw_param(0) {
            XTWINOPS_RESIZE => performer
                .sink
                .resize_notify(seq.param_or(1, 1), seq.param_or(2, 1)),
            _ => log_unsupported(seq, final_char),
        },

        _ => log_unsupported(seq, final_char),
    }
}

fn move_cursor<K: ScreenSink>(performer: &mut Performer<K>, motion: CursorMotion) {
    performer.sink.move_cursor(motion);
}

fn erase<K: ScreenSink>(
    performer: &mut Performer<K>,
    seq: &CsiSequence,
    final_char: char,
    region: fn(EraseMode) -> EraseRegion,
) {
    let is_display = final_char == ED_ERASE_DISPLAY;
    let mode = match seq.raw_param(0) {
        0 => EraseMode::ToEnd,
        1 => EraseMode::ToStart,
        2 => EraseMode::All,
        3 if is_display => EraseMode::Scrollback,
        _ => return log_unsupported(seq, final_char),
    };
    performer.sink.erase(region(mode));
}

/// Primary DA, and secondary DA with parameter 0, both identify as VT102.
fn device_attributes<K: ScreenSink>(
    performer: &mut Performer<K>,
    seq: &CsiSequence,
    final_char: char,
) {
    match seq.private_marker() {
        None | Some(CSI_GREATER_MARKER) if seq.raw_param(0) == 0 => {
            tracing::debug!("identifying to remote system as VT102");
            performer.respond(DA_VT102_REPLY);
        }
        _ => log_unsupported(seq, final_char),
    }
}

fn device_status_report<K: ScreenSink>(
    performer: &mut Performer<K>,
    seq: &CsiSequence,
    final_char: char,
) {
    if seq.private_marker().is_some() {
        return log_unsupported(seq, final_char);
    }
    match seq.raw_param(0) {
        DSR_STATUS_QUERY => performer.respond(DSR_STATUS_OK_REPLY),
        DSR_CURSOR_POSITION_QUERY => match performer.sink.cursor_position() {
            Some((row, col)) => {
                let reply = format!("\x1b[{row};{col}R");
                performer.respond(reply.as_bytes());
            }
            None => tracing::debug!("cursor position unknown, DSR 6 not answered"),
        },
        _ => log_unsupported(seq, final_char),
    }
}

pub(crate) fn log_unsupported(seq: &CsiSequence, final_char: char) {
    let marker = seq.private_marker().map(char::from).map(String::from);
    let params = seq
        .params()
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(";");
    UnsupportedSequence::log(
        SequenceKind::Csi,
        format!("CSI {}{params}{final_char}", marker.unwrap_or_default()),
    );
}
