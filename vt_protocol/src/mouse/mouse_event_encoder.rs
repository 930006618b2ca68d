// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns a [`PointerEvent`] into the report the controlled process asked for.
//!
//! # Which events are reported
//!
//! | Mode           | Pressed / Released | Wheel | Dragged | Moved |
//! | :------------- | :----------------: | :---: | :-----: | :---: |
//! | `None`         |                    |       |         |       |
//! | `Normal`       | yes                | yes   |         |       |
//! | `Hilite`       | yes                |       |         |       |
//! | `ButtonMotion` | yes                | yes   | yes     |       |
//! | `AllMotion`    | yes                | yes   | yes     | yes   |
//! | `FocusEvents`  |                    |       |         |       |
//!
//! # Button code
//!
//! - Bits 0-1: button (0=left, 1=middle, 2=right, 3=release in Default and UTF-8)
//! - Bit 2: Shift (4)
//! - Bit 3: Meta (8)
//! - Bit 4: Ctrl (16)
//! - Bit 5: motion (32)
//! - Bit 6: wheel (64)
//!
//! # Serialization
//!
//! | Encoding  | Format                                 |
//! | :-------- | :------------------------------------- |
//! | `Default` | `ESC [ M` then `Cb+32`, `Cx+32`, `Cy+32` as single bytes |
//! | `Utf8`    | as `Default`, values >= 128 written as UTF-8 |
//! | `Sgr`     | `ESC [ < Cb ; Cx ; Cy M` (press) or `m` (release) |
//! | `Urxvt`   | `ESC [ Cb+32 ; Cx ; Cy M`              |

use crate::{FOCUS_GAINED_FINAL, FOCUS_LOST_FINAL, MOUSE_MODIFIER_CTRL,
            MOUSE_MODIFIER_META, MOUSE_MODIFIER_SHIFT, MOUSE_MOTION_FLAG,
            MOUSE_RELEASE_BUTTON_CODE, MOUSE_SGR_PREFIX, MOUSE_SGR_PRESS,
            MOUSE_SGR_RELEASE, MOUSE_URXVT_FINAL, MOUSE_UTF8_MAX_COORD,
            MOUSE_X10_MAX_COORD, MOUSE_X10_OFFSET, MOUSE_X10_PREFIX, ESC, CSI_BRACKET,
            ModifierState, MouseEncoding, MouseProtocolReader, MouseReportingMode,
            PointerEvent, PointerEventKind};

/// A coordinate did not fit the active encoding and was clamped. Never returned to the
/// caller; it is logged at trace level.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{axis} coordinate {value} exceeds the {encoding} mouse encoding limit of {max}")]
#[diagnostic(
    code(r3bl_vt_protocol::mouse::encoding_range),
    help("Switch the controlled process to SGR mouse reports (CSI ? 1006 h)")
)]
pub struct EncodingRangeError {
    pub axis: &'static str,
    pub value: u16,
    pub max: u16,
    pub encoding: MouseEncoding,
}

/// Encodes pointer events using a snapshot of the shared protocol state.
#[derive(Debug, Clone)]
pub struct MouseEventEncoder {
    protocol: MouseProtocolReader,
}

impl MouseEventEncoder {
    #[must_use]
    pub fn new(protocol: MouseProtocolReader) -> Self { Self { protocol } }

    /// Returns [`None`] when the current mode does not report this event.
    #[must_use]
    pub fn encode(&self, event: &PointerEvent) -> Option<Vec<u8>> {
        let state = self.protocol.snapshot();
        encode_mouse_event(event, state.mode, state.encoding)
    }

    #[must_use]
    pub fn encode_focus(&self, gained: bool) -> Option<Vec<u8>> {
        encode_focus_event(gained, self.protocol.mode())
    }
}

/// Whether `mode` asks for events of this kind.
#[must_use]
pub fn is_reportable(kind: PointerEventKind, mode: MouseReportingMode) -> bool {
    use MouseReportingMode as M;
    use PointerEventKind as K;
    match kind {
        K::Pressed(_) | K::Released(_) => {
            matches!(mode, M::Normal | M::Hilite | M::ButtonMotion | M::AllMotion)
        }
        K::WheelMoved(_) => matches!(mode, M::Normal | M::ButtonMotion | M::AllMotion),
        K::Dragged(_) => matches!(mode, M::ButtonMotion | M::AllMotion),
        K::Moved => matches!(mode, M::AllMotion),
    }
}

/// Produce the report bytes, or [`None`] when `mode` does not report this event.
#[must_use]
pub fn encode_mouse_event(
    event: &PointerEvent,
    mode: MouseReportingMode,
    encoding: MouseEncoding,
) -> Option<Vec<u8>> {
    if !is_reportable(event.kind, mode) {
        return None;
    }

    let code = button_code(event.kind, encoding) | modifier_bits(event.modifiers);
    let col = event.pos.col();
    let row = event.pos.row();
    let is_release = matches!(event.kind, PointerEventKind::Released(_));

    Some(match encoding {
        MouseEncoding::Default => generate_x10_sequence(code, col, row),
        MouseEncoding::Utf8 => generate_utf8_sequence(code, col, row),
        MouseEncoding::Sgr => generate_sgr_sequence(code, col, row, is_release),
        MouseEncoding::Urxvt => generate_urxvt_sequence(code, col, row),
    })
}

/// `CSI I` / `CSI O`, only while focus reporting is on.
#[must_use]
pub fn encode_focus_event(gained: bool, mode: MouseReportingMode) -> Option<Vec<u8>> {
    if mode != MouseReportingMode::FocusEvents {
        return None;
    }
    let final_byte = if gained { FOCUS_GAINED_FINAL } else { FOCUS_LOST_FINAL };
    Some(vec![ESC, CSI_BRACKET, final_byte])
}

fn button_code(kind: PointerEventKind, encoding: MouseEncoding) -> u16 {
    match kind {
        PointerEventKind::Pressed(button) | PointerEventKind::WheelMoved(button) => {
            button.report_code()
        }
        PointerEventKind::Released(button) => match encoding {
            // SGR carries the released button, the final byte marks the release.
            MouseEncoding::Sgr => button.report_code(),
            MouseEncoding::Default | MouseEncoding::Utf8 | MouseEncoding::Urxvt => {
                MOUSE_RELEASE_BUTTON_CODE
            }
        },
        PointerEventKind::Dragged(button) => button.report_code() | MOUSE_MOTION_FLAG,
        PointerEventKind::Moved => MOUSE_RELEASE_BUTTON_CODE | MOUSE_MOTION_FLAG,
    }
}

fn modifier_bits(modifiers: ModifierState) -> u16 {
    let mut bits = 0;
    if modifiers.shift {
        bits |= MOUSE_MODIFIER_SHIFT;
    }
    if modifiers.meta {
        bits |= MOUSE_MODIFIER_META;
    }
    if modifiers.ctrl {
        bits |= MOUSE_MODIFIER_CTRL;
    }
    bits
}

fn clamp_coord(axis: &'static str, value: u16, max: u16, encoding: MouseEncoding) -> u16 {
    if value > max {
        let error = EncodingRangeError {
            axis,
            value,
            max,
            encoding,
        };
        tracing::trace!(%error, "clamping mouse coordinate");
        max
    } else {
        value
    }
}

/// `ESC [ M Cb Cx Cy`, each value offset by 32 and written as a single byte.
fn generate_x10_sequence(code: u16, col: u16, row: u16) -> Vec<u8> {
    let col = clamp_coord("column", col, MOUSE_X10_MAX_COORD, MouseEncoding::Default);
    let row = clamp_coord("row", row, MOUSE_X10_MAX_COORD, MouseEncoding::Default);
    let mut bytes = MOUSE_X10_PREFIX.to_vec();
    for value in [code, col, row] {
        // At most 223 + 32 after clamping.
        bytes.push(u8::try_from(value + MOUSE_X10_OFFSET).unwrap_or(u8::MAX));
    }
    bytes
}

/// Same layout as X10 but values past 127 are written as UTF-8 characters.
fn generate_utf8_sequence(code: u16, col: u16, row: u16) -> Vec<u8> {
    let col = clamp_coord("column", col, MOUSE_UTF8_MAX_COORD, MouseEncoding::Utf8);
    let row = clamp_coord("row", row, MOUSE_UTF8_MAX_COORD, MouseEncoding::Utf8);
    let mut bytes = MOUSE_X10_PREFIX.to_vec();
    let mut buffer = [0_u8; 4];
    for value in [code, col, row] {
        let ch = char::from_u32(u32::from(value + MOUSE_X10_OFFSET))
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        bytes.extend_from_slice(ch.encode_utf8(&mut buffer).as_bytes());
    }
    bytes
}

/// `ESC [ < Cb ; Cx ; Cy M` or `... m` for a release.
fn generate_sgr_sequence(code: u16, col: u16, row: u16, is_release: bool) -> Vec<u8> {
    let final_byte = if is_release { MOUSE_SGR_RELEASE } else { MOUSE_SGR_PRESS };
    let mut bytes = MOUSE_SGR_PREFIX.to_vec();
    bytes.extend_from_slice(format!("{code};{col};{row}").as_bytes());
    bytes.push(final_byte);
    bytes
}

/// `ESC [ Cb+32 ; Cx ; Cy M` with decimal values.
fn generate_urxvt_sequence(code: u16, col: u16, row: u16) -> Vec<u8> {
    let mut bytes = vec![ESC, CSI_BRACKET];
    bytes.extend_from_slice(
        format!("{};{col};{row}", code + MOUSE_X10_OFFSET).as_bytes(),
    );
    bytes.push(MOUSE_URXVT_FINAL);
    bytes
}
