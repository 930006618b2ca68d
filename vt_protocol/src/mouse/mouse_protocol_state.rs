// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The mouse protocol negotiated by the controlled process.
//!
//! Two independent axes are tracked:
//!
//! | Axis                   | Set by                     | Reset by (`l`)            |
//! | :--------------------- | :------------------------- | :------------------------ |
//! | [`MouseReportingMode`] | `CSI ? 1000..=1004 h`      | any of them -> `None`     |
//! | [`MouseEncoding`]      | `CSI ? 1005 / 1006 / 1015 h` | any of them -> `Default` |
//!
//! # Sharing
//!
//! The decoder is the only writer and the encoders (often on a UI thread) are readers.
//! [`shared_mouse_protocol_state`] returns one [`MouseProtocolWriter`] (not `Clone`)
//! and a [`MouseProtocolReader`] that can be cloned freely. Both axes are packed into a
//! single [`AtomicU16`] so a reader always sees a mode and an encoding that were set
//! together, never a torn pair.

use crate::{MOUSE_ALL_MOTION_MODE, MOUSE_BUTTON_MOTION_MODE, MOUSE_FOCUS_EVENTS_MODE,
            MOUSE_HILITE_MODE, MOUSE_NORMAL_MODE, MOUSE_SGR_ENCODING,
            MOUSE_URXVT_ENCODING, MOUSE_UTF8_ENCODING};
use serde::{Deserialize, Serialize};
use std::sync::{Arc,
                atomic::{AtomicU16, Ordering}};
use strum_macros::{Display, EnumString};

/// Which pointer events the controlled process asked to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
         Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MouseReportingMode {
    #[default]
    None,
    Normal,
    Hilite,
    ButtonMotion,
    AllMotion,
    FocusEvents,
}

/// How a mouse report is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
         Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MouseEncoding {
    #[default]
    Default,
    Utf8,
    Sgr,
    Urxvt,
}

impl MouseReportingMode {
    /// Maps a DEC private mode number onto a reporting mode.
    #[must_use]
    pub fn from_private_mode(mode_number: u16) -> Option<Self> {
        match mode_number {
            MOUSE_NORMAL_MODE => Some(Self::Normal),
            MOUSE_HILITE_MODE => Some(Self::Hilite),
            MOUSE_BUTTON_MOTION_MODE => Some(Self::ButtonMotion),
            MOUSE_ALL_MOTION_MODE => Some(Self::AllMotion),
            MOUSE_FOCUS_EVENTS_MODE => Some(Self::FocusEvents),
            _ => None,
        }
    }

    const fn as_u8(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Normal => 1,
            Self::Hilite => 2,
            Self::ButtonMotion => 3,
            Self::AllMotion => 4,
            Self::FocusEvents => 5,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Normal,
            2 => Self::Hilite,
            3 => Self::ButtonMotion,
            4 => Self::AllMotion,
            5 => Self::FocusEvents,
            _ => Self::None,
        }
    }
}

impl MouseEncoding {
    /// Maps a DEC private mode number onto an encoding.
    #[must_use]
    pub fn from_private_mode(mode_number: u16) -> Option<Self> {
        match mode_number {
            MOUSE_UTF8_ENCODING => Some(Self::Utf8),
            MOUSE_SGR_ENCODING => Some(Self::Sgr),
            MOUSE_URXVT_ENCODING => Some(Self::Urxvt),
            _ => None,
        }
    }

    const fn as_u8(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Utf8 => 1,
            Self::Sgr => 2,
            Self::Urxvt => 3,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Utf8,
            2 => Self::Sgr,
            3 => Self::Urxvt,
            _ => Self::Default,
        }
    }
}

/// The result of feeding a private mode number to [`MouseProtocolState::apply_private_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseProtocolChange {
    Mode(MouseReportingMode),
    Encoding(MouseEncoding),
}

/// Value snapshot of both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MouseProtocolState {
    pub mode: MouseReportingMode,
    pub encoding: MouseEncoding,
}

impl MouseProtocolState {
    #[must_use]
    pub const fn new(mode: MouseReportingMode, encoding: MouseEncoding) -> Self {
        Self { mode, encoding }
    }

    /// Apply `CSI ? n h` (`enable`) or `CSI ? n l`. Returns [`None`] when `n` is not a
    /// mouse mode, leaving `self` untouched. Applying the same change twice is a no-op.
    pub fn apply_private_mode(
        &mut self,
        mode_number: u16,
        enable: bool,
    ) -> Option<MouseProtocolChange> {
        if let Some(mode) = MouseReportingMode::from_private_mode(mode_number) {
            self.mode = if enable { mode } else { MouseReportingMode::None };
            return Some(MouseProtocolChange::Mode(self.mode));
        }
        if let Some(encoding) = MouseEncoding::from_private_mode(mode_number) {
            self.encoding = if enable { encoding } else { MouseEncoding::Default };
            return Some(MouseProtocolChange::Encoding(self.encoding));
        }
        None
    }

    #[allow(clippy::cast_lossless)]
    const fn pack(self) -> u16 {
        ((self.encoding.as_u8() as u16) << 8) | self.mode.as_u8() as u16
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn unpack(word: u16) -> Self {
        Self {
            mode: MouseReportingMode::from_u8((word & 0xFF) as u8),
            encoding: MouseEncoding::from_u8((word >> 8) as u8),
        }
    }
}

/// Create the shared cell, starting at the default protocol (`None` + `Default`).
#[must_use]
pub fn shared_mouse_protocol_state() -> (MouseProtocolWriter, MouseProtocolReader) {
    let cell = Arc::new(AtomicU16::new(MouseProtocolState::default().pack()));
    (
        MouseProtocolWriter { cell: cell.clone() },
        MouseProtocolReader { cell },
    )
}

/// The single writer. Owned by the decoder.
#[derive(Debug)]
pub struct MouseProtocolWriter {
    cell: Arc<AtomicU16>,
}

impl MouseProtocolWriter {
    pub fn set(&mut self, state: MouseProtocolState) {
        self.cell.store(state.pack(), Ordering::Release);
    }

    #[must_use]
    pub fn get(&self) -> MouseProtocolState {
        MouseProtocolState::unpack(self.cell.load(Ordering::Acquire))
    }

    /// Read, modify and publish in one step. Only this handle writes, so no CAS loop is
    /// needed.
    pub fn apply_private_mode(
        &mut self,
        mode_number: u16,
        enable: bool,
    ) -> Option<MouseProtocolChange> {
        let mut state = self.get();
        let change = state.apply_private_mode(mode_number, enable)?;
        self.set(state);
        tracing::trace!(?change, mode_number, enable, "mouse protocol changed");
        Some(change)
    }

    pub fn reset(&mut self) { self.set(MouseProtocolState::default()); }

    #[must_use]
    pub fn reader(&self) -> MouseProtocolReader {
        MouseProtocolReader {
            cell: self.cell.clone(),
        }
    }
}

/// A read-only handle. Cheap to clone and `Send + Sync`.
#[derive(Debug, Clone)]
pub struct MouseProtocolReader {
    cell: Arc<AtomicU16>,
}

impl MouseProtocolReader {
    #[must_use]
    pub fn snapshot(&self) -> MouseProtocolState {
        MouseProtocolState::unpack(self.cell.load(Ordering::Acquire))
    }

    #[must_use]
    pub fn mode(&self) -> MouseReportingMode { self.snapshot().mode }

    #[must_use]
    pub fn encoding(&self) -> MouseEncoding { self.snapshot().encoding }
}
