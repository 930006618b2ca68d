// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Incoming direction: bytes from the controlled process become [`ScreenSink`] calls.
//!
//! - [`Emulator`] runs the state machine and owns the `Performer`.
//! - `Performer` owns the sink and the SGR pen and routes complete units to the
//!   `*_dispatch` and `*_ops` modules.
//! - [`ScreenSink`] is the only way out of this module. It is implemented by whoever
//!   stores the grid.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
mod byte_source;
mod csi_dispatch;
mod decode_error;
mod decoder_state;
mod emulator_impl;
mod esc_dispatch;
mod mode_ops;
mod osc_dispatch;
mod performer;
mod screen_sink;
mod sgr_ops;
mod text_attributes;

#[cfg(test)]
mod conformance_tests;

// Re-export.
pub use byte_source::*;
pub use decode_error::*;
pub use decoder_state::{CsiSequence, DecoderStateKind};
pub use emulator_impl::*;
pub use screen_sink::*;
pub use text_attributes::*;
