// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional `tracing` subscriber setup.
//!
//! | Level   | Emitted for                                          |
//! | :------ | :--------------------------------------------------- |
//! | `warn`  | decode errors recovered by [`Emulator::decode_available`] |
//! | `debug` | unsupported sequences and parameters that are absorbed |
//! | `trace` | mouse protocol changes, coordinate clamping          |
//! | `error` | I/O errors from a [`ReaderByteSource`]               |
//!
//! [`Emulator::decode_available`]: crate::Emulator::decode_available
//! [`ReaderByteSource`]: crate::ReaderByteSource

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
mod tracing_config;
mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
