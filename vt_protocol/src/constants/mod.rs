// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Centralized VT100/xterm protocol constants.
//!
//! Constants are grouped by protocol domain:
//! - **c0**: C0 control bytes (BEL, BS, CR, ESC, ...)
//! - **esc**: final and intermediate bytes of two and three byte ESC sequences
//! - **csi**: CSI final characters, private markers, DSR codes and replies
//! - **modes**: ANSI and DEC private mode numbers (including the mouse modes)
//! - **input_sequences**: bytes that make up keyboard and mouse reports sent to the
//!   controlled process

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod c0;
mod csi;
mod esc;
mod input_sequences;
mod modes;

// Public re-exports (flat API) for convenience.
pub use c0::*;
pub use csi::*;
pub use esc::*;
pub use input_sequences::*;
pub use modes::*;
