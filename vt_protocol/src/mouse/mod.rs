// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
mod mouse_event_encoder;
mod mouse_protocol_state;
mod pointer_event;

// Re-export.
pub use mouse_event_encoder::*;
pub use mouse_protocol_state::*;
pub use pointer_event::*;
