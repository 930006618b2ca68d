// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end tests: raw bytes in, [`ScreenSink`] calls out.
//!
//! Each `test_*_ops.rs` file maps to one dispatch module:
//!
//! ```text
//! test_char_ops      ←→ performer (print, execute)
//! test_cursor_ops    ←→ csi_dispatch (cursor and scroll), esc_dispatch
//! test_erase_ops     ←→ csi_dispatch (erase and edit)
//! test_mode_ops      ←→ mode_ops
//! test_sgr_ops       ←→ sgr_ops
//! test_osc_ops       ←→ osc_dispatch
//! test_dsr_ops       ←→ csi_dispatch (DA, DSR)
//! test_recovery      ←→ emulator_impl (malformed input)
//! test_chunking      ←→ emulator_impl (split input, end of stream)
//! ```
//!
//! [`ScreenSink`]: crate::ScreenSink

mod test_fixtures;

mod test_char_ops;
mod test_chunking;
mod test_cursor_ops;
mod test_dsr_ops;
mod test_erase_ops;
mod test_osc_ops;
mod test_recovery;
mod test_sgr_ops;
