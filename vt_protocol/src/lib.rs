// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_vt_protocol
//!
//! The protocol core of a terminal emulator: the translation layer between the raw
//! bytes exchanged with a shell process and the events a terminal frontend deals in.
//! Rendering, grid storage and the PTY or SSH transport are left to the embedder.
//!
//! ```text
//!                      ┌──────────────────────────────────────────┐
//!  process output ───► │ ByteSource ─► Emulator ─► ScreenSink     │ ───► your grid
//!                      │                  │                       │
//!                      │     CSI ? 1000 h │ (sole writer)         │
//!                      │                  ▼                       │
//!                      │          MouseProtocolState              │
//!                      │                  │ (readers, any thread) │
//!                      │                  ▼                       │
//!  process input  ◄─── │ MouseEventEncoder, KeyEventEncoder       │ ◄─── UI events
//!                      └──────────────────────────────────────────┘
//! ```
//!
//! # Incoming: decoding
//!
//! [`Emulator`] pulls bytes from a [`ByteSource`] and turns each logical unit (one
//! character, one control byte or one complete ESC, CSI, OSC or DCS sequence) into
//! calls on a [`ScreenSink`]. Input may arrive split at any byte; partial sequences are
//! kept across calls and across end of stream ([`Emulator::reset_eof`]).
//!
//! Malformed input never stops the decoder. The broken sequence is discarded, the
//! decoder goes back to Ground state and [`Emulator::next`] returns a [`DecodeError`]
//! describing what happened. Well formed sequences that are not implemented are
//! absorbed and logged at `debug` level.
//!
//! ```
//! use r3bl_vt_protocol::{ChunkedByteSource, CursorMotion, Emulator, ScreenSink,
//!                        TextAttributes};
//!
//! #[derive(Default)]
//! struct Screen {
//!     text: String,
//!     moves: Vec<CursorMotion>,
//! }
//!
//! impl ScreenSink for Screen {
//!     fn write_glyphs(&mut self, text: &str, _attrs: &TextAttributes) {
//!         self.text.push_str(text);
//!     }
//!     fn move_cursor(&mut self, motion: CursorMotion) { self.moves.push(motion); }
//! }
//!
//! let mut emulator = Emulator::new(ChunkedByteSource::new(), Screen::default());
//! emulator.source_mut().push(b"\x1b[5;1Hhello\x1b[");
//! emulator.decode_available();
//! emulator.source_mut().push(b"2A");
//! emulator.decode_available();
//!
//! assert_eq!(emulator.sink().text, "hello");
//! assert_eq!(
//!     emulator.sink().moves,
//!     vec![CursorMotion::To { row: 5, col: 1 }, CursorMotion::Up(2)]
//! );
//! ```
//!
//! # Outgoing: encoding
//!
//! The controlled process negotiates mouse reporting with `CSI ? n h`. The decoder
//! records the result in a shared [`MouseProtocolState`]; a [`MouseEventEncoder`] on
//! the UI thread reads it to produce the bytes for a [`PointerEvent`].
//! [`KeyEventEncoder`] does the same for keys, using a [`KeyEncoderConfig`].
//!
//! ```
//! use r3bl_vt_protocol::{ButtonId, ChunkedByteSource, Emulator, KeyCode, KeyEvent,
//!                        KeyEventEncoder, ModifierState, MouseEventEncoder,
//!                        PointerEvent, PointerEventKind, ScreenSink, TermPos};
//!
//! struct NoScreen;
//! impl ScreenSink for NoScreen {}
//!
//! let mut emulator = Emulator::new(ChunkedByteSource::new(), NoScreen);
//! let mouse = MouseEventEncoder::new(emulator.mouse_protocol_reader());
//!
//! let click = PointerEvent::new(
//!     PointerEventKind::Pressed(ButtonId::Left),
//!     TermPos::new(100, 50),
//!     ModifierState::NONE,
//! );
//! assert_eq!(mouse.encode(&click), None, "reporting is off until requested");
//!
//! emulator.source_mut().push(b"\x1b[?1000h\x1b[?1006h");
//! emulator.decode_available();
//! assert_eq!(mouse.encode(&click), Some(b"\x1b[<0;100;50M".to_vec()));
//!
//! let keys = KeyEventEncoder::default();
//! let alt_left = KeyEvent::new(KeyCode::Left, ModifierState::ALT);
//! assert_eq!(keys.encode(&alt_left), Some(b"\x1b\x1b[D".to_vec()));
//! ```
//!
//! # Hyperlinks
//!
//! [`HyperlinkFilter`] scans one line of decoded text for a link. [`UrlFilter`] is
//! provided, and [`TextProcessing`] runs a list of filters to find every link.
//!
//! # Configuration and logging
//!
//! Limits and keyboard behavior live in [`ProtocolConfig`], which loads from JSON. The
//! crate logs through `tracing`; [`init_tracing`] installs a subscriber if the embedder
//! does not have one.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]
// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide a flat public API).
pub mod config;
pub mod constants;
pub mod emulator;
pub mod hyperlink;
pub mod keyboard;
pub mod log;
pub mod modifier_state;
pub mod mouse;

// Re-export.
pub use config::*;
pub use constants::*;
pub use emulator::*;
pub use hyperlink::*;
pub use keyboard::*;
pub use log::*;
pub use modifier_state::*;
pub use mouse::*;
