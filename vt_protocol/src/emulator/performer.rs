// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything a complete logical unit needs once the state machine has recognized it.
//!
//! The state machine in [`emulator_impl`] only deals with bytes. When a unit is
//! complete it hands it to the [`Performer`], which owns the sink, the SGR pen, the
//! writer side of the mouse protocol state and the buffer of replies to queries.
//!
//! | Unit          | Entry point                        |
//! | :------------ | :--------------------------------- |
//! | Printable     | [`Performer::print`]               |
//! | C0 control    | [`Performer::execute`]             |
//! | ESC           | [`esc_dispatch::dispatch`]         |
//! | CSI           | [`csi_dispatch::dispatch`]         |
//! | OSC           | [`osc_dispatch::dispatch`]         |
//!
//! [`emulator_impl`]: super::emulator_impl
//! [`esc_dispatch::dispatch`]: super::esc_dispatch::dispatch
//! [`csi_dispatch::dispatch`]: super::csi_dispatch::dispatch
//! [`osc_dispatch::dispatch`]: super::osc_dispatch::dispatch

use crate::{BEL, BS, CR, CharsetSlot, FF, HT, LF, MouseProtocolWriter, SI, SO,
            ScreenSink, SequenceKind, TextAttributes, UnsupportedSequence, VT};

#[derive(Debug)]
pub(crate) struct Performer<K: ScreenSink> {
    pub(crate) sink: K,
    pub(crate) attrs: TextAttributes,
    pub(crate) mouse: MouseProtocolWriter,
    pub(crate) responses: Vec<u8>,
}

impl<K: ScreenSink> Performer<K> {
    pub(crate) fn new(sink: K, mouse: MouseProtocolWriter) -> Self {
        Self {
            sink,
            attrs: TextAttributes::default(),
            mouse,
            responses: Vec::new(),
        }
    }

    pub(crate) fn print(&mut self, ch: char) {
        let mut buffer = [0_u8; 4];
        let text = ch.encode_utf8(&mut buffer);
        self.sink.write_glyphs(text, &self.attrs);
    }

    /// C0 control in Ground state.
    pub(crate) fn execute(&mut self, byte: u8) {
        match byte {
            BEL => self.sink.bell(),
            BS => self.sink.backspace(),
            HT => self.sink.horizontal_tab(),
            LF | VT | FF => self.sink.line_feed(),
            CR => self.sink.carriage_return(),
            SO => self.sink.invoke_charset(CharsetSlot::G1),
            SI => self.sink.invoke_charset(CharsetSlot::G0),
            _ => UnsupportedSequence::log(SequenceKind::C0, format!("{byte:#04x}")),
        }
    }

    /// RIS: everything back to power-on state, including the mouse protocol.
    pub(crate) fn full_reset(&mut self) {
        self.attrs.reset();
        self.mouse.reset();
        self.sink.reset();
    }

    pub(crate) fn respond(&mut self, bytes: &[u8]) { self.responses.extend_from_slice(bytes); }
}
