// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The decode loop: a pull based state machine over bytes coming from the controlled
//! process.
//!
//! ```text
//!             ESC               [               final 0x40-0x7E
//!  Ground ──────────► Escape ────────► CsiParam ────────────────► dispatch ─► Ground
//!    ▲  ▲                │  ]                                                   │
//!    │  │                ├───────────► OscString ── BEL or ESC \ ─► dispatch ───┤
//!    │  │                │  P                                                   │
//!    │  │                ├───────────► DcsString ── ESC \ ────────► absorb ─────┤
//!    │  │                │  0x30-0x7E                                           │
//!    │  │                └───────────────────────────────────────► dispatch ───┘
//!    │  └── CAN, SUB: abort silently
//!    └───── unexpected byte or bound exceeded: discard, DecodeError, byte replayed
//! ```
//!
//! OSC and DCS strings are the exception to "bound exceeded means Ground". A string
//! that outgrows [`DecoderConfig::max_string_bytes`] reports the error once and then
//! stays in its state, dropping bytes until BEL (OSC only) or ESC `\`. Large clipboard
//! writes (OSC 52) therefore never leak onto the screen.
//!
//! The whole decoder state lives in one [`DecoderState`] value. Each byte takes that
//! value out, advances it, and puts the next state back, so there are no flags spread
//! over the struct that could get out of sync.

use super::{csi_dispatch, decoder_state::{CsiSequence, DecoderState, DecoderStateKind,
                                          PartialChar, StringSequence},
            esc_dispatch, osc_dispatch, performer::Performer};
use crate::{BEL, ByteSource, CAN, CSI_BRACKET, CSI_PARAM_SEPARATOR,
            CSI_SUB_PARAM_SEPARATOR, DCS_INTRODUCER, DEL, DecodeError, DecoderConfig, ESC,
            MouseProtocolReader, MouseProtocolState, MouseProtocolWriter, NUL,
            OSC_BRACKET, ReadByte, ST_BACKSLASH, SUB, ScreenSink, SequenceKind,
            TextAttributes, UnsupportedSequence, is_c0_control, is_final, is_intermediate,
            is_private_marker, shared_mouse_protocol_state};

/// Outcome of one successful call to [`Emulator::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    /// One logical unit was decoded and handed to the sink.
    Dispatched,
    /// The source has nothing right now. A partial sequence, if any, is kept.
    NeedMoreInput,
    /// The source reported end of stream. See [`Emulator::reset_eof`].
    EndOfStream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Progress {
    Continue,
    Dispatched,
}

/// Decodes the byte stream of one terminal session into [`ScreenSink`] calls.
///
/// Exactly one decode loop runs per session. The emulator owns the writer side of the
/// shared mouse protocol state; hand out readers with
/// [`mouse_protocol_reader`](Self::mouse_protocol_reader) to encoders on other threads.
///
/// # Example
///
/// ```
/// use r3bl_vt_protocol::{ChunkedByteSource, DecodeStep, Emulator, MouseEncoding,
///                        ScreenSink};
///
/// #[derive(Default)]
/// struct Titles(Vec<String>);
///
/// impl ScreenSink for Titles {
///     fn set_window_title(&mut self, title: &str) { self.0.push(title.to_owned()); }
/// }
///
/// let mut emulator = Emulator::new(ChunkedByteSource::new(), Titles::default());
/// emulator.source_mut().push(b"\x1b]2;build\x07\x1b[?1006h");
///
/// assert_eq!(emulator.next(), Ok(DecodeStep::Dispatched));
/// assert_eq!(emulator.next(), Ok(DecodeStep::Dispatched));
/// assert_eq!(emulator.next(), Ok(DecodeStep::NeedMoreInput));
///
/// assert_eq!(emulator.sink().0, vec!["build".to_owned()]);
/// assert_eq!(emulator.mouse_protocol_reader().encoding(), MouseEncoding::Sgr);
/// ```
#[derive(Debug)]
pub struct Emulator<S: ByteSource, K: ScreenSink> {
    source: S,
    state: DecoderState,
    /// Byte that broke a sequence, replayed in Ground on the next step.
    pushback: Option<u8>,
    eof: bool,
    config: DecoderConfig,
    performer: Performer<K>,
}

// ==================== Construction and accessors ====================

impl<S: ByteSource, K: ScreenSink> Emulator<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self::with_config(source, sink, DecoderConfig::default())
    }

    pub fn with_config(source: S, sink: K, config: DecoderConfig) -> Self {
        let (writer, _reader) = shared_mouse_protocol_state();
        Self::with_mouse_protocol(source, sink, config, writer)
    }

    /// Uses a writer created elsewhere, for when the readers must exist before the
    /// emulator does.
    pub fn with_mouse_protocol(
        source: S,
        sink: K,
        config: DecoderConfig,
        mouse: MouseProtocolWriter,
    ) -> Self {
        Self {
            source,
            state: DecoderState::Ground,
            pushback: None,
            eof: false,
            config,
            performer: Performer::new(sink, mouse),
        }
    }

    #[must_use]
    pub fn mouse_protocol_reader(&self) -> MouseProtocolReader { self.performer.mouse.reader() }

    #[must_use]
    pub fn mouse_protocol(&self) -> MouseProtocolState { self.performer.mouse.get() }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig { &self.config }

    #[must_use]
    pub fn state(&self) -> DecoderStateKind { self.state.kind() }

    /// The SGR pen applied to glyphs written from now on.
    #[must_use]
    pub fn attributes(&self) -> &TextAttributes { &self.performer.attrs }

    #[must_use]
    pub fn sink(&self) -> &K { &self.performer.sink }

    pub fn sink_mut(&mut self) -> &mut K { &mut self.performer.sink }

    pub fn source_mut(&mut self) -> &mut S { &mut self.source }

    /// Reply bytes for queries such as DA and DSR, to be written back to the process.
    pub fn take_responses(&mut self) -> Vec<u8> { std::mem::take(&mut self.performer.responses) }

    pub fn into_parts(self) -> (S, K) { (self.source, self.performer.sink) }
}

// ==================== Pull API ====================

impl<S: ByteSource, K: ScreenSink> Emulator<S, K> {
    /// False once the source reported end of stream and nothing is left to replay.
    #[must_use]
    pub fn has_next(&self) -> bool { !self.eof || self.pushback.is_some() }

    /// Consumes one logical unit and dispatches it.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when a sequence was malformed or exceeded a bound in
    /// [`DecoderConfig`]. The sequence has been discarded and the decoder is already
    /// back in Ground state, or, for an over-long OSC or DCS string, skipping to the
    /// string's terminator. Either way the caller just keeps calling `next()`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<DecodeStep, DecodeError> {
        loop {
            let byte = if let Some(byte) = self.pushback.take() {
                byte
            } else {
                if self.eof {
                    return Ok(DecodeStep::EndOfStream);
                }
                match self.source.read_byte() {
                    ReadByte::Byte(byte) => byte,
                    ReadByte::WouldBlock => return Ok(DecodeStep::NeedMoreInput),
                    ReadByte::Eof => {
                        tracing::debug!(state = ?self.state.kind(), "end of stream");
                        self.eof = true;
                        return Ok(DecodeStep::EndOfStream);
                    }
                }
            };

            if self.advance(byte)? == Progress::Dispatched {
                return Ok(DecodeStep::Dispatched);
            }
        }
    }

    /// Forgets a previously seen end of stream. A sequence that was cut off by EOF is
    /// completed by the bytes that arrive later.
    pub fn reset_eof(&mut self) {
        self.eof = false;
        self.source.reset_eof();
    }

    /// Decodes until the source has nothing more right now. Malformed sequences are
    /// logged and skipped. Returns how many units were dispatched.
    pub fn decode_available(&mut self) -> usize {
        let mut dispatched = 0;
        loop {
            match self.next() {
                Ok(DecodeStep::Dispatched) => dispatched += 1,
                Ok(DecodeStep::NeedMoreInput | DecodeStep::EndOfStream) => return dispatched,
                Err(error) => tracing::warn!(%error, "malformed sequence discarded"),
            }
        }
    }
}

// ==================== State machine ====================

impl<S: ByteSource, K: ScreenSink> Emulator<S, K> {
    fn advance(&mut self, byte: u8) -> Result<Progress, DecodeError> {
        // Every handler starts from Ground and stores the next state itself.
        match std::mem::replace(&mut self.state, DecoderState::Ground) {
            DecoderState::Ground => Ok(self.ground(byte)),
            DecoderState::Utf8(partial) => Ok(self.utf8(partial, byte)),
            DecoderState::Escape => self.escape(byte),
            DecoderState::EscapeIntermediate(intermediate) => {
                self.escape_intermediate(intermediate, byte)
            }
            DecoderState::CsiParam(seq) => self.csi_param(seq, byte),
            DecoderState::OscString(string) => self.osc_string(string, byte),
            DecoderState::DcsString(string) => self.dcs_string(string, byte),
        }
    }

    fn ground(&mut self, byte: u8) -> Progress {
        match byte {
            NUL | DEL => Progress::Continue,
            ESC => {
                self.state = DecoderState::Escape;
                Progress::Continue
            }
            _ if is_c0_control(byte) => {
                self.performer.execute(byte);
                Progress::Dispatched
            }
            0x20..=0x7E => {
                self.performer.print(char::from(byte));
                Progress::Dispatched
            }
            _ => match PartialChar::start(byte) {
                Some(partial) => {
                    self.state = DecoderState::Utf8(partial);
                    Progress::Continue
                }
                None => {
                    self.performer.print(char::REPLACEMENT_CHARACTER);
                    Progress::Dispatched
                }
            },
        }
    }

    fn utf8(&mut self, mut partial: PartialChar, byte: u8) -> Progress {
        // Not a continuation byte: the character is cut short.
        if byte & 0xC0 != 0x80 {
            self.performer.print(char::REPLACEMENT_CHARACTER);
            self.pushback = Some(byte);
            return Progress::Dispatched;
        }

        partial.push(byte);
        if partial.is_complete() {
            self.performer.print(partial.decode());
            Progress::Dispatched
        } else {
            self.state = DecoderState::Utf8(partial);
            Progress::Continue
        }
    }

    fn escape(&mut self, byte: u8) -> Result<Progress, DecodeError> {
        match byte {
            CAN | SUB => {}
            NUL | DEL => self.state = DecoderState::Escape,
            CSI_BRACKET => self.state = DecoderState::CsiParam(CsiSequence::default()),
            OSC_BRACKET => self.state = DecoderState::OscString(StringSequence::default()),
            DCS_INTRODUCER => {
                self.state = DecoderState::DcsString(StringSequence::default());
            }
            _ if is_intermediate(byte) => {
                self.state = DecoderState::EscapeIntermediate(byte);
            }
            _ if is_final(byte) => {
                esc_dispatch::dispatch(&mut self.performer, byte);
                return Ok(Progress::Dispatched);
            }
            _ => return self.recover(byte, SequenceKind::Escape),
        }
        Ok(Progress::Continue)
    }

    fn escape_intermediate(
        &mut self,
        intermediate: u8,
        byte: u8,
    ) -> Result<Progress, DecodeError> {
        match byte {
            CAN | SUB => {}
            // Only the first intermediate selects the operation.
            _ if byte == NUL || byte == DEL || is_intermediate(byte) => {
                self.state = DecoderState::EscapeIntermediate(intermediate);
            }
            _ if is_final(byte) => {
                esc_dispatch::dispatch_with_intermediate(
                    &mut self.performer,
                    intermediate,
                    byte,
                );
                return Ok(Progress::Dispatched);
            }
            _ => return self.recover(byte, SequenceKind::Escape),
        }
        Ok(Progress::Continue)
    }

    fn csi_param(&mut self, mut seq: CsiSequence, byte: u8) -> Result<Progress, DecodeError> {
        match byte {
            CAN | SUB => return Ok(Progress::Continue),
            NUL | DEL => {
                self.state = DecoderState::CsiParam(seq);
                return Ok(Progress::Continue);
            }
            _ => {}
        }

        let limit = self.config.max_csi_bytes;
        if seq.count_byte() > limit {
            return Err(DecodeError::SequenceTooLong {
                kind: SequenceKind::Csi,
                limit,
            });
        }

        match byte {
            b'0'..=b'9' => seq.push_digit(byte),
            CSI_PARAM_SEPARATOR | CSI_SUB_PARAM_SEPARATOR => {
                seq.separator(byte, self.config.max_csi_params)?;
            }
            _ if is_private_marker(byte) => {
                if !seq.is_at_start() {
                    return Err(DecodeError::MisplacedPrivateMarker {
                        marker: char::from(byte),
                    });
                }
                seq.set_private_marker(byte);
            }
            _ if is_intermediate(byte) => seq.push_intermediate(byte),
            0x40..=0x7E => {
                seq.finish(self.config.max_csi_params)?;
                csi_dispatch::dispatch(&mut self.performer, &seq, char::from(byte));
                return Ok(Progress::Dispatched);
            }
            _ => return self.recover(byte, SequenceKind::Csi),
        }

        self.state = DecoderState::CsiParam(seq);
        Ok(Progress::Continue)
    }

    fn osc_string(
        &mut self,
        mut string: StringSequence,
        byte: u8,
    ) -> Result<Progress, DecodeError> {
        if string.saw_esc {
            return self.string_terminator(string, byte, SequenceKind::Osc);
        }

        let pushed = match byte {
            CAN | SUB => return Ok(Progress::Continue),
            BEL => {
                self.finish_string(string, SequenceKind::Osc);
                return Ok(Progress::Dispatched);
            }
            ESC => {
                string.saw_esc = true;
                Ok(())
            }
            _ if is_c0_control(byte) => Ok(()),
            _ => string.push(byte, self.config.max_string_bytes, SequenceKind::Osc),
        };

        // An over-long string stays in this state until its terminator.
        self.state = DecoderState::OscString(string);
        pushed.map(|()| Progress::Continue)
    }

    /// Like OSC, except that BEL does not terminate.
    fn dcs_string(
        &mut self,
        mut string: StringSequence,
        byte: u8,
    ) -> Result<Progress, DecodeError> {
        if string.saw_esc {
            return self.string_terminator(string, byte, SequenceKind::Dcs);
        }

        let pushed = match byte {
            CAN | SUB => return Ok(Progress::Continue),
            ESC => {
                string.saw_esc = true;
                Ok(())
            }
            _ if is_c0_control(byte) => Ok(()),
            _ => string.push(byte, self.config.max_string_bytes, SequenceKind::Dcs),
        };

        self.state = DecoderState::DcsString(string);
        pushed.map(|()| Progress::Continue)
    }

    /// The byte after an ESC inside an OSC or DCS string. `\` completes ST. Anything
    /// else means the ESC started a new sequence, so the string is dropped and the
    /// decoder continues in Escape with this byte.
    fn string_terminator(
        &mut self,
        string: StringSequence,
        byte: u8,
        kind: SequenceKind,
    ) -> Result<Progress, DecodeError> {
        if byte == ST_BACKSLASH {
            self.finish_string(string, kind);
            return Ok(Progress::Dispatched);
        }

        self.state = DecoderState::Escape;
        self.pushback = Some(byte);
        Err(DecodeError::UnexpectedByte { byte: ESC, kind })
    }

    fn finish_string(&mut self, string: StringSequence, kind: SequenceKind) {
        if string.overflowed {
            tracing::debug!(%kind, "over-long string skipped up to its terminator");
            return;
        }
        match kind {
            SequenceKind::Osc => osc_dispatch::dispatch(&mut self.performer, &string.payload),
            _ => UnsupportedSequence::log(
                kind,
                format!("DCS {}", String::from_utf8_lossy(&string.payload)),
            ),
        }
    }

    /// Drops the partial sequence and replays `byte` in Ground.
    fn recover(&mut self, byte: u8, kind: SequenceKind) -> Result<Progress, DecodeError> {
        tracing::trace!(byte, %kind, "sequence interrupted");
        self.state = DecoderState::Ground;
        self.pushback = Some(byte);
        Err(DecodeError::UnexpectedByte { byte, kind })
    }
}
