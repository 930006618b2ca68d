// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SequenceKind {
    /// A lone control byte in Ground state, not a sequence proper.
    #[strum(serialize = "C0")]
    C0,
    #[strum(serialize = "ESC")]
    Escape,
    #[strum(serialize = "CSI")]
    Csi,
    #[strum(serialize = "OSC")]
    Osc,
    #[strum(serialize = "DCS")]
    Dcs,
}

/// A sequence was malformed or too long and has been discarded.
///
/// Never fatal: the next call to [`next()`] carries on with the following input. The
/// decoder is back in Ground state, except after an over-long OSC or DCS string, which
/// it keeps skipping until the string's terminator.
///
/// [`next()`]: crate::Emulator::next
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum DecodeError {
    #[error("{kind} sequence exceeded {limit} bytes and was discarded")]
    #[diagnostic(
        code(r3bl_vt_protocol::decode::sequence_too_long),
        help("Raise the limit in `DecoderConfig` if the producer is well behaved")
    )]
    SequenceTooLong { kind: SequenceKind, limit: usize },

    #[error("CSI sequence has more than {limit} parameters and was discarded")]
    #[diagnostic(code(r3bl_vt_protocol::decode::too_many_params))]
    TooManyParams { limit: usize },

    #[error("Byte {byte:#04x} interrupted a {kind} sequence")]
    #[diagnostic(
        code(r3bl_vt_protocol::decode::unexpected_byte),
        help("The byte is processed again in Ground state")
    )]
    UnexpectedByte { byte: u8, kind: SequenceKind },

    #[error("Private marker {marker:?} is only valid right after `ESC [`")]
    #[diagnostic(code(r3bl_vt_protocol::decode::misplaced_private_marker))]
    MisplacedPrivateMarker { marker: char },
}

/// A well formed sequence this crate does not implement. It is absorbed (consumed with
/// no effect) and only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("Unsupported {kind} sequence: {description}")]
#[diagnostic(code(r3bl_vt_protocol::decode::unsupported))]
pub struct UnsupportedSequence {
    pub kind: SequenceKind,
    pub description: String,
}

impl UnsupportedSequence {
    pub fn log(kind: SequenceKind, description: impl Into<String>) {
        let unsupported = Self {
            kind,
            description: description.into(),
        };
        tracing::debug!(%unsupported, "absorbed");
    }
}
