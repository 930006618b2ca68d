// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! State carried between bytes while a logical unit is incomplete.

use crate::{CSI_SUB_PARAM_SEPARATOR, DecodeError, SequenceKind};
use smallvec::SmallVec;

/// Coarse view of the decoder state, for callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderStateKind {
    Ground,
    Escape,
    CsiParam,
    OscString,
    DcsString,
}

#[derive(Debug)]
pub(crate) enum DecoderState {
    Ground,
    /// Ground, part way through a multi-byte UTF-8 character.
    Utf8(PartialChar),
    Escape,
    /// Escape, after an intermediate such as `(` or `#` that needs one more byte.
    EscapeIntermediate(u8),
    CsiParam(CsiSequence),
    OscString(StringSequence),
    DcsString(StringSequence),
}

impl DecoderState {
    pub(crate) fn kind(&self) -> DecoderStateKind {
        match self {
            Self::Ground | Self::Utf8(_) => DecoderStateKind::Ground,
            Self::Escape | Self::EscapeIntermediate(_) => DecoderStateKind::Escape,
            Self::CsiParam(_) => DecoderStateKind::CsiParam,
            Self::OscString(_) => DecoderStateKind::OscString,
            Self::DcsString(_) => DecoderStateKind::DcsString,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct PartialChar {
    bytes: [u8; 4],
    len: usize,
    expected: usize,
}

impl PartialChar {
    /// Starts a character from its lead byte, or returns [`None`] if `lead` can not
    /// start one.
    pub(crate) fn start(lead: u8) -> Option<Self> {
        let expected = match lead {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return None,
        };
        let mut bytes = [0; 4];
        bytes[0] = lead;
        Some(Self {
            bytes,
            len: 1,
            expected,
        })
    }

    pub(crate) fn push(&mut self, continuation: u8) {
        if self.len < self.expected {
            self.bytes[self.len] = continuation;
            self.len += 1;
        }
    }

    pub(crate) fn is_complete(&self) -> bool { self.len == self.expected }

    /// The decoded character, or U+FFFD for overlong forms and surrogates.
    pub(crate) fn decode(&self) -> char {
        std::str::from_utf8(&self.bytes[..self.len])
            .ok()
            .and_then(|text| text.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Inline capacity for parameters. Most sequences have fewer than 16; longer ones
/// spill to the heap up to [`DecoderConfig::max_csi_params`].
///
/// [`DecoderConfig::max_csi_params`]: crate::DecoderConfig::max_csi_params
const PARAMS_INLINE: usize = 16;

/// Inline capacity for colon sub-parameters. Only SGR uses them in practice, and a
/// single `38:2::r:g:b` needs five.
const SUB_PARAMS_INLINE: usize = 8;

/// The CSI parameter buffer: `ESC [ [marker] params [intermediates] final`.
///
/// A missing or empty parameter is stored as 0, which every operation treats as "use
/// the default".
///
/// Values joined by `:` form one group. The first value of each group is the
/// parameter seen by [`params`](Self::params); the rest are kept apart and read with
/// [`sub_params`](Self::sub_params). `CSI 1;38:2::255:0:0 m` has params `[1, 38]`, and
/// parameter 1 has sub-parameters `[2, 0, 255, 0, 0]`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CsiSequence {
    private_marker: Option<u8>,
    params: SmallVec<[u16; PARAMS_INLINE]>,
    /// `(index into params, value)` in arrival order.
    sub_params: SmallVec<[(usize, u16); SUB_PARAMS_INLINE]>,
    current: Option<u16>,
    /// The value in progress follows a `:`.
    in_sub_param: bool,
    intermediates: SmallVec<[u8; 2]>,
    byte_count: usize,
}

impl CsiSequence {
    #[must_use]
    pub fn private_marker(&self) -> Option<u8> { self.private_marker }

    #[must_use]
    pub fn is_private(&self) -> bool { self.private_marker == Some(crate::CSI_PRIVATE_MARKER) }

    /// Top level parameters, one per `;` separated group.
    #[must_use]
    pub fn params(&self) -> &[u16] { &self.params }

    /// The values that followed parameter `index` after a `:`. Empty for plain
    /// parameters.
    #[must_use]
    pub fn sub_params(&self, index: usize) -> SmallVec<[u16; SUB_PARAMS_INLINE]> {
        self.sub_params
            .iter()
            .filter(|(owner, _)| *owner == index)
            .map(|(_, value)| *value)
            .collect()
    }

    #[must_use]
    pub fn has_sub_params(&self, index: usize) -> bool {
        self.sub_params.iter().any(|(owner, _)| *owner == index)
    }

    #[must_use]
    pub fn intermediates(&self) -> &[u8] { &self.intermediates }

    /// Parameter `index`, with 0 or missing replaced by `default`.
    #[must_use]
    pub fn param_or(&self, index: usize, default: u16) -> u16 {
        match self.params.get(index) {
            Some(&value) if value != 0 => value,
            _ => default,
        }
    }

    /// Parameter `index` as given, 0 when missing.
    #[must_use]
    pub fn raw_param(&self, index: usize) -> u16 { self.params.get(index).copied().unwrap_or(0) }

    pub(crate) fn count_byte(&mut self) -> usize {
        self.byte_count += 1;
        self.byte_count
    }

    pub(crate) fn is_at_start(&self) -> bool { self.byte_count == 1 }

    pub(crate) fn set_private_marker(&mut self, marker: u8) { self.private_marker = Some(marker); }

    /// Values saturate at `u16::MAX` like xterm.
    pub(crate) fn push_digit(&mut self, digit: u8) {
        let value = self.current.unwrap_or(0);
        self.current = Some(
            value
                .saturating_mul(10)
                .saturating_add(u16::from(digit - b'0')),
        );
    }

    pub(crate) fn push_intermediate(&mut self, byte: u8) {
        if self.intermediates.len() < self.intermediates.inline_size() {
            self.intermediates.push(byte);
        }
    }

    /// Closes the value in progress at `;` or `:`. The separator decides whether the
    /// next value starts a new parameter or joins the current group.
    pub(crate) fn separator(&mut self, separator: u8, limit: usize) -> Result<(), DecodeError> {
        self.close_value();
        self.in_sub_param = separator == CSI_SUB_PARAM_SEPARATOR;
        self.check_limit(limit)
    }

    /// Closes the last value at the final byte. `ESC [ m` keeps an empty list.
    pub(crate) fn finish(&mut self, limit: usize) -> Result<(), DecodeError> {
        if self.current.is_some() || !self.params.is_empty() {
            self.close_value();
        }
        self.check_limit(limit)
    }

    fn close_value(&mut self) {
        let value = self.current.take().unwrap_or(0);
        match self.params.len().checked_sub(1) {
            Some(owner) if self.in_sub_param => self.sub_params.push((owner, value)),
            _ => self.params.push(value),
        }
    }

    /// Sub-parameters count towards the limit, so a run of colons is bounded too.
    fn check_limit(&self, limit: usize) -> Result<(), DecodeError> {
        if self.params.len() + self.sub_params.len() > limit {
            Err(DecodeError::TooManyParams { limit })
        } else {
            Ok(())
        }
    }
}

/// Payload of an OSC or DCS string.
#[derive(Debug, Default)]
pub(crate) struct StringSequence {
    pub(crate) payload: Vec<u8>,
    /// ESC seen, waiting for `\` to complete ST.
    pub(crate) saw_esc: bool,
    /// The payload hit the limit. The rest of the string is consumed up to its
    /// terminator and thrown away.
    pub(crate) overflowed: bool,
}

impl StringSequence {
    /// Appends one payload byte. Reports [`DecodeError::SequenceTooLong`] once, on the
    /// byte that crosses `limit`; later bytes are dropped without another error.
    pub(crate) fn push(
        &mut self,
        byte: u8,
        limit: usize,
        kind: SequenceKind,
    ) -> Result<(), DecodeError> {
        if self.overflowed {
            return Ok(());
        }
        if self.payload.len() >= limit {
            self.overflowed = true;
            self.payload = Vec::new();
            return Err(DecodeError::SequenceTooLong { kind, limit });
        }
        self.payload.push(byte);
        Ok(())
    }
}

/// Builds a [`CsiSequence`] from parameter text such as `"1;38:2::255:0:0"`.
#[cfg(test)]
pub(crate) fn parse_csi_params(text: &str) -> CsiSequence {
    let mut seq = CsiSequence::default();
    for byte in text.bytes() {
        seq.count_byte();
        match byte {
            b'0'..=b'9' => seq.push_digit(byte),
            b';' | b':' => seq.separator(byte, 32).unwrap(),
            _ => panic!("not a parameter byte: {byte:#04x}"),
        }
    }
    seq.finish(32).unwrap();
    seq
}
