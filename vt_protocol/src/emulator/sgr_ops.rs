// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (`CSI ... m`) updates the pen in place and then hands the whole pen to the
//! sink, so the sink never has to track partial updates.
//!
//! | Params              | Effect                                  |
//! | :------------------ | :-------------------------------------- |
//! | (none), 0           | reset                                   |
//! | 1 2 3 4 5 7 8 9     | bold, dim, italic, underline, blink, inverse, hidden, strike |
//! | 21                  | underline                               |
//! | 22 23 24 25 27 28 29 | turn the above off (22 clears bold and dim) |
//! | 30-37, 90-97        | foreground 0-7, 8-15                    |
//! | 40-47, 100-107      | background 0-7, 8-15                    |
//! | 38;5;n, 48;5;n      | 256 color palette                       |
//! | 38;2;r;g;b, 48;2;r;g;b | true color                           |
//! | 39, 49              | default foreground, background          |
//! | 58, 59              | underline color, parsed and absorbed    |
//!
//! Extended colors also come in the colon form, where the whole color is one
//! parameter: `38:5:n` and `38:2:[colorspace]:r:g:b` (the colorspace id may be left
//! out, `38:2:r:g:b`). For any other parameter with colon sub-parameters only the
//! first value counts, except `4:0` which turns underline off. `4:3` (curly) is
//! plain underline here.

use super::performer::Performer;
use crate::{Color, CsiSequence, ScreenSink, TextAttributes};

const EXTENDED_INDEXED: u16 = 5;
const EXTENDED_RGB: u16 = 2;

const FG_EXTENDED: u16 = 38;
const BG_EXTENDED: u16 = 48;
const UNDERLINE_COLOR_EXTENDED: u16 = 58;

pub(crate) fn set_graphics_rendition<K: ScreenSink>(
    performer: &mut Performer<K>,
    seq: &CsiSequence,
) {
    apply_sgr_params(&mut performer.attrs, seq);
    performer.sink.set_attributes(&performer.attrs);
}

pub(crate) fn apply_sgr_params(attrs: &mut TextAttributes, seq: &CsiSequence) {
    let params = seq.params();
    if params.is_empty() {
        attrs.reset();
        return;
    }

    let mut index = 0;
    while index < params.len() {
        let param = params[index];
        let sub_params = seq.sub_params(index);
        index += 1;
        match param {
            0 => attrs.reset(),
            1 => attrs.bold = true,
            2 => attrs.dim = true,
            3 => attrs.italic = true,
            4 => attrs.underline = sub_params.first() != Some(&0),
            21 => attrs.underline = true,
            5 | 6 => attrs.blink = true,
            7 => attrs.inverse = true,
            8 => attrs.hidden = true,
            9 => attrs.strikethrough = true,
            22 => {
                attrs.bold = false;
                attrs.dim = false;
            }
            23 => attrs.italic = false,
            24 => attrs.underline = false,
            25 => attrs.blink = false,
            27 => attrs.inverse = false,
            28 => attrs.hidden = false,
            29 => attrs.strikethrough = false,
            30..=37 => attrs.foreground = Some(basic_color(param - 30)),
            39 => attrs.foreground = None,
            40..=47 => attrs.background = Some(basic_color(param - 40)),
            49 => attrs.background = None,
            59 => tracing::debug!("underline color reset absorbed"),
            90..=97 => attrs.foreground = Some(basic_color(param - 90 + 8)),
            100..=107 => attrs.background = Some(basic_color(param - 100 + 8)),
            FG_EXTENDED | BG_EXTENDED | UNDERLINE_COLOR_EXTENDED => {
                let color = if sub_params.is_empty() {
                    // `38;5;n`: the color spends the following parameters.
                    extended_color(&params[index..]).map(|(color, consumed)| {
                        index += consumed;
                        color
                    })
                } else {
                    extended_color_from_sub_params(&sub_params)
                };
                let Some(color) = color else {
                    tracing::debug!(?params, "malformed extended color, rest of SGR skipped");
                    return;
                };
                match param {
                    FG_EXTENDED => attrs.foreground = Some(color),
                    BG_EXTENDED => attrs.background = Some(color),
                    _ => tracing::debug!(?color, "underline color absorbed"),
                }
            }
            _ => tracing::debug!(param, "unsupported SGR parameter absorbed"),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn basic_color(index: u16) -> Color { Color::Indexed(index as u8) }

fn to_u8(value: u16) -> Option<u8> { u8::try_from(value).ok() }

/// Parses what follows 38 or 48 in the `;` form. Returns the color and how many params
/// it used.
fn extended_color(rest: &[u16]) -> Option<(Color, usize)> {
    match rest {
        [EXTENDED_INDEXED, n, ..] => Some((Color::Indexed(to_u8(*n)?), 2)),
        [EXTENDED_RGB, r, g, b, ..] => {
            Some((Color::Rgb(to_u8(*r)?, to_u8(*g)?, to_u8(*b)?), 4))
        }
        _ => None,
    }
}

/// The `:` form. The group is self contained, so nothing else is consumed.
fn extended_color_from_sub_params(sub_params: &[u16]) -> Option<Color> {
    match sub_params {
        [EXTENDED_INDEXED, n, ..] => Some(Color::Indexed(to_u8(*n)?)),
        [EXTENDED_RGB, _, r, g, b, ..] | [EXTENDED_RGB, r, g, b] => {
            Some(Color::Rgb(to_u8(*r)?, to_u8(*g)?, to_u8(*b)?))
        }
        _ => None,
    }
}
