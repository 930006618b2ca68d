// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC strings: `ESC ] Ps ; Pt BEL` or `ESC ] Ps ; Pt ESC \`.
//!
//! | Ps | Effect                                                  |
//! | :- | :------------------------------------------------------ |
//! | 0  | icon and window title                                   |
//! | 1  | icon title                                              |
//! | 2  | window title                                            |
//! | 8  | hyperlink: `8 ; params ; uri`, an empty uri ends the link |

use super::performer::Performer;
use crate::{ScreenSink, SequenceKind, UnsupportedSequence};

const OSC_SET_ICON_AND_TITLE: &str = "0";
const OSC_SET_ICON: &str = "1";
const OSC_SET_TITLE: &str = "2";
const OSC_HYPERLINK: &str = "8";

pub(crate) fn dispatch<K: ScreenSink>(performer: &mut Performer<K>, payload: &[u8]) {
    let text = String::from_utf8_lossy(payload);
    let (command, rest) = text.split_once(';').unwrap_or((&text, ""));

    match command {
        OSC_SET_ICON_AND_TITLE => {
            performer.sink.set_icon_title(rest);
            performer.sink.set_window_title(rest);
        }
        OSC_SET_ICON => performer.sink.set_icon_title(rest),
        OSC_SET_TITLE => performer.sink.set_window_title(rest),
        OSC_HYPERLINK => {
            // The params part (for example `id=...`) is not used.
            let uri = rest.split_once(';').map_or("", |(_params, uri)| uri);
            performer
                .sink
                .set_hyperlink(if uri.is_empty() { None } else { Some(uri) });
        }
        _ => UnsupportedSequence::log(SequenceKind::Osc, format!("OSC {command}")),
    }
}
