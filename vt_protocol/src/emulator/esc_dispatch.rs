// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::performer::Performer;
use crate::{CharsetSlot, DECALN_SCREEN_ALIGNMENT, DECKPAM_APPLICATION_KEYPAD,
            DECKPNM_NORMAL_KEYPAD, DECRC_RESTORE_CURSOR, DECSC_SAVE_CURSOR,
            DEC_LINE_INTERMEDIATE, G0_CHARSET_INTERMEDIATE, G1_CHARSET_INTERMEDIATE,
            G2_CHARSET_INTERMEDIATE, G3_CHARSET_INTERMEDIATE, HTS_TAB_SET, IND_INDEX,
            NEL_NEXT_LINE, RIS_RESET_TERMINAL, RI_REVERSE_INDEX, ST_BACKSLASH,
            ScreenSink, SequenceKind, TerminalMode, UnsupportedSequence};

/// Two byte `ESC final`.
pub(crate) fn dispatch<K: ScreenSink>(performer: &mut Performer<K>, final_byte: u8) {
    match final_byte {
        DECSC_SAVE_CURSOR => performer.sink.save_cursor(),
        DECRC_RESTORE_CURSOR => performer.sink.restore_cursor(),
        IND_INDEX => performer.sink.index(),
        NEL_NEXT_LINE => performer.sink.next_line(),
        RI_REVERSE_INDEX => performer.sink.reverse_index(),
        HTS_TAB_SET => performer.sink.set_tab_stop(),
        RIS_RESET_TERMINAL => performer.full_reset(),
        DECKPAM_APPLICATION_KEYPAD => {
            performer.sink.set_mode(TerminalMode::ApplicationKeypad, true);
        }
        DECKPNM_NORMAL_KEYPAD => {
            performer.sink.set_mode(TerminalMode::ApplicationKeypad, false);
        }
        // A lone ST outside a string.
        ST_BACKSLASH => {}
        _ => UnsupportedSequence::log(
            SequenceKind::Escape,
            format!("ESC {}", char::from(final_byte)),
        ),
    }
}

/// Three byte `ESC intermediate final`.
pub(crate) fn dispatch_with_intermediate<K: ScreenSink>(
    performer: &mut Performer<K>,
    intermediate: u8,
    final_byte: u8,
) {
    let slot = match intermediate {
        G0_CHARSET_INTERMEDIATE => Some(CharsetSlot::G0),
        G1_CHARSET_INTERMEDIATE => Some(CharsetSlot::G1),
        G2_CHARSET_INTERMEDIATE => Some(CharsetSlot::G2),
        G3_CHARSET_INTERMEDIATE => Some(CharsetSlot::G3),
        _ => None,
    };

    match (slot, intermediate, final_byte) {
        (Some(slot), _, _) => performer
            .sink
            .designate_charset(slot, char::from(final_byte)),
        (None, DEC_LINE_INTERMEDIATE, DECALN_SCREEN_ALIGNMENT) => {
            performer.sink.screen_alignment_pattern();
        }
        _ => UnsupportedSequence::log(
            SequenceKind::Escape,
            format!(
                "ESC {} {}",
                char::from(intermediate),
                char::from(final_byte)
            ),
        ),
    }
}
