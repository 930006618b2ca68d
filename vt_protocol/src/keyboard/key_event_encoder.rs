// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Converts a [`KeyEvent`] into the bytes the controlled process expects.
//!
//! # Lookup order
//!
//! 1. Printable characters are handled by [`KeyEventEncoder::encode_char`].
//! 2. An exact `(key, modifiers)` entry wins (for example Shift+Tab, Ctrl+Backspace).
//! 3. Otherwise the unmodified entry is used and the modifiers are folded in:
//!    - Alt (when [`alt_sends_escape`] is on, or for cursor keys and Backspace) or Meta
//!      (when [`meta_sends_escape`] is on, or for cursor keys and Backspace) prefix ESC
//!      to the encoding of the key without Alt and Meta.
//!    - Remaining modifiers on cursor and function keys become the xterm modifier
//!      parameter: `CSI 1 ; m final` or `CSI n ; m ~`. SS3 sequences turn into CSI.
//!
//! | Key       | Unmodified        | Shift           | Alt                |
//! | :-------- | :---------------- | :-------------- | :----------------- |
//! | Backspace | `DEL`             | `DEL`           | `ESC DEL`          |
//! | Left      | `ESC [ D`         | `ESC [ 1 ; 2 D` | `ESC ESC [ D`      |
//! | F1        | `ESC O P`         | `ESC [ 1 ; 2 P` | `ESC ESC O P`      |
//! | F11       | `ESC [ 23 ~`      | `ESC [ 23 ; 2 ~`| `ESC ESC [ 23 ~`   |
//!
//! [`alt_sends_escape`]: crate::KeyEncoderConfig::alt_sends_escape
//! [`meta_sends_escape`]: crate::KeyEncoderConfig::meta_sends_escape

use crate::{ARROW_DOWN_FINAL, ARROW_LEFT_FINAL, ARROW_RIGHT_FINAL, ARROW_UP_FINAL,
            BACKTAB_FINAL, BS, CR, CSI_BRACKET, CSI_PARAM_SEPARATOR, CTRL_LETTER_MASK,
            DEL, ENQ, ESC, FS, FUNCTION_F5_CODE, FUNCTION_F6_CODE, FUNCTION_F7_CODE,
            FUNCTION_F8_CODE, FUNCTION_F9_CODE, FUNCTION_F10_CODE, FUNCTION_F11_CODE,
            FUNCTION_F12_CODE, FUNCTION_KEY_TERMINATOR, GS, HT, KeyCode,
            KeyEncoderConfig, KeyEvent, LF, ModifierState, NUL, Platform, RS, SOH,
            SPECIAL_DELETE_CODE, SPECIAL_END_FINAL, SPECIAL_HOME_FINAL,
            SPECIAL_INSERT_CODE, SPECIAL_PAGE_DOWN_CODE, SPECIAL_PAGE_UP_CODE,
            SS3_F1_FINAL, SS3_F2_FINAL, SS3_F3_FINAL, SS3_F4_FINAL, SS3_O, US,
            WORD_BACKWARD_FINAL, WORD_FORWARD_FINAL};

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEventEncoder {
    config: KeyEncoderConfig,
}

impl KeyEventEncoder {
    #[must_use]
    pub fn new(config: KeyEncoderConfig) -> Self { Self { config } }

    #[must_use]
    pub fn config(&self) -> &KeyEncoderConfig { &self.config }

    pub fn set_application_cursor_keys(&mut self, enabled: bool) {
        self.config.application_cursor_keys = enabled;
    }

    pub fn set_application_keypad(&mut self, enabled: bool) {
        self.config.application_keypad = enabled;
    }

    pub fn set_auto_new_line(&mut self, enabled: bool) {
        self.config.auto_new_line = enabled;
    }

    pub fn set_alt_sends_escape(&mut self, enabled: bool) {
        self.config.alt_sends_escape = enabled;
    }

    pub fn set_meta_sends_escape(&mut self, enabled: bool) {
        self.config.meta_sends_escape = enabled;
    }

    /// Returns [`None`] for keys with no terminal representation, such as Ctrl+1 or
    /// F13.
    #[must_use]
    pub fn encode(&self, event: &KeyEvent) -> Option<Vec<u8>> {
        let KeyEvent { code, modifiers } = *event;

        if let KeyCode::Char(ch) = code {
            return self.encode_char(ch, modifiers);
        }

        if let Some(bytes) = self.exact_entry(code, modifiers) {
            return Some(bytes);
        }

        let base = self.unmodified_entry(code)?;

        if self.sends_escape_prefix(code, modifiers) {
            let rest = self.encode(&KeyEvent::new(
                code,
                modifiers.without_escape_modifiers(),
            ))?;
            let mut bytes = Vec::with_capacity(rest.len() + 1);
            bytes.push(ESC);
            bytes.extend(rest);
            return Some(bytes);
        }

        if code.is_cursor_key() || code.is_function_key() {
            return Some(insert_modifier_param(base, modifiers));
        }

        Some(base)
    }

    /// Printable keys. Ctrl maps letters and a few symbols to C0 bytes, Alt and Meta
    /// prefix ESC when configured to.
    #[must_use]
    pub fn encode_char(&self, ch: char, modifiers: ModifierState) -> Option<Vec<u8>> {
        let mut bytes = Vec::with_capacity(5);

        let escape_prefix = (modifiers.alt && self.config.alt_sends_escape)
            || (modifiers.meta && self.config.meta_sends_escape);
        if escape_prefix {
            bytes.push(ESC);
        }

        if modifiers.ctrl {
            bytes.push(ctrl_code(ch)?);
        } else {
            let mut buffer = [0_u8; 4];
            bytes.extend_from_slice(ch.encode_utf8(&mut buffer).as_bytes());
        }

        Some(bytes)
    }

    fn sends_escape_prefix(&self, code: KeyCode, modifiers: ModifierState) -> bool {
        let always = code.is_cursor_key() || code == KeyCode::Backspace;
        (modifiers.alt && (self.config.alt_sends_escape || always))
            || (modifiers.meta && (self.config.meta_sends_escape || always))
    }

    /// Bindings that only exist for one specific modifier combination.
    fn exact_entry(&self, code: KeyCode, modifiers: ModifierState) -> Option<Vec<u8>> {
        let is_mac = self.config.platform == Platform::MacOs;
        match (code, modifiers) {
            (KeyCode::Tab, ModifierState::SHIFT) => {
                Some(vec![ESC, CSI_BRACKET, BACKTAB_FINAL])
            }
            (KeyCode::Backspace, ModifierState::CTRL) => Some(vec![BS]),
            // Word motion the way macOS line editors expect it.
            (KeyCode::Left, ModifierState::ALT) if is_mac => {
                Some(vec![ESC, WORD_BACKWARD_FINAL])
            }
            (KeyCode::Right, ModifierState::ALT) if is_mac => {
                Some(vec![ESC, WORD_FORWARD_FINAL])
            }
            (KeyCode::Left, ModifierState::META) if is_mac => Some(vec![SOH]),
            (KeyCode::Right, ModifierState::META) if is_mac => Some(vec![ENQ]),
            (KeyCode::Left, ModifierState::CTRL) if !is_mac => {
                Some(insert_modifier_param(csi(ARROW_LEFT_FINAL), modifiers))
            }
            (KeyCode::Right, ModifierState::CTRL) if !is_mac => {
                Some(insert_modifier_param(csi(ARROW_RIGHT_FINAL), modifiers))
            }
            _ => None,
        }
    }

    fn unmodified_entry(&self, code: KeyCode) -> Option<Vec<u8>> {
        let cursor = |final_byte| {
            if self.config.application_cursor_keys {
                ss3(final_byte)
            } else {
                csi(final_byte)
            }
        };
        let keypad = |final_byte| {
            if self.config.application_keypad {
                ss3(final_byte)
            } else {
                csi(final_byte)
            }
        };

        match code {
            KeyCode::Enter => Some(if self.config.auto_new_line {
                vec![CR, LF]
            } else {
                vec![CR]
            }),
            KeyCode::Tab => Some(vec![HT]),
            KeyCode::Backspace => Some(vec![DEL]),
            KeyCode::Escape => Some(vec![ESC]),
            KeyCode::Up => Some(cursor(ARROW_UP_FINAL)),
            KeyCode::Down => Some(cursor(ARROW_DOWN_FINAL)),
            KeyCode::Right => Some(cursor(ARROW_RIGHT_FINAL)),
            KeyCode::Left => Some(cursor(ARROW_LEFT_FINAL)),
            KeyCode::KeypadUp => Some(keypad(ARROW_UP_FINAL)),
            KeyCode::KeypadDown => Some(keypad(ARROW_DOWN_FINAL)),
            KeyCode::KeypadRight => Some(keypad(ARROW_RIGHT_FINAL)),
            KeyCode::KeypadLeft => Some(keypad(ARROW_LEFT_FINAL)),
            KeyCode::Home => Some(keypad(SPECIAL_HOME_FINAL)),
            KeyCode::End => Some(keypad(SPECIAL_END_FINAL)),
            KeyCode::Insert => Some(csi_tilde(SPECIAL_INSERT_CODE)),
            KeyCode::Delete => Some(csi_tilde(SPECIAL_DELETE_CODE)),
            KeyCode::PageUp => Some(csi_tilde(SPECIAL_PAGE_UP_CODE)),
            KeyCode::PageDown => Some(csi_tilde(SPECIAL_PAGE_DOWN_CODE)),
            KeyCode::Function(n) => function_key(n),
            KeyCode::Char(_) => None,
        }
    }
}

/// `ESC [ final`.
fn csi(final_byte: u8) -> Vec<u8> { vec![ESC, CSI_BRACKET, final_byte] }

/// `ESC O final`.
fn ss3(final_byte: u8) -> Vec<u8> { vec![ESC, SS3_O, final_byte] }

/// `ESC [ code ~`.
fn csi_tilde(code: u16) -> Vec<u8> {
    let mut bytes = vec![ESC, CSI_BRACKET];
    bytes.extend_from_slice(code.to_string().as_bytes());
    bytes.push(FUNCTION_KEY_TERMINATOR);
    bytes
}

fn function_key(n: u8) -> Option<Vec<u8>> {
    let code = match n {
        1 => return Some(ss3(SS3_F1_FINAL)),
        2 => return Some(ss3(SS3_F2_FINAL)),
        3 => return Some(ss3(SS3_F3_FINAL)),
        4 => return Some(ss3(SS3_F4_FINAL)),
        5 => FUNCTION_F5_CODE,
        6 => FUNCTION_F6_CODE,
        7 => FUNCTION_F7_CODE,
        8 => FUNCTION_F8_CODE,
        9 => FUNCTION_F9_CODE,
        10 => FUNCTION_F10_CODE,
        11 => FUNCTION_F11_CODE,
        12 => FUNCTION_F12_CODE,
        _ => return None,
    };
    Some(csi_tilde(code))
}

/// Insert the xterm modifier parameter before the final byte. `ESC O P` becomes
/// `ESC [ 1 ; m P`, `ESC [ 23 ~` becomes `ESC [ 23 ; m ~`. Unmodified keys and
/// sequences shorter than three bytes are returned untouched.
fn insert_modifier_param(mut bytes: Vec<u8>, modifiers: ModifierState) -> Vec<u8> {
    if modifiers.is_empty() || bytes.len() < 3 {
        return bytes;
    }

    if bytes[0] == ESC && bytes[1] == SS3_O {
        bytes[1] = CSI_BRACKET;
    }

    // No parameters yet means the sequence needs the default one.
    let needs_default_param = bytes.len() == 3;
    let final_part = bytes.split_off(bytes.len() - 1);
    if needs_default_param {
        bytes.push(b'1');
    }
    bytes.push(CSI_PARAM_SEPARATOR);
    bytes.extend_from_slice(modifiers.xterm_modifier_param().to_string().as_bytes());
    bytes.extend(final_part);
    bytes
}

/// Control byte for Ctrl+`ch`, if there is one.
fn ctrl_code(ch: char) -> Option<u8> {
    match ch {
        'a'..='z' | 'A'..='Z' => u8::try_from(ch).ok().map(|b| b & CTRL_LETTER_MASK),
        '@' | ' ' => Some(NUL),
        '[' => Some(ESC),
        '\\' => Some(FS),
        ']' => Some(GS),
        '^' => Some(RS),
        '_' => Some(US),
        '?' => Some(DEL),
        _ => None,
    }
}
