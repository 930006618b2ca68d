// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runtime configuration for the decoder and the key encoder.
//!
//! Every field has a default, so a config file only needs to name what it changes:
//!
//! ```rust
//! use r3bl_vt_protocol::{Platform, ProtocolConfig};
//!
//! let config = ProtocolConfig::try_from_json_str(
//!     r#"{ "keyboard": { "platform": "mac_os" } }"#,
//! ).unwrap();
//! assert_eq!(config.keyboard.platform, Platform::MacOs);
//! assert!(config.keyboard.alt_sends_escape);
//! assert_eq!(config.decoder.max_csi_params, 32);
//! ```

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Host platform. Selects a handful of platform specific key bindings. Always passed in
/// explicitly, never detected from the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
         Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[default]
    Linux,
    MacOs,
    Windows,
}

/// Bounds on how much input a single sequence may consume before the decoder gives up
/// on it and returns to Ground state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Bytes between `ESC [` and the final byte.
    pub max_csi_bytes: usize,
    pub max_csi_params: usize,
    /// Payload of an OSC or DCS string.
    pub max_string_bytes: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_csi_bytes: 64,
            max_csi_params: 32,
            max_string_bytes: 4096,
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyEncoderConfig {
    pub platform: Platform,
    /// Alt+key sends ESC followed by the key.
    pub alt_sends_escape: bool,
    /// Meta+key sends ESC followed by the key.
    pub meta_sends_escape: bool,
    /// DECCKM: cursor keys send SS3 instead of CSI.
    pub application_cursor_keys: bool,
    /// DECKPAM: keypad arrows, Home and End send SS3.
    pub application_keypad: bool,
    /// LNM: Enter sends CR LF.
    pub auto_new_line: bool,
}

impl Default for KeyEncoderConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            alt_sends_escape: true,
            meta_sends_escape: false,
            application_cursor_keys: false,
            application_keypad: false,
            auto_new_line: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolConfig {
    pub decoder: DecoderConfig,
    pub keyboard: KeyEncoderConfig,
}

/// The configuration text could not be parsed.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("Failed to parse protocol configuration")]
#[diagnostic(
    code(r3bl_vt_protocol::config::parse),
    help("Every field is optional. Check field names and value types.")
)]
pub struct ConfigError(#[source] pub serde_json::Error);

impl ProtocolConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] wrapped in a [`miette::Report`] when the text is not
    /// valid JSON or a field has the wrong type.
    pub fn try_from_json_str(text: &str) -> miette::Result<Self> {
        let config = serde_json::from_str(text).map_err(ConfigError)?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns a [`ConfigError`] if serialization fails.
    pub fn try_to_json_string(&self) -> miette::Result<String> {
        let text = serde_json::to_string_pretty(self).map_err(ConfigError)?;
        Ok(text)
    }
}
