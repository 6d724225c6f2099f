//! Announcement — the status line a device emits for one operation.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::device::{DeviceKind, PowerAction};
use crate::error::RemoteError;

/// Language used to render announcements.
///
/// Parsed case-insensitively, whether it comes from a string or a
/// deserializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => f.write_str("en"),
            Self::Es => f.write_str("es"),
        }
    }
}

impl FromStr for Language {
    type Err = RemoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(RemoteError::UnknownLanguage(s.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = RemoteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What a device reports after performing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Announcement {
    pub kind: DeviceKind,
    pub action: PowerAction,
}

impl Announcement {
    /// Announcement for `kind` having performed `action`.
    #[must_use]
    pub fn new(kind: DeviceKind, action: PowerAction) -> Self {
        Self { kind, action }
    }

    /// Human-readable status line in the given language.
    #[must_use]
    pub fn render(&self, language: Language) -> &'static str {
        match (language, self.kind, self.action) {
            (Language::En, DeviceKind::Television, PowerAction::On) => "Turning on the television",
            (Language::En, DeviceKind::Television, PowerAction::Off) => {
                "Turning off the television"
            }
            (Language::En, DeviceKind::Radio, PowerAction::On) => "Turning on the radio",
            (Language::En, DeviceKind::Radio, PowerAction::Off) => "Turning off the radio",
            (Language::Es, DeviceKind::Television, PowerAction::On) => "Encendiendo el televisor",
            (Language::Es, DeviceKind::Television, PowerAction::Off) => "Apagando el televisor",
            (Language::Es, DeviceKind::Radio, PowerAction::On) => "Encendiendo la radio",
            (Language::Es, DeviceKind::Radio, PowerAction::Off) => "Apagando la radio",
        }
    }
}
