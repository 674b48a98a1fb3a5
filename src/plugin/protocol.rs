//! The message protocol between the plugin UI and the plugin sandbox.
//!
//! Every message is a JSON object `{ "message": <name>, "data": <payload> }`.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::constants::{THEME_CHANGE_TYPE, THEME_SOURCE};
use crate::errors::{PluginError, Result};

/// A message sent by the UI to the plugin.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    CurrentSelection,
    ListEnclosureOptions,
    /// Carries the name of the chosen enclosure instance. `None` clears it.
    SelectEnclosure(Option<String>),
    /// Carries the parsed slot list. `None` and an empty list both clear it.
    SetRange(Option<Vec<String>>),
    SelectAllDrivetrayHandles,
    SelectionChanged,
    ExportAsSvg,
}

/// Wire form shared by every message.
#[derive(Debug, Deserialize)]
struct RawNotification {
    message: String,
    #[serde(default)]
    data: JsonValue,
}

impl Notification {
    /// The protocol name of this message.
    pub fn name(&self) -> &'static str {
        match self {
            Notification::CurrentSelection => "current-selection",
            Notification::ListEnclosureOptions => "list-enclosure-options",
            Notification::SelectEnclosure(_) => "select-enclosure",
            Notification::SetRange(_) => "set-range",
            Notification::SelectAllDrivetrayHandles => "select-all-drivetray-handles",
            Notification::SelectionChanged => "selection-changed",
            Notification::ExportAsSvg => "export-as-svg",
        }
    }

    /// Decodes a UI message, rejecting unknown message names.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawNotification = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawNotification) -> Result<Self> {
        let notification = match raw.message.as_str() {
            "current-selection" => Notification::CurrentSelection,
            "list-enclosure-options" => Notification::ListEnclosureOptions,
            "select-enclosure" => {
                Notification::SelectEnclosure(payload("select-enclosure", raw.data)?)
            }
            "set-range" => Notification::SetRange(payload("set-range", raw.data)?),
            "select-all-drivetray-handles" => Notification::SelectAllDrivetrayHandles,
            "selection-changed" => Notification::SelectionChanged,
            "export-as-svg" => Notification::ExportAsSvg,
            other => return Err(PluginError::UnknownMessage(other.to_string())),
        };
        Ok(notification)
    }
}

fn payload<T: serde::de::DeserializeOwned>(message: &'static str, data: JsonValue) -> Result<T> {
    serde_json::from_value(data).map_err(|source| PluginError::InvalidPayload { message, source })
}

/// A message sent by the plugin to the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "message", content = "data", rename_all = "kebab-case")]
pub enum OutboundMessage {
    /// Names of the enclosure instances on the current page.
    EnclosureOptions(Vec<String>),
    /// An exported SVG document for the UI to place on the clipboard.
    CopyToClipboard(String),
}

/// Forwarded host theme change: `{ "source": "penpot", "type": "themechange", "theme": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeNotice {
    pub source: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub theme: String,
}

impl ThemeNotice {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            source: THEME_SOURCE,
            kind: THEME_CHANGE_TYPE,
            theme: theme.into(),
        }
    }
}

/// Something the host must do in response to a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "kebab-case")]
pub enum Effect {
    /// Post a message to the UI.
    Send { message: OutboundMessage },
    /// Replace the host's selection with the shapes having these ids.
    Select { ids: Vec<String> },
}
