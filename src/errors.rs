use thiserror::Error;

use crate::converters::svg::SvgConversionError;

/// Represents errors that can occur while handling messages from the plugin UI.
#[derive(Error, Debug)]
pub enum PluginError {
    /// A payload from the host or the UI could not be decoded.
    #[error("Failed to decode JSON payload: {0}")]
    JsonDeserialization(#[from] serde_json::Error),

    /// The UI sent a message name that is not part of the protocol.
    #[error("Unknown message type: {0}")]
    UnknownMessage(String),

    /// A known message arrived with a payload of the wrong shape.
    #[error("Invalid payload for '{message}': {source}")]
    InvalidPayload {
        message: &'static str,
        source: serde_json::Error,
    },

    /// Serializing the component to SVG failed.
    #[error("SVG export failed: {0}")]
    Export(#[from] SvgConversionError),
}

/// A type alias for `Result<T, PluginError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, PluginError>;
