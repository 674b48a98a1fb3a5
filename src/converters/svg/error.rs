use thiserror::Error;

/// Errors that can occur while serializing a scene graph to SVG.
#[derive(Error, Debug)]
pub enum SvgConversionError {
    #[error("Formatting error during SVG generation: {0}")]
    FormatError(#[from] std::fmt::Error),
    #[error("Scene graph JSON could not be decoded: {0}")]
    InvalidScene(#[from] serde_json::Error),
}

/// A specialized Result type for SVG conversion operations.
pub type Result<T> = std::result::Result<T, SvgConversionError>;
