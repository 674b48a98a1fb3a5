//! Converts a component instance's layer tree into a standalone SVG snippet.
//!
//! This module provides the entry points `component_to_svg` and
//! `component_json_to_svg` and organizes the conversion logic into submodules.
//!
//! # Current Features & Limitations:
//! *   Renders rectangles, circles, ellipses, paths, text and groups/frames.
//! *   Component instances are followed transparently to their component subtree.
//! *   Uses the first fill and first stroke of each shape; multi-fill stacking is not modelled.
//! *   Layers named `handle-*` are tagged with the `tint-target` class.
//! *   Every distinct color is listed as a `.color-N` rule in the stylesheet.
//! *   The view box is the root's own geometry, not a tight bound of its content.

// Declare the submodules
mod colors;
mod constants;
mod elements;
mod error;
mod structure;
mod style;
pub(crate) mod utils;

pub use colors::{extract_color, ColorSet};
pub use constants::{HANDLE_PREFIX, TINT_TARGET_CLASS};
pub use error::{Result, SvgConversionError};
pub use style::{map_style, StyleAttributes};

use crate::models::node::SceneNode;
use log::debug;

/// Serializes `root` and everything beneath it into an SVG document string.
///
/// Each call uses its own color accumulator; nothing is shared between calls.
/// Unsupported node kinds are skipped, so one odd layer never blanks the
/// whole export.
///
/// # Errors
/// Returns `SvgConversionError::FormatError` only if writing to the output
/// buffer fails.
pub fn component_to_svg(root: &SceneNode) -> Result<String> {
    debug!(
        "Converting component '{}' to SVG",
        root.name.as_deref().unwrap_or_default()
    );
    structure::convert_component_to_svg(root)
}

/// Decodes a scene graph from the host's JSON and serializes it to SVG.
pub fn component_json_to_svg(json: &str) -> Result<String> {
    let root: SceneNode = serde_json::from_str(json)?;
    component_to_svg(&root)
}
