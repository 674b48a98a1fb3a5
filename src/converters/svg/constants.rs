//! Defines constants used throughout the SVG conversion process.

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

// Layers named with this prefix are drive-tray handles.
pub const HANDLE_PREFIX: &str = "handle-";
// Class attached to handle layers so consumers can tint them.
pub const TINT_TARGET_CLASS: &str = "tint-target";
// Generated stylesheet classes are `color-0`, `color-1`, ...
pub const COLOR_CLASS_PREFIX: &str = "color-";

// Default values used when specific properties are missing.
pub const DEFAULT_FONT_SIZE: f64 = 16.0; // Baseline offset for text without a font size
pub const DEFAULT_VIEWBOX_SIZE: f64 = 100.0; // Width/height of a root without geometry
