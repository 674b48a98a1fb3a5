//! Utility functions for SVG conversion: escaping, number formatting and
//! attribute serialization.

use super::{error::Result, style::StyleAttributes};
use crate::models::common::Matrix;
use std::fmt::Write;

// --- Text Escaping ---

/// Escapes special XML characters (`&`, `<`, `>`) for use in SVG text content.
pub fn escape_svg_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes a value for use inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}

// --- Numbers ---

/// Formats a number the way the host prints it: integers without a fraction,
/// everything else in shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Also folds negative zero.
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    format!("{}", value)
}

/// Rounds to the nearest integer with halves rounding up (`-0.5` becomes `0`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// --- Attributes ---

/// Serializes attributes as ` key="value"` pairs in insertion order.
/// Returns an empty string when there are none.
pub fn attrs_to_string(attrs: &StyleAttributes) -> Result<String> {
    let mut out = String::new();
    for (key, value) in attrs {
        write!(out, r#" {}="{}""#, key, escape_attribute(&value.to_string()))?;
    }
    Ok(out)
}

// --- Transformation ---

/// Appends a `matrix(a, b, c, d, e, f)` term for `matrix` to an inherited
/// transform list. The result is untrimmed; callers trim before emitting.
pub fn compose_transform(parent: &str, matrix: Option<&Matrix>) -> String {
    match matrix {
        Some(m) => {
            let [a, b, c, d, e, f] = m.coefficients().map(format_number);
            format!("{} matrix({}, {}, {}, {}, {}, {})", parent, a, b, c, d, e, f)
        }
        None => parent.to_string(),
    }
}
