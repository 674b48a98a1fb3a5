//! Color extraction and the per-export color accumulator.

use indexmap::IndexSet;

use super::utils::{format_number, round_half_up};
use crate::models::{paint::Paint, paint::PaintSet};

/// Converts a paint descriptor into a CSS color string.
///
/// Strings and `{color}` objects pass through unchanged. RGB objects become
/// `rgb(R, G, B)`, or `rgba(R, G, B, A)` when an alpha below 1 is present.
/// Channels are rounded but not clamped. Returns `None` for absent or
/// unrecognized input.
pub fn extract_color(paint: Option<&Paint>) -> Option<String> {
    match paint? {
        Paint::Css(color) => Some(color.clone()),
        Paint::Named { color } => Some(color.clone()),
        Paint::Rgba { r, g, b, a } => {
            let r = format_number(round_half_up(*r));
            let g = format_number(round_half_up(*g));
            let b = format_number(round_half_up(*b));
            match a {
                Some(alpha) if *alpha < 1.0 => Some(format!(
                    "rgba({}, {}, {}, {})",
                    r,
                    g,
                    b,
                    format_number(*alpha)
                )),
                _ => Some(format!("rgb({}, {}, {})", r, g, b)),
            }
        }
        Paint::Unrecognized(_) => None,
    }
}

/// Distinct colors seen during one export, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorSet {
    colors: IndexSet<String>,
}

impl ColorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color; returns `false` when it was already present.
    pub fn insert(&mut self, color: String) -> bool {
        self.colors.insert(color)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    /// Collects every color a node carries: all fill entries, all stroke
    /// entries, then the singular fill and stroke fallbacks.
    pub fn collect_from(&mut self, paint: &PaintSet) {
        let fill_colors = paint.fills.iter().map(|fill| fill.fill_color.as_ref());
        let stroke_colors = paint
            .strokes
            .iter()
            .map(|stroke| stroke.stroke_color.as_ref());
        let fallbacks = [paint.fill.as_ref(), paint.stroke.as_ref()];

        for color in fill_colors
            .chain(stroke_colors)
            .chain(fallbacks)
            .filter_map(extract_color)
        {
            self.insert(color);
        }
    }
}
