use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A fill or stroke color as the host describes it.
///
/// The host is inconsistent about the shape of color values, so all three
/// known forms are accepted and anything else is kept as `Unrecognized`
/// instead of failing the whole scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    /// A CSS color string, used verbatim (e.g. `"#1f2937"`).
    Css(String),
    /// An object carrying a CSS color in its `color` field.
    Named { color: String },
    /// Numeric channels in `[0, 255]` with an optional alpha in `[0, 1]`.
    Rgba {
        r: f64,
        g: f64,
        b: f64,
        #[serde(default)]
        a: Option<f64>,
    },
    /// Any other value. Extraction yields no color for it.
    Unrecognized(JsonValue),
}

/// One entry of a shape's `fills` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub fill_color: Option<Paint>,
    pub fill_opacity: Option<f64>,
}

/// One entry of a shape's `strokes` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub stroke_color: Option<Paint>,
    pub stroke_width: Option<f64>,
    pub stroke_opacity: Option<f64>,
}

/// All paint information attached to a node: the fill/stroke lists plus the
/// singular fallbacks some shapes carry instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintSet {
    pub fills: Vec<Fill>,
    pub strokes: Vec<Stroke>,
    pub fill: Option<Paint>,
    pub stroke: Option<Paint>,
    pub stroke_width: Option<f64>,
}
