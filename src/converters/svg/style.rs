//! Maps a node's fill and stroke information to SVG presentation attributes.

use indexmap::IndexMap;

use super::colors::extract_color;
use crate::models::{common::Scalar, node::SceneNode};

/// Presentation attributes in emission order.
pub type StyleAttributes = IndexMap<&'static str, Scalar>;

/// Builds the `fill*` and `stroke*` attributes for one node.
///
/// Only the first fill and first stroke entry are used; later entries are not
/// stacked. A node without any fill gets `fill="none"`, while a node without
/// any stroke gets no stroke attributes at all.
pub fn map_style(node: &SceneNode) -> StyleAttributes {
    let paint = &node.paint;
    let mut attrs = StyleAttributes::new();

    if let Some(fill) = paint.fills.first() {
        if let Some(color) = extract_color(fill.fill_color.as_ref()) {
            attrs.insert("fill", color.into());
        }
        if let Some(opacity) = fill.fill_opacity {
            attrs.insert("fill-opacity", opacity.into());
        }
    } else if let Some(fill) = &paint.fill {
        if let Some(color) = extract_color(Some(fill)) {
            attrs.insert("fill", color.into());
        }
    } else {
        attrs.insert("fill", "none".into());
    }

    if let Some(stroke) = paint.strokes.first() {
        if let Some(color) = extract_color(stroke.stroke_color.as_ref()) {
            attrs.insert("stroke", color.into());
        }
        if let Some(width) = stroke.stroke_width {
            attrs.insert("stroke-width", width.into());
        }
        if let Some(opacity) = stroke.stroke_opacity {
            attrs.insert("stroke-opacity", opacity.into());
        }
    } else if let Some(stroke) = &paint.stroke {
        if let Some(color) = extract_color(Some(stroke)) {
            attrs.insert("stroke", color.into());
        }
        if let Some(width) = paint.stroke_width {
            attrs.insert("stroke-width", width.into());
        }
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> SceneNode {
        serde_json::from_value(value).unwrap()
    }

    fn pairs(attrs: &StyleAttributes) -> Vec<(&str, String)> {
        attrs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_no_paint_means_fill_none_and_no_stroke() {
        let attrs = map_style(&node(json!({ "type": "rect" })));
        assert_eq!(pairs(&attrs), vec![("fill", "none".to_string())]);
    }

    #[test]
    fn test_first_fill_and_stroke_entries_win() {
        let attrs = map_style(&node(json!({
            "type": "rect",
            "fills": [
                { "fillColor": "#ff0000", "fillOpacity": 0.5 },
                { "fillColor": "#00ff00" }
            ],
            "strokes": [
                { "strokeColor": { "r": 0, "g": 0, "b": 255 }, "strokeWidth": 2, "strokeOpacity": 1 },
                { "strokeColor": "#999" }
            ]
        })));
        assert_eq!(
            pairs(&attrs),
            vec![
                ("fill", "#ff0000".to_string()),
                ("fill-opacity", "0.5".to_string()),
                ("stroke", "rgb(0, 0, 255)".to_string()),
                ("stroke-width", "2".to_string()),
                ("stroke-opacity", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_fill_entry_without_color_emits_no_fill() {
        let attrs = map_style(&node(json!({
            "type": "rect",
            "fills": [{ "fillOpacity": 0.25 }]
        })));
        assert_eq!(pairs(&attrs), vec![("fill-opacity", "0.25".to_string())]);
    }

    #[test]
    fn test_singular_fallbacks() {
        let attrs = map_style(&node(json!({
            "type": "path",
            "fill": { "color": "black" },
            "stroke": "#123456",
            "strokeWidth": 1.5
        })));
        assert_eq!(
            pairs(&attrs),
            vec![
                ("fill", "black".to_string()),
                ("stroke", "#123456".to_string()),
                ("stroke-width", "1.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_fill_list_falls_back_to_singular_fill() {
        let attrs = map_style(&node(json!({
            "type": "rect",
            "fills": [],
            "fill": "#fff"
        })));
        assert_eq!(pairs(&attrs), vec![("fill", "#fff".to_string())]);
    }
}
