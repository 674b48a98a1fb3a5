//! Handles the overall structure of the export: walking the layer tree and
//! assembling the final document around the walked markup.

use super::{
    colors::ColorSet,
    constants::*,
    elements::render_shape,
    error::Result,
    utils::format_number,
};
use crate::models::{
    common::BoundingBox,
    node::{NodeKind, SceneNode},
};
use std::fmt::Write;

/// Recursively converts a layer tree into markup.
///
/// Instances are transparent: their component subtree is walked under the
/// same transform. Any node with a child list is replaced by its children,
/// also under the same transform (the node's own matrix is not added here).
/// Everything else goes to the shape renderer.
pub(crate) fn walk(
    node: &SceneNode,
    parent_transform: &str,
    colors: &mut ColorSet,
) -> Result<String> {
    if let NodeKind::Instance {
        component: Some(component),
    } = &node.kind
    {
        return walk(component, parent_transform, colors);
    }

    if let Some(children) = &node.children {
        let mut markup = String::new();
        for child in children {
            markup.push_str(&walk(child, parent_transform, colors)?);
        }
        return Ok(markup);
    }

    render_shape(node, parent_transform, colors)
}

/// The view box is the root's own geometry. Missing or zero sizes fall back
/// to `DEFAULT_VIEWBOX_SIZE`.
pub(crate) fn bounding_box(root: &SceneNode) -> BoundingBox {
    let size = |value: Option<f64>| {
        value
            .filter(|v| *v != 0.0 && !v.is_nan())
            .unwrap_or(DEFAULT_VIEWBOX_SIZE)
    };
    BoundingBox {
        x: root.geometry.x(),
        y: root.geometry.y(),
        width: size(root.geometry.width),
        height: size(root.geometry.height),
    }
}

/// Writes one `.color-N` rule per collected color, then the handle rule.
///
/// The color classes describe the palette for downstream consumers; the
/// markup itself keeps its inline `fill`/`stroke` attributes.
pub(crate) fn write_stylesheet(svg_output: &mut String, colors: &ColorSet) -> Result<()> {
    writeln!(svg_output, "  <style>")?;
    for (index, color) in colors.iter().enumerate() {
        writeln!(
            svg_output,
            "    .{}{} {{ fill: {}; }}",
            COLOR_CLASS_PREFIX, index, color
        )?;
    }
    writeln!(
        svg_output,
        "    .{} {{ /* Special class for handle layers */ }}",
        TINT_TARGET_CLASS
    )?;
    writeln!(svg_output, "  </style>")?;
    Ok(())
}

/// Converts a component instance's layer tree into a standalone SVG document.
pub(crate) fn convert_component_to_svg(root: &SceneNode) -> Result<String> {
    let mut colors = ColorSet::new();
    let content = walk(root, "", &mut colors)?;
    let bbox = bounding_box(root);

    let mut svg_output = String::new();
    let width = format_number(bbox.width);
    let height = format_number(bbox.height);
    writeln!(
        svg_output,
        r#"<svg xmlns="{}" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        SVG_NAMESPACE,
        format_number(bbox.x),
        format_number(bbox.y),
        width,
        height,
        width,
        height
    )?;
    write_stylesheet(&mut svg_output, &colors)?;
    writeln!(svg_output, "  {}", content)?;
    write!(svg_output, "</svg>")?;

    Ok(svg_output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> SceneNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_instance_is_transparent() {
        let rect = json!({
            "type": "rect", "x": 0, "y": 0, "width": 10, "height": 10, "fill": "#000"
        });
        let instance = node(json!({ "type": "instance", "component": rect.clone() }));

        let mut direct_colors = ColorSet::new();
        let direct = walk(&node(rect), "", &mut direct_colors).unwrap();
        let mut wrapped_colors = ColorSet::new();
        let wrapped = walk(&instance, "", &mut wrapped_colors).unwrap();

        assert_eq!(direct, wrapped);
        assert_eq!(direct_colors, wrapped_colors);
    }

    #[test]
    fn test_instance_without_component_renders_nothing() {
        let mut colors = ColorSet::new();
        let markup = walk(&node(json!({ "type": "instance" })), "", &mut colors).unwrap();
        assert_eq!(markup, "");
    }

    #[test]
    fn test_node_with_children_ignores_own_transform_and_paint() {
        let tree = node(json!({
            "type": "group",
            "fill": "#abc",
            "transform": { "e": 50 },
            "children": [
                { "type": "rect", "width": 1, "height": 1 },
                { "type": "circle", "width": 2 }
            ]
        }));
        let mut colors = ColorSet::new();
        let markup = walk(&tree, "", &mut colors).unwrap();
        assert_eq!(
            markup,
            concat!(
                r#"<rect x="0" y="0" width="1" height="1" fill="none"/>"#,
                r#"<circle cx="1" cy="1" r="1" fill="none"/>"#
            )
        );
        assert!(colors.is_empty());
    }

    #[test]
    fn test_hidden_group_still_emits_children() {
        let tree = node(json!({
            "type": "group",
            "visible": false,
            "children": [{ "type": "rect", "fill": "#fff" }]
        }));
        let mut colors = ColorSet::new();
        let markup = walk(&tree, "", &mut colors).unwrap();
        assert!(markup.starts_with("<rect"));
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn test_bounding_box_defaults() {
        assert_eq!(
            bounding_box(&node(json!({ "type": "board" }))),
            BoundingBox {
                x: 0.0,
                y: 0.0,
                width: 100.0,
                height: 100.0
            }
        );
        assert_eq!(
            bounding_box(&node(json!({
                "type": "board", "x": 5, "y": -3, "width": 0, "height": 40
            }))),
            BoundingBox {
                x: 5.0,
                y: -3.0,
                width: 100.0,
                height: 40.0
            }
        );
    }

    #[test]
    fn test_document_without_colors_only_has_handle_rule() {
        let tree = node(json!({
            "type": "board",
            "width": 20,
            "height": 10,
            "children": [{ "type": "text", "text": "empty" }]
        }));
        let svg = convert_component_to_svg(&tree).unwrap();
        let expected = concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 10" width="20" height="10">"#,
            "\n  <style>\n",
            "    .tint-target { /* Special class for handle layers */ }\n",
            "  </style>\n",
            r#"  <text x="0" y="16" fill="none">empty</text>"#,
            "\n</svg>"
        );
        assert_eq!(svg, expected);
    }

    #[test]
    fn test_stylesheet_lists_colors_in_first_seen_order() {
        let tree = node(json!({
            "type": "board",
            "children": [
                { "type": "rect", "fills": [{ "fillColor": "#111" }, { "fillColor": "#222" }] },
                { "type": "rect", "strokes": [{ "strokeColor": "#111" }] },
                { "type": "rect", "fill": { "r": 0, "g": 128, "b": 0 } }
            ]
        }));
        let svg = convert_component_to_svg(&tree).unwrap();
        let style_block: Vec<&str> = svg
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with('.'))
            .collect();
        assert_eq!(
            style_block,
            vec![
                ".color-0 { fill: #111; }",
                ".color-1 { fill: #222; }",
                ".color-2 { fill: rgb(0, 128, 0); }",
                ".tint-target { /* Special class for handle layers */ }",
            ]
        );
        // Classes are descriptive only; shapes keep inline paint.
        assert!(!svg.contains(r#"class="color-"#));
    }
}
