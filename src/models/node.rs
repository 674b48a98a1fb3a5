// src/models/node.rs

use serde::Deserialize;

use crate::models::common::{Geometry, Matrix, Scalar};
use crate::models::paint::{Fill, Paint, PaintSet, Stroke};

/// The kind-specific part of a scene node.
///
/// The host tags nodes with a free-form `type` string. Known tags map to a
/// variant carrying only the fields that kind uses; unknown tags are kept in
/// `Other` so the walker can still descend into their children.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Rect,
    Circle,
    Ellipse,
    Path {
        /// SVG path data.
        content: Option<String>,
    },
    Text {
        text: Option<String>,
        font_size: Option<f64>,
        font_family: Option<String>,
        font_weight: Option<Scalar>,
    },
    Group,
    Frame,
    /// A component instance. Its visual content lives in `component`.
    Instance { component: Option<Box<SceneNode>> },
    /// Any other host type (`board`, `image`, `bool`, ...).
    Other(String),
}

/// A read-only node of the host scene graph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub struct SceneNode {
    pub name: Option<String>,
    /// `None` means visible.
    pub visible: Option<bool>,
    pub transform: Option<Matrix>,
    pub geometry: Geometry,
    pub paint: PaintSet,
    /// Child layers, taken from `children` or, failing that, `objects`.
    pub children: Option<Vec<SceneNode>>,
    pub kind: NodeKind,
}

impl SceneNode {
    /// Builds a node of the given kind with every optional field unset.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            name: None,
            visible: None,
            transform: None,
            geometry: Geometry::default(),
            paint: PaintSet::default(),
            children: None,
            kind,
        }
    }

    /// Only an explicit `visible: false` hides a node.
    pub fn is_hidden(&self) -> bool {
        self.visible == Some(false)
    }

    pub fn name_starts_with(&self, prefix: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| name.starts_with(prefix))
    }
}

/// Wire form of a scene node, as serialized by the host. Only used through
/// `SceneNode`'s `Deserialize` impl.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    #[serde(rename = "type", default)]
    node_type: Option<String>,
    name: Option<String>,
    visible: Option<bool>,
    transform: Option<Matrix>,

    x: Option<f64>,
    y: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,

    fills: Option<Vec<Fill>>,
    strokes: Option<Vec<Stroke>>,
    fill: Option<Paint>,
    stroke: Option<Paint>,
    stroke_width: Option<f64>,

    children: Option<Vec<SceneNode>>,
    objects: Option<Vec<SceneNode>>,
    component: Option<Box<SceneNode>>,

    content: Option<String>,
    text: Option<String>,
    font_size: Option<f64>,
    font_family: Option<String>,
    font_weight: Option<Scalar>,
}

impl From<RawNode> for SceneNode {
    fn from(raw: RawNode) -> Self {
        let kind = match raw.node_type.as_deref() {
            Some("rect") => NodeKind::Rect,
            Some("circle") => NodeKind::Circle,
            Some("ellipse") => NodeKind::Ellipse,
            Some("path") => NodeKind::Path {
                content: raw.content,
            },
            Some("text") => NodeKind::Text {
                text: raw.text,
                font_size: raw.font_size,
                font_family: raw.font_family,
                font_weight: raw.font_weight,
            },
            Some("group") => NodeKind::Group,
            Some("frame") => NodeKind::Frame,
            Some("instance") => NodeKind::Instance {
                component: raw.component,
            },
            Some(other) => NodeKind::Other(other.to_string()),
            None => NodeKind::Other(String::new()),
        };

        SceneNode {
            name: raw.name,
            visible: raw.visible,
            transform: raw.transform,
            geometry: Geometry {
                x: raw.x,
                y: raw.y,
                width: raw.width,
                height: raw.height,
            },
            paint: PaintSet {
                fills: raw.fills.unwrap_or_default(),
                strokes: raw.strokes.unwrap_or_default(),
                fill: raw.fill,
                stroke: raw.stroke,
                stroke_width: raw.stroke_width,
            },
            children: raw.children.or(raw.objects),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_rect_with_fallback_fill() {
        let node: SceneNode = serde_json::from_value(json!({
            "type": "rect", "x": 1, "y": 2, "width": 3, "height": 4, "fill": "#fff"
        }))
        .unwrap();
        assert_eq!(node.kind, NodeKind::Rect);
        assert_eq!(node.geometry.width, Some(3.0));
        assert_eq!(node.paint.fill, Some(Paint::Css("#fff".to_string())));
        assert!(node.children.is_none());
    }

    #[test]
    fn test_objects_used_when_children_missing() {
        let node: SceneNode = serde_json::from_value(json!({
            "type": "board",
            "objects": [{ "type": "rect" }]
        }))
        .unwrap();
        assert_eq!(node.kind, NodeKind::Other("board".to_string()));
        assert_eq!(node.children.map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_children_take_precedence_over_objects() {
        let node: SceneNode = serde_json::from_value(json!({
            "type": "group",
            "children": [{ "type": "rect" }, { "type": "circle" }],
            "objects": [{ "type": "path" }]
        }))
        .unwrap();
        assert_eq!(node.children.map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_instance_keeps_component_subtree() {
        let node: SceneNode = serde_json::from_value(json!({
            "type": "instance",
            "component": { "type": "rect", "name": "handle-1" }
        }))
        .unwrap();
        match node.kind {
            NodeKind::Instance { component: Some(component) } => {
                assert!(component.name_starts_with("handle-"));
            }
            other => panic!("expected instance, got {other:?}"),
        }
    }

    #[test]
    fn test_paint_descriptor_forms() {
        let fills: Vec<Fill> = serde_json::from_value(json!([
            { "fillColor": "#000" },
            { "fillColor": { "color": "red" } },
            { "fillColor": { "r": 1, "g": 2, "b": 3, "a": 0.5 } },
            { "fillColor": [1, 2, 3] },
        ]))
        .unwrap();
        assert_eq!(fills[0].fill_color, Some(Paint::Css("#000".to_string())));
        assert_eq!(
            fills[1].fill_color,
            Some(Paint::Named {
                color: "red".to_string()
            })
        );
        assert!(matches!(
            fills[2].fill_color,
            Some(Paint::Rgba { a: Some(_), .. })
        ));
        assert!(matches!(fills[3].fill_color, Some(Paint::Unrecognized(_))));
    }

    #[test]
    fn test_hidden_only_when_explicitly_false() {
        let mut node = SceneNode::new(NodeKind::Rect);
        assert!(!node.is_hidden());
        node.visible = Some(true);
        assert!(!node.is_hidden());
        node.visible = Some(false);
        assert!(node.is_hidden());
    }
}
