use serde::{Deserialize, Serialize};

use crate::models::node::SceneNode;

/// Top-level shape types reported by the host's shape API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeType {
    Board,
    Group,
    Rectangle,
    Ellipse,
    Path,
    Text,
    Image,
    #[serde(other)]
    Other,
}

/// The component a shape instantiates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRef {
    pub name: String,
}

/// The component head a shape belongs to, with the names of the head's
/// ancestors ordered nearest first (parent, grandparent, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentHead {
    pub name: String,
    #[serde(default)]
    pub ancestors: Vec<String>,
}

impl ComponentHead {
    /// Name of the ancestor `depth` levels above the head (1 = parent).
    pub fn ancestor(&self, depth: usize) -> Option<&str> {
        depth
            .checked_sub(1)
            .and_then(|index| self.ancestors.get(index))
            .map(String::as_str)
    }
}

/// One shape of the active page, flattened by the host into the fields the
/// plugin needs for querying and exporting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageShape {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    #[serde(default)]
    pub component_instance: bool,
    #[serde(default)]
    pub component_root: bool,
    pub component: Option<ComponentRef>,
    pub component_head: Option<ComponentHead>,
    /// The shape's visual subtree, present for shapes that can be exported.
    pub tree: Option<SceneNode>,
}

impl PageShape {
    /// Only the root board of a component instance can be exported.
    pub fn is_exportable_root(&self) -> bool {
        self.component_instance && self.shape_type == ShapeType::Board && self.component_root
    }
}

/// The host's current page, as a flat list of shapes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub shapes: Vec<PageShape>,
}
