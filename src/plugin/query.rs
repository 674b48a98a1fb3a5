//! Shape lookup on the host's active page.

use crate::models::page::{PageShape, PageSnapshot, ShapeType};

/// The filters the host's shape search supports.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeFilter {
    ByType(ShapeType),
    /// Name contains the given text.
    NameLike(String),
    /// Name equals the given text.
    Name(String),
}

impl ShapeFilter {
    pub fn matches(&self, shape: &PageShape) -> bool {
        match self {
            ShapeFilter::ByType(shape_type) => shape.shape_type == *shape_type,
            ShapeFilter::NameLike(fragment) => shape.name.contains(fragment.as_str()),
            ShapeFilter::Name(name) => shape.name == *name,
        }
    }
}

/// Finds shapes on the current page.
pub trait ShapeQuery {
    fn find_shapes(&self, filter: &ShapeFilter) -> Vec<&PageShape>;
}

impl ShapeQuery for PageSnapshot {
    fn find_shapes(&self, filter: &ShapeFilter) -> Vec<&PageShape> {
        self.shapes
            .iter()
            .filter(|shape| filter.matches(shape))
            .collect()
    }
}
