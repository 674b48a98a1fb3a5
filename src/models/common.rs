use serde::{Deserialize, Serialize};
use std::fmt;

use crate::converters::svg::utils::format_number;

/// A 2D affine matrix as reported by the host, `[a c e; b d f; 0 0 1]`.
/// Every coefficient is optional; missing ones take the identity value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub d: Option<f64>,
    pub e: Option<f64>,
    pub f: Option<f64>,
}

impl Matrix {
    /// Returns the six coefficients with identity defaults applied.
    pub fn coefficients(&self) -> [f64; 6] {
        [
            self.a.unwrap_or(1.0),
            self.b.unwrap_or(0.0),
            self.c.unwrap_or(0.0),
            self.d.unwrap_or(1.0),
            self.e.unwrap_or(0.0),
            self.f.unwrap_or(0.0),
        ]
    }
}

/// Position and size of a node. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Geometry {
    pub fn x(&self) -> f64 {
        self.x.unwrap_or(0.0)
    }

    pub fn y(&self) -> f64 {
        self.y.unwrap_or(0.0)
    }

    pub fn width(&self) -> f64 {
        self.width.unwrap_or(0.0)
    }

    pub fn height(&self) -> f64 {
        self.height.unwrap_or(0.0)
    }
}

/// The view box of an exported document.
///
/// Taken from the root node's own geometry rather than a union of its
/// descendants. Enclosure boards are sized to contain their trays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A presentation value that the host may send either as a number or a string
/// (font weights arrive as `"700"` or `700` depending on the source).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Mirrors the host's truthiness check: zero and empty strings count as unset.
    pub fn is_set(&self) -> bool {
        match self {
            Scalar::Number(n) => *n != 0.0 && !n.is_nan(),
            Scalar::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => f.write_str(&format_number(*n)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}
