//! Handles the conversion of individual scene nodes (rect, circle, ellipse,
//! path, text, group/frame) into their SVG markup.

use log::debug;

use super::{
    colors::ColorSet,
    constants::*,
    error::Result,
    structure::walk,
    style::{map_style, StyleAttributes},
    utils::{
        attrs_to_string, compose_transform, escape_attribute, escape_svg_text, format_number,
    },
};
use crate::models::{
    common::Geometry,
    node::{NodeKind, SceneNode},
};
use std::fmt::Write;

/// Treats zero and NaN like a missing value, as the host's `||` defaults do.
fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Circle radius: half the width, or half the height when there is no width.
fn circle_radius(geometry: &Geometry) -> f64 {
    non_zero(geometry.width)
        .or_else(|| non_zero(geometry.height))
        .unwrap_or(0.0)
        / 2.0
}

/// Converts one node into markup under the inherited transform list.
///
/// Hidden nodes produce nothing. Visible nodes first contribute their colors
/// to `colors`. Kinds without a drawing (instances, boards, images, ...)
/// produce an empty fragment rather than an error.
pub(crate) fn render_shape(
    node: &SceneNode,
    parent_transform: &str,
    colors: &mut ColorSet,
) -> Result<String> {
    if node.is_hidden() {
        debug!(
            "Skipping hidden node '{}'",
            node.name.as_deref().unwrap_or_default()
        );
        return Ok(String::new());
    }

    colors.collect_from(&node.paint);

    let is_handle = node.name_starts_with(HANDLE_PREFIX);
    let mut attrs = map_style(node);
    if is_handle {
        attrs.insert("class", TINT_TARGET_CLASS.into());
    }

    let transform = compose_transform(parent_transform, node.transform.as_ref());
    let trimmed_transform = transform.trim();
    if !trimmed_transform.is_empty() {
        attrs.insert("transform", trimmed_transform.into());
    }

    let geometry = &node.geometry;
    let x = geometry.x();
    let y = geometry.y();
    let mut svg_output = String::new();

    match &node.kind {
        NodeKind::Rect => {
            write!(
                svg_output,
                r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
                format_number(x),
                format_number(y),
                format_number(geometry.width()),
                format_number(geometry.height()),
                attrs_to_string(&attrs)?
            )?;
        }
        NodeKind::Circle => {
            let radius = circle_radius(geometry);
            write!(
                svg_output,
                r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
                format_number(x + radius),
                format_number(y + radius),
                format_number(radius),
                attrs_to_string(&attrs)?
            )?;
        }
        NodeKind::Ellipse => {
            let rx = geometry.width() / 2.0;
            let ry = geometry.height() / 2.0;
            write!(
                svg_output,
                r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"{}/>"#,
                format_number(x + rx),
                format_number(y + ry),
                format_number(rx),
                format_number(ry),
                attrs_to_string(&attrs)?
            )?;
        }
        NodeKind::Path { content } => match content.as_deref() {
            Some(data) if !data.is_empty() => {
                write!(
                    svg_output,
                    r#"<path d="{}"{}/>"#,
                    escape_attribute(data),
                    attrs_to_string(&attrs)?
                )?;
            }
            _ => debug!("Path without content dropped"),
        },
        NodeKind::Text {
            text,
            font_size,
            font_family,
            font_weight,
        } => {
            let font_size = non_zero(*font_size);
            if let Some(size) = font_size {
                attrs.insert("font-size", size.into());
            }
            if let Some(family) = font_family.as_deref().filter(|f| !f.is_empty()) {
                attrs.insert("font-family", family.into());
            }
            if let Some(weight) = font_weight.as_ref().filter(|w| w.is_set()) {
                attrs.insert("font-weight", weight.clone());
            }
            write!(
                svg_output,
                r#"<text x="{}" y="{}"{}>{}</text>"#,
                format_number(x),
                format_number(y + font_size.unwrap_or(DEFAULT_FONT_SIZE)),
                attrs_to_string(&attrs)?,
                escape_svg_text(text.as_deref().unwrap_or_default())
            )?;
        }
        NodeKind::Group | NodeKind::Frame => {
            // Groups only carry placement and the handle marker, never paint.
            let mut group_attrs = StyleAttributes::new();
            if !trimmed_transform.is_empty() {
                group_attrs.insert("transform", trimmed_transform.into());
            }
            if is_handle {
                group_attrs.insert("class", TINT_TARGET_CLASS.into());
            }

            let mut children_markup = String::new();
            for child in node.children.as_deref().unwrap_or_default() {
                children_markup.push_str(&walk(child, &transform, colors)?);
            }
            write!(
                svg_output,
                "<g{}>{}</g>",
                attrs_to_string(&group_attrs)?,
                children_markup
            )?;
        }
        NodeKind::Instance { .. } | NodeKind::Other(_) => {
            debug!(
                "No markup for node '{}' of kind {:?}",
                node.name.as_deref().unwrap_or_default(),
                node.kind
            );
        }
    }

    Ok(svg_output)
}
