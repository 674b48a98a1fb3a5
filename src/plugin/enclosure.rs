//! Enclosure discovery and drive-tray handle selection.

use log::debug;

use super::{
    constants::*,
    query::{ShapeFilter, ShapeQuery},
};
use crate::converters::svg::HANDLE_PREFIX;
use crate::models::page::{PageShape, ShapeType};

/// The user's current enclosure and slot choice for this panel session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnclosureConfig {
    pub selected_enclosure: Option<String>,
    /// Empty means every slot.
    pub slot_list: Vec<String>,
}

/// Whether a board is a top-level enclosure instance.
///
/// It must be an instance (or at least reference a component), the component
/// must be an enclosure, and the shape itself must not be one of the
/// enclosure's own parts.
pub fn is_enclosure(shape: &PageShape) -> bool {
    let is_instance = shape.component_instance || shape.component.is_some();
    let is_enclosure_component = shape
        .component
        .as_ref()
        .is_some_and(|component| component.name.contains(ENCLOSURE_KEYWORD));
    let is_part = EXCLUDED_PART_KEYWORDS
        .iter()
        .any(|keyword| shape.name.contains(keyword));

    is_instance && is_enclosure_component && !is_part
}

/// All enclosure instances on the page, in page order.
pub fn list_enclosures<Q: ShapeQuery + ?Sized>(page: &Q) -> Vec<&PageShape> {
    page.find_shapes(&ShapeFilter::ByType(ShapeType::Board))
        .into_iter()
        .filter(|shape| is_enclosure(shape))
        .collect()
}

/// The enclosure instance a handle belongs to, found through its component head.
fn owning_enclosure(handle: &PageShape) -> Option<&str> {
    handle
        .component_head
        .as_ref()
        .and_then(|head| head.ancestor(ENCLOSURE_ANCESTOR_DEPTH))
}

/// The slot number encoded in a handle's component head name
/// (`drivetray-slot 7` yields `7`).
pub fn tray_slot(handle: &PageShape) -> Option<f64> {
    let head = handle.component_head.as_ref()?;
    let slot = head.name.split(SLOT_NAME_SEPARATOR).nth(1)?;
    slot.trim().parse().ok()
}

/// A tray is in the slot list when exactly one configured slot equals its
/// slot number numerically (`"07"` matches slot 7).
fn slot_selected(slot: f64, slot_list: &[String]) -> bool {
    slot_list
        .iter()
        .filter(|configured| configured.trim().parse::<f64>().ok() == Some(slot))
        .count()
        == 1
}

/// Handles of the selected enclosure, narrowed to the configured slots when
/// a slot list is set.
pub fn select_drivetray_handles<'a, Q: ShapeQuery + ?Sized>(
    page: &'a Q,
    config: &EnclosureConfig,
) -> Vec<&'a PageShape> {
    let handles = page
        .find_shapes(&ShapeFilter::NameLike(HANDLE_PREFIX.to_string()))
        .into_iter()
        .filter(|handle| owning_enclosure(handle) == config.selected_enclosure.as_deref());

    let selected: Vec<&PageShape> = if config.slot_list.is_empty() {
        handles.collect()
    } else {
        handles
            .filter(|handle| {
                tray_slot(handle).is_some_and(|slot| slot_selected(slot, &config.slot_list))
            })
            .collect()
    };

    debug!(
        "Matched {} handles for enclosure {:?} (slots {:?})",
        selected.len(),
        config.selected_enclosure,
        config.slot_list
    );
    selected
}
