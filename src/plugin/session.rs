//! The plugin session: holds the enclosure configuration for one open panel
//! and turns UI messages into host effects.

use log::{debug, info, warn};

use super::{
    enclosure::{list_enclosures, select_drivetray_handles, EnclosureConfig},
    protocol::{Effect, Notification, OutboundMessage, ThemeNotice},
    query::{ShapeFilter, ShapeQuery},
};
use crate::converters::svg::component_to_svg;
use crate::errors::Result;

/// State and message handling for one plugin panel.
#[derive(Debug, Default)]
pub struct PluginSession {
    config: EnclosureConfig,
}

impl PluginSession {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current enclosure and slot choice.
    pub fn config(&self) -> &EnclosureConfig {
        &self.config
    }

    /// Handles one UI message against the current page.
    ///
    /// Returns the effects the host should apply, in order. Messages that
    /// only update state, or whose preconditions fail, produce no effects.
    pub fn handle<Q: ShapeQuery + ?Sized>(
        &mut self,
        notification: Notification,
        page: &Q,
    ) -> Result<Vec<Effect>> {
        debug!("Handling '{}'", notification.name());

        let effects = match notification {
            Notification::CurrentSelection => Vec::new(),
            Notification::ListEnclosureOptions => {
                let names = list_enclosures(page)
                    .into_iter()
                    .map(|shape| shape.name.clone())
                    .collect();
                vec![Effect::Send {
                    message: OutboundMessage::EnclosureOptions(names),
                }]
            }
            Notification::SelectEnclosure(name) => {
                info!("Selected enclosure {:?}", name);
                self.config.selected_enclosure = name;
                Vec::new()
            }
            Notification::SetRange(slots) => {
                self.config.slot_list = slots.unwrap_or_default();
                info!("Slot filter set to {:?}", self.config.slot_list);
                Vec::new()
            }
            Notification::SelectAllDrivetrayHandles => {
                let ids = select_drivetray_handles(page, &self.config)
                    .into_iter()
                    .map(|shape| shape.id.clone())
                    .collect();
                vec![Effect::Select { ids }]
            }
            Notification::SelectionChanged => {
                debug!("Selection changed");
                Vec::new()
            }
            Notification::ExportAsSvg => self.export_selected(page)?,
        };

        Ok(effects)
    }

    /// Decodes a UI message and handles it.
    pub fn handle_json<Q: ShapeQuery + ?Sized>(
        &mut self,
        json: &str,
        page: &Q,
    ) -> Result<Vec<Effect>> {
        let notification = Notification::from_json(json).map_err(|e| {
            warn!("Rejected UI message: {}", e);
            e
        })?;
        self.handle(notification, page)
    }

    /// Builds the message forwarding a host theme change to the UI.
    pub fn theme_change(&self, theme: &str) -> ThemeNotice {
        ThemeNotice::new(theme)
    }

    /// Exports the selected enclosure and hands the document to the UI for
    /// the clipboard. Only the root board of a component instance qualifies;
    /// anything else is logged and produces no message.
    fn export_selected<Q: ShapeQuery + ?Sized>(&self, page: &Q) -> Result<Vec<Effect>> {
        let Some(name) = self.config.selected_enclosure.as_deref() else {
            warn!("No enclosure selected, nothing to export");
            return Ok(Vec::new());
        };

        let shapes = page.find_shapes(&ShapeFilter::Name(name.to_string()));
        let Some(target) = shapes.first() else {
            warn!("No shape named '{}' on the current page", name);
            return Ok(Vec::new());
        };

        if !target.is_exportable_root() {
            warn!("This is not a component: '{}'", name);
            return Ok(Vec::new());
        }

        let Some(tree) = target.tree.as_ref() else {
            warn!("Component '{}' was sent without its layer tree", name);
            return Ok(Vec::new());
        };

        let svg = component_to_svg(tree)?;
        info!("Exported '{}' ({} bytes of SVG)", name, svg.len());
        Ok(vec![Effect::Send {
            message: OutboundMessage::CopyToClipboard(svg),
        }])
    }
}
