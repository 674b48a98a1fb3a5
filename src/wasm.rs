//! JavaScript bindings used by the plugin's sandbox script.
//!
//! Payloads cross the boundary as JSON strings, so the JS side only needs
//! `JSON.stringify` / `JSON.parse`.

use wasm_bindgen::prelude::*;

use crate::converters::svg::component_json_to_svg;
use crate::models::page::PageSnapshot;
use crate::plugin::PluginSession;

/// Installs the panic hook and routes `log` output to the browser console.
/// Safe to call more than once.
#[wasm_bindgen(js_name = initPlugin)]
pub fn init_plugin() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Serializes a component layer tree (host JSON) into an SVG document.
#[wasm_bindgen(js_name = componentToSvg)]
pub fn component_to_svg(scene_json: &str) -> Result<String, JsError> {
    Ok(component_json_to_svg(scene_json)?)
}

/// Parses the slot input. Returns `"null"` when the input should be ignored,
/// otherwise a JSON array of slot numbers (empty to clear the filter).
#[wasm_bindgen(js_name = parseSlotRange)]
pub fn parse_slot_range(value: &str) -> Result<String, JsError> {
    Ok(serde_json::to_string(&crate::slots::parse_slot_range(value))?)
}

/// One plugin panel session, exposed to JS as `PluginSession`.
#[wasm_bindgen(js_name = PluginSession)]
#[derive(Debug, Default)]
pub struct WasmPluginSession {
    inner: PluginSession,
}

#[wasm_bindgen(js_class = PluginSession)]
impl WasmPluginSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a UI message against a snapshot of the current page and
    /// returns the resulting effects as a JSON array.
    pub fn handle(&mut self, notification_json: &str, page_json: &str) -> Result<String, JsError> {
        let page: PageSnapshot = serde_json::from_str(page_json)?;
        let effects = self.inner.handle_json(notification_json, &page)?;
        Ok(serde_json::to_string(&effects)?)
    }

    /// Builds the UI message for a host theme change.
    #[wasm_bindgen(js_name = themeChange)]
    pub fn theme_change(&self, theme: &str) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.theme_change(theme))?)
    }
}
