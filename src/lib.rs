pub mod converters;
pub mod errors;
pub mod models;
pub mod plugin;
pub mod slots;
pub mod wasm;

pub use converters::svg::{component_json_to_svg, component_to_svg};
pub use errors::{PluginError, Result};
pub use models::node::SceneNode;
pub use plugin::PluginSession;
pub use slots::parse_slot_range;
