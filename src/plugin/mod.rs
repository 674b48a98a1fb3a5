//! The plugin side of the enclosure utilities: the message protocol, shape
//! lookup, enclosure/handle discovery and the per-panel session.

pub mod constants;
pub mod enclosure;
pub mod protocol;
pub mod query;
pub mod session;

pub use enclosure::{list_enclosures, select_drivetray_handles, EnclosureConfig};
pub use protocol::{Effect, Notification, OutboundMessage, ThemeNotice};
pub use query::{ShapeFilter, ShapeQuery};
pub use session::PluginSession;
