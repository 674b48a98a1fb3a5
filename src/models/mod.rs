//! Typed views of the host's scene graph and page snapshot.
//!
//! Everything here is deserialized from host JSON and only ever read by the
//! converters and the plugin session.

pub mod common;
pub mod node;
pub mod page;
pub mod paint;
