//! Terminal input module.
//!
//! Maps `crossterm` key events into [`HostAction`]s. Game commands are passed
//! through to the session; everything else is a lifecycle or audio action.
//! Keys with no mapping are ignored.

pub mod map;

pub use blocktris_types as types;

pub use map::{map_key, should_quit, HostAction};
