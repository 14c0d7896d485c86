//! Development mode command handlers.
//!
//! Only reachable when the engine is built with the `dev-mode` feature. Dev
//! commands log at `warn` level so test sessions leave an audit trail.

use log::warn;

use crate::view::{View, ViewItem};
use crate::world::EscapeWorld;

/// List every flag the state store knows about (DEV_MODE only).
pub fn dev_list_flags_handler(world: &EscapeWorld, view: &mut View) {
    let flags: Vec<(String, bool)> = world
        .session
        .state
        .flags()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    warn!("DEV_MODE: listed {} flag(s)", flags.len());
    view.push(ViewItem::FlagList(flags));
}
