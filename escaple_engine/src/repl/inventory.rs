//! `repl::inventory` module
//!
//! Listing and inspecting what the player carries.

use log::info;

use crate::view::{View, ViewItem};
use crate::world::EscapeWorld;

/// Show the full inventory.
pub fn inv_handler(world: &EscapeWorld, view: &mut View) {
    let items = world.session.state.items().to_vec();
    info!("player checked inventory ({} item(s))", items.len());
    view.push(ViewItem::Inventory(items));
}

/// Inspect an item the player holds. The hint goes to the message board.
pub fn inspect_handler(world: &mut EscapeWorld, item: &str) {
    let held = world.inspect_item(item);
    info!("player inspected \"{item}\" (held: {held})");
}
