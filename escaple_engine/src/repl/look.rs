//! Observation command handlers.
//!
//! - [`look_handler`] - show the current room, its hotspots, and any message still on display
//! - [`describe_room`] - room header and hotspot list, shared with the movement handlers

use log::info;

use crate::view::{HotspotLine, View, ViewItem};
use crate::world::EscapeWorld;

/// Push the current room's header and numbered hotspot list.
pub fn describe_room(world: &EscapeWorld, view: &mut View) {
    let room = world.current_room();
    view.push(ViewItem::RoomHeader {
        number: room.number,
        total: world.room_count(),
        name: room.name.clone(),
        color: room.color,
    });
    view.push(ViewItem::HotspotList(
        room.hotspots
            .iter()
            .enumerate()
            .map(|(i, spot)| HotspotLine {
                number: i + 1,
                label: spot.label.clone(),
            })
            .collect(),
    ));
}

/// Shows the room again, along with the message board if it hasn't timed out.
pub fn look_handler(world: &EscapeWorld, view: &mut View) {
    describe_room(world, view);
    if let Some(text) = world.session.messages.visible() {
        view.push(ViewItem::Message(text.to_string()));
    }
    info!("player looked around \"{}\"", world.current_room().name);
}
