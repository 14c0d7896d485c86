//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change the current room

use log::info;

use crate::frontend::Frontend;
use crate::repl::describe_room;
use crate::view::{View, ViewItem};
use crate::world::EscapeWorld;

/// Which way to cycle through the rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Move to the neighboring room and describe it.
pub fn move_handler(world: &mut EscapeWorld, frontend: &mut dyn Frontend, view: &mut View, direction: Direction) {
    let moved = match direction {
        Direction::Next => world.next_room(frontend),
        Direction::Prev => world.prev_room(frontend),
    };
    if moved {
        info!("player moved {direction:?} to \"{}\"", world.current_room().name);
        describe_room(world, view);
    } else {
        view.push(ViewItem::Error("Finish answering the prompt first.".into()));
    }
}
