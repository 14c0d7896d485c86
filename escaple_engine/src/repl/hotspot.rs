//! `repl::hotspot` module
//!
//! Handlers that click hotspots in the current room. The outcome of the click
//! itself reaches the player through the message board, which the REPL checks
//! after every command.

use log::info;

use crate::frontend::Frontend;
use crate::spinners::SpinnerType;
use crate::view::{View, ViewItem};
use crate::world::{ClickOutcome, EscapeWorld, NOTHING_THERE};

/// Click a hotspot chosen by number, id or label.
pub fn click_handler(world: &mut EscapeWorld, frontend: &mut dyn Frontend, view: &mut View, target: &str) {
    let Some(index) = world.find_hotspot(target) else {
        info!("no hotspot matching \"{target}\" in \"{}\"", world.current_room().name);
        view.push(ViewItem::Error(
            world.spin_spinner(SpinnerType::NoSuchHotspot, NOTHING_THERE),
        ));
        return;
    };
    report_blocked(world.click(frontend, index), view);
}

/// Click a point in room coordinates.
pub fn click_at_handler(world: &mut EscapeWorld, frontend: &mut dyn Frontend, view: &mut View, x: i32, y: i32) {
    report_blocked(world.click_at(frontend, x, y), view);
}

fn report_blocked(outcome: ClickOutcome, view: &mut View) {
    if outcome.is_blocked() {
        view.push(ViewItem::Error("Finish answering the prompt first.".into()));
    }
}
