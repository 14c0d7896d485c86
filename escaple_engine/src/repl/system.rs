//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use log::info;

use crate::loader::help::HelpData;
use crate::repl::ReplControl;
use crate::spinners::SpinnerType;
use crate::view::{View, ViewItem};
use crate::world::EscapeWorld;

/// Quit the game.
pub fn quit_handler(world: &EscapeWorld, view: &mut View) -> ReplControl {
    let state = &world.session.state;
    info!("player quit in room \"{}\"", world.current_room().name);
    info!("ending flags:");
    state.flags().for_each(|(name, value)| info!("* {name} = {value}"));
    info!("ending inventory:");
    state.items().iter().for_each(|item| info!("- {item}"));

    view.push(ViewItem::QuitSummary {
        title: world.title.clone(),
        items_found: state.items().len(),
        rooms: world.room_count(),
    });
    view.push(ViewItem::EngineMessage(
        world.spin_spinner(SpinnerType::QuitMsg, "Goodbye!"),
    ));
    ReplControl::Quit
}

/// Show available commands.
pub fn help_handler(help: &HelpData, view: &mut View) {
    view.push(ViewItem::Help {
        basic_text: help.basic_text.clone(),
        commands: help.visible_commands().cloned().collect(),
    });
}
