//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that drive the [`EscapeWorld`]. Handlers
//! queue output on the [`View`]; the loop then adds whatever the message
//! board and inventory bar picked up during the turn, and flushes.

pub mod dev;
mod input;
pub mod hotspot;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;
pub mod terminal;

pub use dev::*;
pub use hotspot::*;
pub use input::{InputEvent, InputManager};
pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use system::*;
pub use terminal::TerminalFrontend;

use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::command::{Command, parse_command};
use crate::loader::help::HelpData;
use crate::spinners::SpinnerType;
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::EscapeWorld;

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Tracks which message board post the player has already seen.
#[derive(Debug, Default)]
pub struct MessageWatch {
    seen_generation: u64,
}

impl MessageWatch {
    /// Queue the board's message if something new was posted and it is still up.
    pub fn collect(&mut self, world: &mut EscapeWorld, view: &mut View, now: Instant) {
        let board = &mut world.session.messages;
        board.tick(now);
        if board.generation() == self.seen_generation {
            return;
        }
        self.seen_generation = board.generation();
        if let Some(text) = board.visible_at(now) {
            view.push(ViewItem::Message(text.to_string()));
        }
    }
}

/// Run one parsed command against the world.
pub fn handle_command(
    world: &mut EscapeWorld,
    frontend: &mut TerminalFrontend,
    view: &mut View,
    help: &HelpData,
    command: &Command,
) -> ReplControl {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    match command {
        Look => look_handler(world, view),
        NextRoom => move_handler(world, frontend, view, Direction::Next),
        PrevRoom => move_handler(world, frontend, view, Direction::Prev),
        Click(target) => click_handler(world, frontend, view, target),
        ClickAt { x, y } => click_at_handler(world, frontend, view, *x, *y),
        Inventory => inv_handler(world, view),
        Inspect(item) => inspect_handler(world, item),
        Help => help_handler(help, view),
        Quit => return quit_handler(world, view),
        // Commands below only available when crate::DEV_MODE is enabled.
        Flags => dev_list_flags_handler(world, view),
        Unknown => view.push(ViewItem::Error(
            world
                .spin_spinner(SpinnerType::UnrecognizedCommand, "Didn't quite catch that?")
                .italic()
                .to_string(),
        )),
    }
    ReplControl::Continue
}

/// Run the main read–eval–print loop until the user quits.
///
/// Prints the intro and first room, then reads commands until `quit` or end of input.
pub fn run_repl(world: &mut EscapeWorld, help: &HelpData) -> Result<()> {
    let mut view = View::new();
    let mut frontend = TerminalFrontend::new(InputManager::new());
    let mut watch = MessageWatch::default();

    if !world.intro.is_empty() {
        view.push(ViewItem::EngineMessage(world.intro.clone()));
    }
    describe_room(world, &mut view);
    view.flush();

    let mut turn = 0usize;
    loop {
        let labels = world.current_room().hotspots.iter().map(|spot| spot.label.clone()).collect();
        frontend.input.set_hotspot_labels(labels);

        let prompt = format!("\n[{}]>> ", world.current_room().name).prompt_style().to_string();
        let input = match frontend.input.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => "quit".to_string(),
            Ok(InputEvent::Interrupted) => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
            Err(err) => {
                info!("input error: {err}");
                view.push(ViewItem::Error("Failed to read input. Try again.".red().to_string()));
                view.flush();
                continue;
            },
        };
        if input.trim().is_empty() {
            continue;
        }

        turn += 1;
        info!("================> BEGIN TURN {turn} <================");
        let command = parse_command(&input);
        info!("command: {command:?}");
        let control = handle_command(world, &mut frontend, &mut view, help, &command);

        watch.collect(world, &mut view, Instant::now());
        if let Some(items) = frontend.take_inventory_redraw() {
            view.push(ViewItem::InventoryBar(items));
        }
        view.flush();

        if let ReplControl::Quit = control {
            break;
        }
    }
    Ok(())
}
