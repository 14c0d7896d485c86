//! Session -- the mutable context every action runs against.
//!
//! Bundles the state store, message board and modal prompt, and owns the
//! side effects that go with inventory changes (a message plus an inventory
//! redraw on the front-end).

use std::time::Duration;

use log::info;

use crate::frontend::Frontend;
use crate::message::{MessageBoard, MessageTimings};
use crate::prompt::ModalPrompt;
use crate::state::{AddOutcome, StateStore};

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub state: StateStore,
    pub messages: MessageBoard,
    pub prompt: ModalPrompt,
    pub timings: MessageTimings,
}

impl Session {
    pub fn new(state: StateStore, timings: MessageTimings) -> Self {
        Self {
            state,
            messages: MessageBoard::new(),
            prompt: ModalPrompt::new(),
            timings,
        }
    }

    /// Show a message for the default duration.
    pub fn show(&mut self, text: &str) {
        self.messages.show(text, self.timings.default);
    }

    pub fn show_for(&mut self, text: &str, duration: Duration) {
        self.messages.show(text, duration);
    }

    /// Put an item in the inventory, announce it, and redraw the inventory.
    pub fn add_item(&mut self, frontend: &mut dyn Frontend, name: &str) -> AddOutcome {
        let outcome = self.state.add_item(name);
        match outcome {
            AddOutcome::Added => {
                info!("inventory + \"{name}\"");
                frontend.render_inventory(self.state.items());
                self.show(&format!("Added: {name}"));
            },
            AddOutcome::AlreadyHeld => {
                self.show(&format!("{name} is already in inventory."));
            },
        }
        outcome
    }

    /// Take an item out of the inventory if held.
    pub fn remove_item(&mut self, frontend: &mut dyn Frontend, name: &str) -> bool {
        let removed = self.state.remove_item(name);
        if removed {
            info!("inventory - \"{name}\"");
            frontend.render_inventory(self.state.items());
        }
        removed
    }

    /// Swap one held item for another in place.
    pub fn replace_item(&mut self, frontend: &mut dyn Frontend, old: &str, new: &str) -> bool {
        let replaced = self.state.replace_item(old, new);
        if replaced {
            info!("inventory \"{old}\" -> \"{new}\"");
            frontend.render_inventory(self.state.items());
        }
        replaced
    }
}
