//! The terminal implementation of [`Frontend`].
//!
//! Prompts read a line through the REPL's [`InputManager`]. Inventory redraws
//! are held until the end of the turn, when the REPL moves the newest one into
//! the view.

use std::io;

use log::info;

use crate::frontend::Frontend;
use crate::prompt::Dismissal;
use crate::style::GameStyle;

use super::input::{InputEvent, InputManager};

pub struct TerminalFrontend {
    pub input: InputManager,
    pending_inventory: Option<Vec<String>>,
}

impl TerminalFrontend {
    pub fn new(input: InputManager) -> Self {
        Self {
            input,
            pending_inventory: None,
        }
    }

    /// The newest inventory redraw since the last call, if any.
    pub fn take_inventory_redraw(&mut self) -> Option<Vec<String>> {
        self.pending_inventory.take()
    }
}

/// Map a line-editor event onto a prompt dismissal.
pub fn dismissal_from_event(event: InputEvent) -> Dismissal {
    match event {
        InputEvent::Line(line) => Dismissal::Confirm(line),
        InputEvent::Interrupted => Dismissal::Escape,
        InputEvent::Eof => Dismissal::Cancel,
    }
}

impl Frontend for TerminalFrontend {
    fn render_inventory(&mut self, items: &[String]) {
        self.pending_inventory = Some(items.to_vec());
    }

    fn prompt(&mut self, text: &str) -> io::Result<Dismissal> {
        let styled = format!("\n{text} ").prompt_style().to_string();
        let event = self.input.read_answer(&styled)?;
        info!("prompt input event: {event:?}");
        Ok(dismissal_from_event(event))
    }
}
