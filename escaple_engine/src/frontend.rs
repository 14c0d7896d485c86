//! The seam between the game core and whatever draws it.
//!
//! The core never prints. It calls back into a [`Frontend`] to refresh the
//! inventory display and to put a question in front of the player.

use std::io;

use crate::prompt::Dismissal;

/// Services the core needs from the presentation layer.
pub trait Frontend {
    /// Redraw the inventory display from the current item list.
    fn render_inventory(&mut self, items: &[String]);

    /// Show a modal question and block until the player dismisses it.
    ///
    /// # Errors
    /// - if the input device fails; the caller treats this as a cancellation
    fn prompt(&mut self, text: &str) -> io::Result<Dismissal>;
}
