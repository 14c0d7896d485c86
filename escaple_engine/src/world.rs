//! The running escape room.
//!
//! [`EscapeWorld`] owns the rooms, the combination rules and the [`Session`].
//! It is built once by the loader and then mutated by player input. Every
//! input path (click, room change) ends by running the post-interaction rules.

use std::collections::HashMap;

use anyhow::{Result, bail};
use gametools::Spinner;
use log::info;
use variantly::Variantly;

use crate::ESCAPLE_VERSION;
use crate::action::dispatch_action;
use crate::frontend::Frontend;
use crate::room::Room;
use crate::rules::{CombinationRule, apply_post_interaction};
use crate::session::Session;
use crate::spinners::{SpinnerType, default_spinners};

/// Shown when clicking a hotspot that has no action bound.
pub const NOTHING_SPECIAL: &str = "Nothing special here.";
/// Shown when a click lands outside every hotspot.
pub const NOTHING_THERE: &str = "There is nothing there.";

/// What happened to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum ClickOutcome {
    /// The hotspot's action (or the no-action message) ran.
    Dispatched,
    /// A prompt is open; the click was ignored.
    Blocked,
    /// No hotspot at that position.
    Missing,
}

/// Complete state of a running game.
#[derive(Debug, Clone)]
pub struct EscapeWorld {
    pub title: String,
    pub intro: String,
    pub rooms: Vec<Room>,
    pub combinations: Vec<CombinationRule>,
    pub session: Session,
    pub spinners: HashMap<SpinnerType, Spinner<String>>,
    pub version: String,
    current: usize,
}

impl EscapeWorld {
    /// Assemble a world starting in the first room.
    ///
    /// # Errors
    /// - if `rooms` is empty
    pub fn new(
        title: impl Into<String>,
        intro: impl Into<String>,
        rooms: Vec<Room>,
        combinations: Vec<CombinationRule>,
        session: Session,
    ) -> Result<Self> {
        if rooms.is_empty() {
            bail!("an escape world needs at least one room");
        }
        let world = Self {
            title: title.into(),
            intro: intro.into(),
            rooms,
            combinations,
            session,
            spinners: default_spinners(),
            version: ESCAPLE_VERSION.to_string(),
            current: 0,
        };
        info!(
            "new EscapeWorld \"{}\" created with {} room(s) and {} combination rule(s)",
            world.title,
            world.rooms.len(),
            world.combinations.len()
        );
        Ok(world)
    }

    /// Random line from the selected spinner, or `default` if it has none.
    pub fn spin_spinner(&self, spin_type: SpinnerType, default: &'static str) -> String {
        self.spinners
            .get(&spin_type)
            .and_then(Spinner::spin)
            .unwrap_or_else(|| default.to_string())
    }

    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current]
    }

    /// Zero-based index of the current room.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Go to the next room, wrapping past the last. Returns false if a prompt is open.
    pub fn next_room(&mut self, frontend: &mut dyn Frontend) -> bool {
        let target = (self.current + 1) % self.rooms.len();
        self.enter_room(frontend, target)
    }

    /// Go to the previous room, wrapping past the first. Returns false if a prompt is open.
    pub fn prev_room(&mut self, frontend: &mut dyn Frontend) -> bool {
        let target = (self.current + self.rooms.len() - 1) % self.rooms.len();
        self.enter_room(frontend, target)
    }

    /// Make `index` the current room and settle the rules.
    ///
    /// Returns false (and stays put) if a prompt is open or `index` is out of range.
    pub fn enter_room(&mut self, frontend: &mut dyn Frontend, index: usize) -> bool {
        if self.session.prompt.is_open() || index >= self.rooms.len() {
            return false;
        }
        self.current = index;
        info!(
            "entered room {} of {}: \"{}\"",
            index + 1,
            self.rooms.len(),
            self.rooms[index].name
        );
        apply_post_interaction(&mut self.session, frontend, &self.combinations);
        true
    }

    /// Resolve a hotspot query (number, id or label) in the current room.
    pub fn find_hotspot(&self, query: &str) -> Option<usize> {
        self.current_room().find_hotspot(query)
    }

    /// Click the hotspot at `index` in the current room.
    pub fn click(&mut self, frontend: &mut dyn Frontend, index: usize) -> ClickOutcome {
        if self.session.prompt.is_open() {
            info!("click on hotspot {index} ignored while a prompt is open");
            return ClickOutcome::Blocked;
        }
        let Some(hotspot) = self.rooms[self.current].hotspots.get(index) else {
            self.session.show(NOTHING_THERE);
            return ClickOutcome::Missing;
        };
        info!("clicked \"{}\" in \"{}\"", hotspot.label, self.rooms[self.current].name);
        match &hotspot.action {
            Some(action) => {
                dispatch_action(&mut self.session, frontend, &self.combinations, action);
                apply_post_interaction(&mut self.session, frontend, &self.combinations);
            },
            None => self.session.show(NOTHING_SPECIAL),
        }
        ClickOutcome::Dispatched
    }

    /// Click at a point in room coordinates.
    pub fn click_at(&mut self, frontend: &mut dyn Frontend, x: i32, y: i32) -> ClickOutcome {
        if self.session.prompt.is_open() {
            return ClickOutcome::Blocked;
        }
        match self.current_room().hotspot_at(x, y) {
            Some(index) => self.click(frontend, index),
            None => {
                self.session.show(NOTHING_THERE);
                ClickOutcome::Missing
            },
        }
    }

    /// Inspect an inventory item. Returns false if the player isn't carrying it.
    pub fn inspect_item(&mut self, name: &str) -> bool {
        let held = self
            .session
            .state
            .items()
            .iter()
            .find(|item| item.eq_ignore_ascii_case(name.trim()))
            .cloned();
        match held {
            Some(item) => {
                self.session.show(&format!("Try using \"{item}\" on something in the room."));
                true
            },
            None => {
                let line = self.spin_spinner(SpinnerType::NotCarrying, "You aren't carrying that.");
                self.session.show(&line);
                false
            },
        }
    }
}
