#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const ESCAPLE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// True when built with the `dev-mode` feature.
pub const DEV_MODE: bool = cfg!(feature = "dev-mode");

// Core modules
pub mod action;
pub mod command;
pub mod data_paths;
pub mod frontend;
pub mod loader;
pub mod message;
pub mod prompt;
pub mod repl;
pub mod room;
pub mod rules;
pub mod session;
pub mod spinners;
pub mod state;
pub mod style;
pub mod testing;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use action::{ActionDescriptor, dispatch_action};
pub use frontend::Frontend;
pub use loader::{load_world, load_world_from};
pub use prompt::{Dismissal, ModalError, ModalPrompt, PromptOutcome};
pub use repl::run_repl;
pub use room::{Hotspot, Room};
pub use rules::{CombinationRule, apply_post_interaction};
pub use session::Session;
pub use state::{AddOutcome, StateStore};
pub use view::{View, ViewItem};
pub use world::{ClickOutcome, EscapeWorld};
