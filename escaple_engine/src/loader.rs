//! Loader utilities for building an `EscapeWorld` from the data directory.
//!
//! Room content comes from `rooms.toml`; help text and spinner overrides
//! live in their own files next to it.

pub mod help;
pub mod worlddef;

use std::path::Path;

use anyhow::{Context, Result, bail};
use escaple_data::WorldDef;
use log::{info, warn};

use crate::data_paths::data_path;
use crate::loader::worlddef::{build_world_from_def, load_worlddef};
use crate::spinners::load_spinners;
use crate::world::EscapeWorld;

/// Load the `EscapeWorld` from the data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_world() -> Result<EscapeWorld> {
    let mut world = load_world_from(&data_path("rooms.toml"))?;
    world.spinners = load_spinners(&data_path("spinners.toml")).context("while loading spinners")?;
    info!("{} spinners added to EscapeWorld", world.spinners.len());
    Ok(world)
}

/// Load and validate a world file at `path`, with default spinners.
///
/// # Errors
/// - on file IO or TOML errors
/// - if the world fails validation (all problems are listed in one error)
pub fn load_world_from(path: &Path) -> Result<EscapeWorld> {
    let worlddef = load_worlddef(path).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;
    let world = build_world_from_def(&worlddef).context("while building world from worlddef")?;
    info!("{} rooms added to EscapeWorld", world.rooms.len());
    info!(
        "{} hotspots added to EscapeWorld",
        world.rooms.iter().map(|room| room.hotspots.len()).sum::<usize>()
    );
    info!("{} combination rules added to EscapeWorld", world.combinations.len());
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
///
/// Dangling flag and item references are logged as warnings and don't stop the load.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    for lint in escaple_data::lint_world(def) {
        warn!("worlddef: {lint}");
    }
    let errors = escaple_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
