#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Escaple **
//! Point-and-click escape room, played from the terminal

use escaple_engine::data_paths::data_path;
use escaple_engine::loader::help::{HelpData, load_help_data};
use escaple_engine::{load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;

use log::{info, warn};

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Escaple world...");
    let mut world = load_world().context("while loading EscapeWorld")?;
    info!("EscapeWorld loaded successfully.");

    let help = load_help_data(&data_path("help_basic.txt"), &data_path("help_commands.toml")).unwrap_or_else(|err| {
        warn!("help unavailable: {err:#}");
        HelpData::default()
    });

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("while clearing the screen")?;
    info!("Starting the game!");

    println!("{:^84}\n", world.title.to_uppercase().bright_yellow().underline());

    run_repl(&mut world, &help)
}
