//! module `loader::help`

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

/// One line of the command table shown by `help`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
    /// Only listed when the `dev-mode` feature is on.
    #[serde(default)]
    pub dev_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct HelpCommandFile {
    commands: Vec<HelpCommand>,
}

/// Help text plus the command table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpData {
    pub basic_text: String,
    pub commands: Vec<HelpCommand>,
}

impl HelpData {
    /// Commands visible in this build.
    pub fn visible_commands(&self) -> impl Iterator<Item = &HelpCommand> {
        self.commands.iter().filter(|cmd| crate::DEV_MODE || !cmd.dev_only)
    }
}

/// Loads help commands from a TOML file
/// # Errors
/// - on file IO error or TOML parsing error
pub fn load_help_commands(toml_path: &Path) -> Result<Vec<HelpCommand>> {
    let help_file = fs::read_to_string(toml_path)
        .with_context(|| format!("reading help commands from '{}'", toml_path.display()))?;
    let wrapper: HelpCommandFile =
        toml::from_str(&help_file).with_context(|| format!("parsing help commands from '{}'", toml_path.display()))?;

    info!(
        "{} help commands loaded from '{}'",
        wrapper.commands.len(),
        toml_path.display()
    );
    Ok(wrapper.commands)
}

/// Loads the introductory help paragraph
/// # Errors
/// - on file IO error
pub fn load_help_basic_text(text_path: &Path) -> Result<String> {
    let basic_text = fs::read_to_string(text_path)
        .with_context(|| format!("reading basic help text from '{}'", text_path.display()))?;
    info!("basic help text loaded from '{}'", text_path.display());
    Ok(basic_text.trim().to_string())
}

/// Loads complete help data from both files
/// # Errors
/// - on file IO error or TOML parsing error
pub fn load_help_data(basic_text_path: &Path, commands_toml_path: &Path) -> Result<HelpData> {
    let basic_text = load_help_basic_text(basic_text_path).context("while loading basic help text")?;
    let commands = load_help_commands(commands_toml_path).context("while loading help commands")?;
    Ok(HelpData { basic_text, commands })
}
