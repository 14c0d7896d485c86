//! Randomized flavor text.
//!
//! Each [`SpinnerType`] has built-in default lines. A `spinners.toml` in the
//! data directory may replace any of them:
//!
//! ```toml
//! [[spinners]]
//! spinnerType = "unrecognizedCommand"
//! values = ["Huh?", "Come again?"]
//! widths = [1, 3]
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use gametools::{Spinner, Wedge};
use log::{info, warn};
use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpinnerType {
    UnrecognizedCommand,
    NoSuchHotspot,
    NotCarrying,
    QuitMsg,
}

impl SpinnerType {
    pub const ALL: [SpinnerType; 4] = [
        SpinnerType::UnrecognizedCommand,
        SpinnerType::NoSuchHotspot,
        SpinnerType::NotCarrying,
        SpinnerType::QuitMsg,
    ];

    pub fn default_values(self) -> &'static [&'static str] {
        match self {
            SpinnerType::UnrecognizedCommand => &[
                "Didn't quite catch that. Try \"help\".",
                "Huh? (\"help\" lists the commands.)",
                "That's not something you can do here.",
            ],
            SpinnerType::NoSuchHotspot => &[
                "There is nothing there.",
                "You look, but find nothing by that name.",
            ],
            SpinnerType::NotCarrying => &["You aren't carrying that.", "Your pockets hold no such thing."],
            SpinnerType::QuitMsg => &["The room will still be here tomorrow.", "Goodbye!"],
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSpinnerData {
    #[serde(rename = "spinnerType")]
    spinner_type: SpinnerType,
    values: Vec<String>,
    #[serde(default)]
    widths: Vec<usize>,
}

#[derive(Debug, Deserialize)]
struct SpinnerFile {
    #[serde(default)]
    spinners: Vec<RawSpinnerData>,
}

/// All spinner types with their built-in lines.
pub fn default_spinners() -> HashMap<SpinnerType, Spinner<String>> {
    SpinnerType::ALL
        .into_iter()
        .map(|kind| {
            let wedges = kind
                .default_values()
                .iter()
                .map(|line| Wedge::new((*line).to_string()))
                .collect();
            (kind, Spinner::new(wedges))
        })
        .collect()
}

/// Load spinner overrides, falling back to defaults when the file is absent.
///
/// # Errors
/// - if the file exists but is not valid spinner TOML
pub fn load_spinners(path: &Path) -> Result<HashMap<SpinnerType, Spinner<String>>> {
    let mut spinners = default_spinners();
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!("no spinner overrides read from '{}' ({err}); using defaults", path.display());
            return Ok(spinners);
        },
    };
    let file: SpinnerFile =
        toml::from_str(&text).with_context(|| format!("parsing spinner data from {}", path.display()))?;
    for entry in file.spinners {
        if entry.values.is_empty() {
            warn!("spinner {:?} has no values, keeping defaults", entry.spinner_type);
            continue;
        }
        let wedges = entry
            .values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Wedge::new_weighted(value, entry.widths.get(i).copied().unwrap_or(1)))
            .collect();
        info!("overriding spinner {:?}", entry.spinner_type);
        spinners.insert(entry.spinner_type, Spinner::new(wedges));
    }
    Ok(spinners)
}
