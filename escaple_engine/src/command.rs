//! Command module
//!
//! Describes possible commands used during gameplay.
use variantly;

use crate::DEV_MODE;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    /// Click a hotspot by number, id or label.
    Click(String),
    /// Click a point in room coordinates.
    ClickAt { x: i32, y: i32 },
    Flags,
    Help,
    Inspect(String),
    Inventory,
    Look,
    NextRoom,
    PrevRoom,
    Quit,
    Unknown,
}

/// Parses an input string and returns a corresponding `Command` if recognized.
pub fn parse_command(input: &str) -> Command {
    let lowered = input.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        ["look" | "l"] => Command::Look,
        ["next" | "n" | "right"] => Command::NextRoom,
        ["prev" | "previous" | "p" | "left"] => Command::PrevRoom,
        ["inventory" | "inv" | "i"] => Command::Inventory,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit"] => Command::Quit,
        [":flags"] if DEV_MODE => Command::Flags,
        ["click" | "c" | "use" | "open", x, y] if x.parse::<i32>().is_ok() && y.parse::<i32>().is_ok() => {
            match (x.parse(), y.parse()) {
                (Ok(x), Ok(y)) => Command::ClickAt { x, y },
                _ => Command::Unknown,
            }
        },
        ["click" | "c" | "use" | "open", target @ ..] if !target.is_empty() => Command::Click(target.join(" ")),
        ["inspect" | "examine" | "x", item @ ..] if !item.is_empty() => Command::Inspect(item.join(" ")),
        [number] if number.parse::<usize>().is_ok() => Command::Click((*number).to_string()),
        _ => Command::Unknown,
    }
}
