//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which aggregates them, styles them,
//! organizes them, and displays them before moving to the next turn.

use variantly::Variantly;

use crate::loader::help::HelpCommand;
use crate::room::RoomColor;
use crate::view::Section;

/// One hotspot as listed by `look`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotspotLine {
    pub number: usize,
    pub label: String,
}

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    EngineMessage(String),
    Error(String),
    FlagList(Vec<(String, bool)>),
    Help {
        basic_text: String,
        commands: Vec<HelpCommand>,
    },
    HotspotList(Vec<HotspotLine>),
    /// Full inventory listing, in response to the `inventory` command.
    Inventory(Vec<String>),
    /// Inventory bar redraw requested by the core. Only the latest one is shown.
    InventoryBar(Vec<String>),
    /// Whatever the message board is showing.
    Message(String),
    QuitSummary {
        title: String,
        items_found: usize,
        rooms: usize,
    },
    RoomHeader {
        number: usize,
        total: usize,
        name: String,
        color: RoomColor,
    },
}

impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::RoomHeader { .. } | ViewItem::HotspotList(_) => Section::Environment,
            ViewItem::Message(_) | ViewItem::Error(_) | ViewItem::Inventory(_) => Section::DirectResult,
            ViewItem::InventoryBar(_) => Section::Status,
            ViewItem::EngineMessage(_) | ViewItem::FlagList(_) | ViewItem::Help { .. } | ViewItem::QuitSummary { .. } => {
                Section::System
            },
        }
    }
}
