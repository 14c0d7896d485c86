use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier used for hotspots within a room.
pub type Id = String;

/// Every action `type` tag the engine knows how to run.
pub const KNOWN_ACTION_TYPES: &[&str] = &[
    "message",
    "add_item",
    "toggle_flag",
    "prompt_code",
    "enter_word",
    "message_with_flag",
    "reveal_if_flag_and_items",
];

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    /// Initial flag values. Flags not listed here start out false.
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
    #[serde(default)]
    pub combinations: Vec<CombinationDef>,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
}

/// Game-level metadata and message timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default = "default_message_ms")]
    pub message_ms: u64,
    #[serde(default = "default_success_ms")]
    pub success_ms: u64,
    #[serde(default = "default_fail_ms")]
    pub fail_ms: u64,
}

impl Default for GameDef {
    fn default() -> Self {
        Self {
            title: String::new(),
            intro: String::new(),
            message_ms: default_message_ms(),
            success_ms: default_success_ms(),
            fail_ms: default_fail_ms(),
        }
    }
}

fn default_message_ms() -> u64 {
    3500
}

fn default_success_ms() -> u64 {
    6000
}

fn default_fail_ms() -> u64 {
    3000
}

/// Two inventory items that assemble into a third, e.g. a flashlight and its batteries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationDef {
    /// Display name for the family of `tool` and `result`, used in "already taken" messages.
    pub family: String,
    pub tool: String,
    pub part: String,
    pub result: String,
    #[serde(default)]
    pub flag: Option<String>,
    pub assembled: String,
    pub consumed: String,
}

/// A single room: background color plus its clickable hotspots, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub name: String,
    /// 24-bit RGB background color, e.g. `0xffeedc`.
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub hotspots: Vec<HotspotDef>,
}

/// A clickable region. Geometry is center-based and purely presentational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotDef {
    pub id: Id,
    pub label: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default = "default_extent")]
    pub w: u32,
    #[serde(default = "default_extent")]
    pub h: u32,
    #[serde(default)]
    pub action: Option<HotspotActionDef>,
}

fn default_extent() -> u32 {
    100
}

/// Action attached to a hotspot.
///
/// Content files may name action types this version does not know about; those
/// load as `Other` so the engine can report them at click time instead of
/// refusing the whole file. A known `type` whose payload fails to parse also
/// lands in `Other`, which `validate_world` reports as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotspotActionDef {
    Known(ActionDef),
    Other {
        #[serde(rename = "type")]
        kind: String,
    },
}

impl HotspotActionDef {
    pub fn kind(&self) -> &str {
        match self {
            HotspotActionDef::Known(action) => action.kind(),
            HotspotActionDef::Other { kind } => kind,
        }
    }
}

/// Scripted actions a hotspot can run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionDef {
    Message {
        text: String,
    },
    AddItem {
        item: String,
    },
    ToggleFlag {
        flag: String,
        when_true: String,
        when_false: String,
    },
    PromptCode {
        codes: Vec<String>,
        #[serde(default)]
        on_success_add: Option<String>,
        #[serde(default = "default_code_prompt")]
        prompt: String,
        #[serde(default = "default_code_success")]
        success: String,
        #[serde(default = "default_code_fail")]
        fail: String,
    },
    EnterWord {
        solution: String,
        #[serde(default = "default_word_prompt")]
        prompt: String,
        success: String,
        fail: String,
    },
    MessageWithFlag {
        flag: String,
        when_true: String,
        when_false: String,
    },
    RevealIfFlagAndItems {
        #[serde(default)]
        required_flag: Option<String>,
        #[serde(default)]
        required_items: Vec<String>,
        reveal: String,
        #[serde(default = "default_reveal_fail")]
        fail: String,
    },
}

impl ActionDef {
    /// The `type` tag this action is written with in content files.
    pub fn kind(&self) -> &'static str {
        match self {
            ActionDef::Message { .. } => "message",
            ActionDef::AddItem { .. } => "add_item",
            ActionDef::ToggleFlag { .. } => "toggle_flag",
            ActionDef::PromptCode { .. } => "prompt_code",
            ActionDef::EnterWord { .. } => "enter_word",
            ActionDef::MessageWithFlag { .. } => "message_with_flag",
            ActionDef::RevealIfFlagAndItems { .. } => "reveal_if_flag_and_items",
        }
    }
}

fn default_code_prompt() -> String {
    "Enter code:".to_string()
}

fn default_word_prompt() -> String {
    "Enter 5-letter code:".to_string()
}

fn default_code_success() -> String {
    "Unlocked!".to_string()
}

fn default_code_fail() -> String {
    "Wrong code.".to_string()
}

fn default_reveal_fail() -> String {
    "Nothing new here.".to_string()
}
