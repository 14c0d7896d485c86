//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use escaple_data::{ActionDef, CombinationDef, HotspotActionDef, HotspotDef, RoomDef, WorldDef};

use crate::action::ActionDescriptor;
use crate::action::normalize_word;
use crate::message::MessageTimings;
use crate::room::{Hotspot, Rect, Room, RoomColor};
use crate::rules::CombinationRule;
use crate::session::Session;
use crate::state::StateStore;
use crate::world::EscapeWorld;

/// Load a `WorldDef` from a TOML file.
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    parse_worlddef(&text).with_context(|| format!("parsing worlddef TOML from '{}'", path.display()))
}

pub fn parse_worlddef(text: &str) -> Result<WorldDef> {
    Ok(toml::from_str(text)?)
}

/// Convert a `WorldDef` into a ready-to-play `EscapeWorld`.
pub fn build_world_from_def(def: &WorldDef) -> Result<EscapeWorld> {
    let rooms = def
        .rooms
        .iter()
        .enumerate()
        .map(|(i, room)| room_from_def(i + 1, room))
        .collect();
    let combinations = def.combinations.iter().map(rule_from_def).collect();

    let timings = MessageTimings::from_millis(def.game.message_ms, def.game.success_ms, def.game.fail_ms);
    let state = StateStore::with_flags(def.flags.iter().map(|(name, value)| (name.clone(), *value)));
    let session = Session::new(state, timings);

    EscapeWorld::new(&def.game.title, &def.game.intro, rooms, combinations, session)
        .context("while assembling world from worlddef")
}

fn room_from_def(number: usize, def: &RoomDef) -> Room {
    Room {
        number,
        name: def.name.clone(),
        color: RoomColor::from(def.color),
        hotspots: def.hotspots.iter().map(hotspot_from_def).collect(),
    }
}

fn hotspot_from_def(def: &HotspotDef) -> Hotspot {
    // data positions are centers; runtime areas are anchored top-left
    let half = |extent: u32| i32::try_from(extent / 2).unwrap_or(i32::MAX);
    Hotspot {
        id: def.id.clone(),
        label: def.label.clone(),
        area: Rect {
            x: def.x.saturating_sub(half(def.w)),
            y: def.y.saturating_sub(half(def.h)),
            w: def.w,
            h: def.h,
        },
        action: def.action.as_ref().map(action_from_def),
    }
}

fn rule_from_def(def: &CombinationDef) -> CombinationRule {
    CombinationRule {
        family: def.family.clone(),
        tool: def.tool.clone(),
        part: def.part.clone(),
        result: def.result.clone(),
        flag: def.flag.clone(),
        assembled: def.assembled.clone(),
        consumed: def.consumed.clone(),
    }
}

fn action_from_def(def: &HotspotActionDef) -> ActionDescriptor {
    let action = match def {
        HotspotActionDef::Known(action) => action,
        HotspotActionDef::Other { kind } => return ActionDescriptor::Unimplemented(kind.clone()),
    };
    match action {
        ActionDef::Message { text } => ActionDescriptor::Message(text.clone()),
        ActionDef::AddItem { item } => ActionDescriptor::AddItem(item.clone()),
        ActionDef::ToggleFlag {
            flag,
            when_true,
            when_false,
        } => ActionDescriptor::ToggleFlag {
            flag: flag.clone(),
            when_true: when_true.clone(),
            when_false: when_false.clone(),
        },
        ActionDef::PromptCode {
            codes,
            on_success_add,
            prompt,
            success,
            fail,
        } => ActionDescriptor::PromptCode {
            valid_codes: codes.clone(),
            on_success_item: on_success_add.clone(),
            prompt: prompt.clone(),
            success: success.clone(),
            fail: fail.clone(),
        },
        ActionDef::EnterWord {
            solution,
            prompt,
            success,
            fail,
        } => ActionDescriptor::EnterWord {
            solution: normalize_word(solution),
            prompt: prompt.clone(),
            success: success.clone(),
            fail: fail.clone(),
        },
        ActionDef::MessageWithFlag {
            flag,
            when_true,
            when_false,
        } => ActionDescriptor::MessageWithFlag {
            flag: flag.clone(),
            when_true: when_true.clone(),
            when_false: when_false.clone(),
        },
        ActionDef::RevealIfFlagAndItems {
            required_flag,
            required_items,
            reveal,
            fail,
        } => ActionDescriptor::RevealIfFlagAndItems {
            flag: required_flag.clone(),
            required_items: required_items.clone(),
            reveal: reveal.clone(),
            fail: fail.clone(),
        },
    }
}
