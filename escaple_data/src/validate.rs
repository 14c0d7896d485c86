use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    MalformedAction { kind: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::MalformedAction { kind, context } => {
                write!(f, "malformed '{kind}' action ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use escaple_data::{ActionDef, GameDef, HotspotActionDef, HotspotDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: "Intro".into(),
///         ..GameDef::default()
///     },
///     rooms: vec![RoomDef {
///         name: "Start".into(),
///         color: 0xffeedc,
///         hotspots: vec![HotspotDef {
///             id: "painting".into(),
///             label: "Painting".into(),
///             x: 500,
///             y: 140,
///             w: 260,
///             h: 140,
///             action: Some(HotspotActionDef::Known(ActionDef::Message {
///                 text: "A painting shows soft shapes.".into(),
///             })),
///         }],
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "world defines no rooms".to_string(),
        });
    }
    if world.game.message_ms == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "game message_ms must be greater than zero".to_string(),
        });
    }

    let mut families = HashSet::new();
    track_ids(
        "combination",
        world.combinations.iter().map(|c| c.family.as_str()),
        &mut families,
        &mut errors,
    );
    for combo in &world.combinations {
        validate_combination(combo, &mut errors);
    }

    for (index, room) in world.rooms.iter().enumerate() {
        let room_ctx = format!("room {} '{}'", index + 1, room.name);
        if room.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("room {} has no name", index + 1),
            });
        }
        if room.color > 0x00ff_ffff {
            errors.push(ValidationError::InvalidValue {
                context: format!("{room_ctx} color {:#x} is not 24-bit RGB", room.color),
            });
        }

        let mut hotspot_ids = HashSet::new();
        track_ids(
            "hotspot",
            room.hotspots.iter().map(|h| h.id.as_str()),
            &mut hotspot_ids,
            &mut errors,
        );

        for hotspot in &room.hotspots {
            let context = format!("{room_ctx} hotspot '{}'", hotspot.id);
            if hotspot.label.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} has an empty label"),
                });
            }
            if hotspot.w == 0 || hotspot.h == 0 {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} has zero size ({}x{})", hotspot.w, hotspot.h),
                });
            }
            if let Some(action) = &hotspot.action {
                validate_action(action, &mut errors, &context);
            }
        }
    }

    errors
}

struct KnownNames {
    items: HashSet<String>,
    flags: HashSet<String>,
}

impl KnownNames {
    fn collect(world: &WorldDef) -> Self {
        let mut items = HashSet::new();
        let mut flags: HashSet<String> = world.flags.keys().cloned().collect();

        for combo in &world.combinations {
            items.insert(combo.tool.clone());
            items.insert(combo.part.clone());
            items.insert(combo.result.clone());
            if let Some(flag) = &combo.flag {
                flags.insert(flag.clone());
            }
        }

        let actions = world
            .rooms
            .iter()
            .flat_map(|room| &room.hotspots)
            .filter_map(|hotspot| hotspot.action.as_ref());
        for action in actions {
            match action {
                HotspotActionDef::Known(ActionDef::AddItem { item }) => {
                    items.insert(item.clone());
                },
                HotspotActionDef::Known(ActionDef::PromptCode {
                    on_success_add: Some(item),
                    ..
                }) => {
                    items.insert(item.clone());
                },
                HotspotActionDef::Known(ActionDef::ToggleFlag { flag, .. }) => {
                    flags.insert(flag.clone());
                },
                _ => {},
            }
        }

        Self { items, flags }
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

fn check_not_blank(value: &str, what: &str, context: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context}: {what} is empty"),
        });
    }
}

fn validate_combination(combo: &CombinationDef, errors: &mut Vec<ValidationError>) {
    let context = format!("combination '{}'", combo.family);
    check_not_blank(&combo.family, "family", &context, errors);
    check_not_blank(&combo.tool, "tool", &context, errors);
    check_not_blank(&combo.part, "part", &context, errors);
    check_not_blank(&combo.result, "result", &context, errors);
    if combo.tool == combo.result || combo.part == combo.tool || combo.part == combo.result {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context}: tool, part and result must all differ"),
        });
    }
    if let Some(flag) = &combo.flag {
        check_not_blank(flag, "flag", &context, errors);
    }
}

fn validate_action(action: &HotspotActionDef, errors: &mut Vec<ValidationError>, context: &str) {
    let action = match action {
        HotspotActionDef::Known(action) => action,
        HotspotActionDef::Other { kind } => {
            if KNOWN_ACTION_TYPES.contains(&kind.as_str()) {
                errors.push(ValidationError::MalformedAction {
                    kind: kind.clone(),
                    context: context.to_string(),
                });
            }
            // Unknown types are reported by the engine when clicked.
            return;
        },
    };

    match action {
        ActionDef::Message { .. } => {},
        ActionDef::AddItem { item } => check_not_blank(item, "item", context, errors),
        ActionDef::ToggleFlag { flag, .. } => check_not_blank(flag, "flag", context, errors),
        ActionDef::MessageWithFlag { flag, .. } => check_not_blank(flag, "flag", context, errors),
        ActionDef::PromptCode {
            codes, on_success_add, ..
        } => {
            if codes.iter().all(|code| code.trim().is_empty()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context}: prompt_code lists no codes"),
                });
            }
            if let Some(item) = on_success_add {
                check_not_blank(item, "on_success_add", context, errors);
            }
        },
        ActionDef::EnterWord { solution, .. } => check_not_blank(solution, "solution", context, errors),
        ActionDef::RevealIfFlagAndItems { required_flag, .. } => {
            if let Some(flag) = required_flag {
                check_not_blank(flag, "required_flag", context, errors);
            }
        },
    }
}

/// Flags and items that are read somewhere but never seeded, toggled or handed out.
///
/// These are legal (unset flags read as false) but usually mean a typo in a
/// content file, so the loader reports them as warnings rather than errors.
pub fn lint_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut warnings = Vec::new();
    let ids = KnownNames::collect(world);

    for (index, room) in world.rooms.iter().enumerate() {
        for hotspot in &room.hotspots {
            let context = format!("room {} '{}' hotspot '{}'", index + 1, room.name, hotspot.id);
            match &hotspot.action {
                Some(HotspotActionDef::Known(ActionDef::MessageWithFlag { flag, .. })) => {
                    check_ref("flag", flag, &ids.flags, context, &mut warnings);
                },
                Some(HotspotActionDef::Known(ActionDef::RevealIfFlagAndItems {
                    required_flag,
                    required_items,
                    ..
                })) => {
                    if let Some(flag) = required_flag {
                        check_ref("flag", flag, &ids.flags, context.clone(), &mut warnings);
                    }
                    for item in required_items {
                        check_ref("item", item, &ids.items, context.clone(), &mut warnings);
                    }
                },
                _ => {},
            }
        }
    }

    warnings
}
