//! Post-interaction rules.
//!
//! After every action (and on entering a room) the combination rules are
//! re-checked against the inventory, in order:
//!
//! 1. holding the tool and the part assembles them into the result (and sets the rule's flag)
//! 2. holding the result and a leftover part consumes the part
//!
//! Each step checks its own precondition, so running the rules again on a
//! settled inventory changes nothing.

use log::{debug, info};

use crate::frontend::Frontend;
use crate::session::Session;
use crate::state::StateStore;

/// A tool that becomes something else once its part is fitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationRule {
    /// What the player would call any variant of the tool ("flashlight").
    pub family: String,
    pub tool: String,
    pub part: String,
    pub result: String,
    pub flag: Option<String>,
    pub assembled: String,
    pub consumed: String,
}

impl CombinationRule {
    /// True if `name` is either variant of this rule's tool.
    pub fn in_family(&self, name: &str) -> bool {
        name == self.tool || name == self.result
    }

    /// True if the player already holds some variant of the tool.
    pub fn family_held(&self, state: &StateStore) -> bool {
        state.has_item(&self.tool) || state.has_item(&self.result)
    }
}

/// Find the rule whose family `name` belongs to, if the player holds a different member of it.
///
/// Holding `name` itself is not a match; that is an ordinary duplicate add.
pub fn family_already_held<'a>(rules: &'a [CombinationRule], state: &StateStore, name: &str) -> Option<&'a CombinationRule> {
    if state.has_item(name) {
        return None;
    }
    rules
        .iter()
        .find(|rule| rule.in_family(name) && rule.family_held(state))
}

/// Re-derive inventory state from the combination rules. Returns how many steps fired.
pub fn apply_post_interaction(session: &mut Session, frontend: &mut dyn Frontend, rules: &[CombinationRule]) -> usize {
    let mut fired = 0;
    for rule in rules {
        if session.state.has_item(&rule.tool)
            && session.state.has_item(&rule.part)
            && session.replace_item(frontend, &rule.tool, &rule.result)
        {
            info!("└─ rule: assembled \"{}\" into \"{}\"", rule.tool, rule.result);
            session.show(&rule.assembled);
            if let Some(flag) = &rule.flag {
                session.state.set_flag(flag, true);
            }
            fired += 1;
        }

        if session.state.has_item(&rule.result)
            && session.state.has_item(&rule.part)
            && session.remove_item(frontend, &rule.part)
        {
            info!("└─ rule: consumed \"{}\"", rule.part);
            session.show(&rule.consumed);
            fired += 1;
        }
    }
    debug!("post-interaction rules fired {fired} step(s)");
    fired
}
