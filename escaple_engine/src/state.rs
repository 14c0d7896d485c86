//! State store -- the player's inventory and the world's boolean flags.
//!
//! The store itself is pure bookkeeping. Showing messages and refreshing the
//! inventory display is the job of [`Session`](crate::session::Session), which
//! wraps these calls.

use std::collections::BTreeMap;

use log::debug;

/// Result of trying to put an item into the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyHeld,
}

/// Inventory (insertion ordered, no duplicates) plus named flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateStore {
    inventory: Vec<String>,
    flags: BTreeMap<String, bool>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with some flags already set.
    pub fn with_flags(flags: impl IntoIterator<Item = (String, bool)>) -> Self {
        Self {
            inventory: Vec::new(),
            flags: flags.into_iter().collect(),
        }
    }

    pub fn add_item(&mut self, name: &str) -> AddOutcome {
        if self.has_item(name) {
            AddOutcome::AlreadyHeld
        } else {
            self.inventory.push(name.to_string());
            AddOutcome::Added
        }
    }

    /// Remove an item if held. Returns whether anything changed.
    pub fn remove_item(&mut self, name: &str) -> bool {
        let before = self.inventory.len();
        self.inventory.retain(|held| held != name);
        before != self.inventory.len()
    }

    /// Swap `old` for `new` at the same inventory position.
    ///
    /// If `new` is already held, `old` is simply dropped so names stay unique.
    /// Returns false (and changes nothing) when `old` isn't held.
    pub fn replace_item(&mut self, old: &str, new: &str) -> bool {
        let Some(index) = self.inventory.iter().position(|held| held == old) else {
            return false;
        };
        if old != new && self.has_item(new) {
            self.inventory.remove(index);
        } else {
            self.inventory[index] = new.to_string();
        }
        true
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|held| held == name)
    }

    /// True if every listed item is held (vacuously true for an empty list).
    pub fn has_all(&self, names: &[String]) -> bool {
        names.iter().all(|name| self.has_item(name))
    }

    /// Inventory in the order items were picked up.
    pub fn items(&self) -> &[String] {
        &self.inventory
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        debug!("flag '{name}' set to {value}");
        self.flags.insert(name.to_string(), value);
    }

    /// Read a flag. Flags that were never set read as false.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Flip a flag and return its new value.
    pub fn toggle_flag(&mut self, name: &str) -> bool {
        let value = !self.flag(name);
        self.set_flag(name, value);
        value
    }

    /// All flags that have been set or seeded, in name order.
    pub fn flags(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_item_keeps_order_and_rejects_duplicates() {
        let mut store = StateStore::new();
        assert_eq!(store.add_item("Key"), AddOutcome::Added);
        assert_eq!(store.add_item("Map"), AddOutcome::Added);
        assert_eq!(store.add_item("Key"), AddOutcome::AlreadyHeld);
        assert_eq!(store.items(), ["Key".to_string(), "Map".to_string()]);
    }

    #[test]
    fn remove_item_is_a_noop_when_absent() {
        let mut store = StateStore::new();
        store.add_item("Key");
        assert!(!store.remove_item("Map"));
        assert!(store.remove_item("Key"));
        assert!(store.items().is_empty());
    }

    #[test]
    fn replace_item_keeps_position() {
        let mut store = StateStore::new();
        store.add_item("A");
        store.add_item("B");
        store.add_item("C");
        assert!(store.replace_item("B", "B2"));
        assert_eq!(store.items(), ["A".to_string(), "B2".to_string(), "C".to_string()]);
        assert!(!store.replace_item("missing", "X"));
    }

    #[test]
    fn replace_item_never_duplicates() {
        let mut store = StateStore::new();
        store.add_item("old");
        store.add_item("new");
        assert!(store.replace_item("old", "new"));
        assert_eq!(store.items(), ["new".to_string()]);
    }

    #[test]
    fn unset_flags_read_false() {
        let store = StateStore::new();
        assert!(!store.flag("powerOn"));
    }

    #[test]
    fn toggle_flag_flips_and_reports() {
        let mut store = StateStore::with_flags([("powerOn".to_string(), false)]);
        assert!(store.toggle_flag("powerOn"));
        assert!(store.flag("powerOn"));
        assert!(!store.toggle_flag("powerOn"));
        assert!(store.toggle_flag("brandNew"));
    }

    #[test]
    fn has_all_is_vacuous_for_empty_list() {
        let mut store = StateStore::new();
        assert!(store.has_all(&[]));
        store.add_item("A");
        assert!(store.has_all(&["A".to_string()]));
        assert!(!store.has_all(&["A".to_string(), "B".to_string()]));
    }

    #[test]
    fn flags_iterate_in_name_order() {
        let mut store = StateStore::new();
        store.set_flag("zeta", true);
        store.set_flag("alpha", false);
        let listed: Vec<_> = store.flags().collect();
        assert_eq!(listed, vec![("alpha", false), ("zeta", true)]);
    }
}
