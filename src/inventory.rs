//! Player inventory (keys, batteries, and other pickups)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Item counts by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` of an item
    pub fn add_item(&mut self, name: &str, count: u32) {
        *self.items.entry(name.to_string()).or_insert(0) += count;
    }

    /// Remove up to `count` of an item; the entry disappears when none are left
    pub fn remove_item(&mut self, name: &str, count: u32) {
        if let Some(held) = self.items.get_mut(name) {
            if *held <= count {
                self.items.remove(name);
            } else {
                *held -= count;
            }
        }
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// How many of an item are held
    pub fn count(&self, name: &str) -> u32 {
        self.items.get(name).copied().unwrap_or(0)
    }

    /// Iterate items in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, &count)| (name.as_str(), count))
    }
}
