//! The player's bag: owned creatures and item stacks.
//!
//! The store has no transactional guarantees. Engines mutate it in place and
//! those mutations are final. Access is expected to be serialized on one
//! thread; wrap it in a mutex before sharing it across threads.

use schema::{CreatureRecord, ItemRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default, alias = "monsters")]
    pub creatures: Vec<CreatureRecord>,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl Roster {
    pub fn new(creatures: Vec<CreatureRecord>, items: Vec<ItemRecord>) -> Self {
        Self { creatures, items }
    }

    /// Re-applies record invariants to every creature. Called on load.
    pub fn normalized(mut self) -> Self {
        self.creatures = self
            .creatures
            .into_iter()
            .map(CreatureRecord::normalized)
            .collect();
        self
    }

    // --- Creatures ---

    /// Indices of creatures that can still fight.
    pub fn healthy_indices(&self) -> Vec<usize> {
        self.creatures
            .iter()
            .enumerate()
            .filter(|(_, creature)| !creature.is_fainted())
            .map(|(index, _)| index)
            .collect()
    }

    /// Indices of creatures the active one may be swapped for.
    ///
    /// Exclusion is by name: any creature sharing the active creature's name
    /// is treated as the active creature itself.
    pub fn switch_candidates(&self, active_name: &str) -> Vec<usize> {
        self.creatures
            .iter()
            .enumerate()
            .filter(|(_, creature)| !creature.is_fainted() && creature.name != active_name)
            .map(|(index, _)| index)
            .collect()
    }

    /// Appends a creature and returns its index.
    pub fn add_creature(&mut self, creature: CreatureRecord) -> usize {
        self.creatures.push(creature);
        self.creatures.len() - 1
    }

    // --- Items ---

    /// First item stack with this name.
    pub fn find_item(&self, name: &str) -> Option<&ItemRecord> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn find_item_mut(&mut self, name: &str) -> Option<&mut ItemRecord> {
        self.items.iter_mut().find(|item| item.name == name)
    }

    /// Count of the first stack with this name, or zero when absent.
    pub fn item_count(&self, name: &str) -> u32 {
        self.find_item(name).map_or(0, |item| item.count)
    }

    /// Adds to the first stack with this name, creating one if absent.
    /// Returns the resulting count.
    pub fn add_item(&mut self, name: &str, amount: u32, sprite_path: Option<&str>) -> u32 {
        if let Some(item) = self.find_item_mut(name) {
            item.count = item.count.saturating_add(amount);
            return item.count;
        }

        let mut item = ItemRecord::new(name, amount);
        item.sprite_path = sprite_path.map(str::to_string);
        self.items.push(item);
        amount
    }

    /// Removes one unit from the first stack with this name.
    /// Returns `false` (and changes nothing) when that stack is missing or empty.
    pub fn consume_item(&mut self, name: &str) -> bool {
        match self.find_item_mut(name) {
            Some(item) if item.count > 0 => {
                item.count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Removes `amount` from the first stack with this name if it holds enough.
    pub fn spend_item(&mut self, name: &str, amount: u32) -> bool {
        match self.find_item_mut(name) {
            Some(item) if item.count >= amount => {
                item.count -= amount;
                true
            }
            _ => false,
        }
    }

    /// Indices of usable stacks whose name contains `keyword`.
    ///
    /// Only the first stack of each name is considered, since that is the one
    /// a use resolves to. A later duplicate never shows up while the first
    /// stack of its name is empty.
    pub fn usable_item_indices(&self, keyword: &str) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(index, item)| {
                item.is_available()
                    && item.name.contains(keyword)
                    && self.items.iter().position(|other| other.name == item.name) == Some(*index)
            })
            .map(|(index, _)| index)
            .collect()
    }
}
