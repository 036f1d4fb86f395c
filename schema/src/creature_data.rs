use crate::PLACEHOLDER_SPRITE;
use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "Unknown".to_string()
}

fn default_max_hp() -> u32 {
    1
}

fn default_level() -> u32 {
    1
}

/// A single owned or wild creature.
///
/// Every field is optional in the persisted form; missing keys fall back to
/// the defaults above. Call [`CreatureRecord::normalized`] at the roster
/// boundary so that `hp <= max_hp`, `max_hp >= 1` and `level >= 1` hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub hp: u32,
    #[serde(default = "default_max_hp")]
    pub max_hp: u32,
    #[serde(default = "default_level")]
    pub level: u32,
    /// Base damage dealt by a plain attack. Absent on older saves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_path: Option<String>,
}

impl CreatureRecord {
    /// Creates a creature at the given HP. HP is clamped to `max_hp`.
    pub fn new(name: impl Into<String>, hp: u32, max_hp: u32, level: u32) -> Self {
        Self {
            name: name.into(),
            hp,
            max_hp,
            level,
            attack: None,
            sprite_path: None,
        }
        .normalized()
    }

    pub fn with_attack(mut self, attack: u32) -> Self {
        self.attack = Some(attack);
        self
    }

    pub fn with_sprite(mut self, sprite_path: impl Into<String>) -> Self {
        self.sprite_path = Some(sprite_path.into());
        self
    }

    /// Enforces the record invariants.
    pub fn normalized(mut self) -> Self {
        self.max_hp = self.max_hp.max(1);
        self.level = self.level.max(1);
        self.hp = self.hp.min(self.max_hp);
        self
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Applies damage, flooring HP at zero. Returns the remaining HP.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }

    /// Restores HP without exceeding `max_hp`. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// True when current HP is under `percent` of `max_hp`.
    pub fn hp_below_percent(&self, percent: u32) -> bool {
        u64::from(self.hp) * 100 < u64::from(self.max_hp) * u64::from(percent)
    }

    pub fn restore_full(&mut self) {
        self.hp = self.max_hp;
    }

    /// Base attack, or `fallback` when the record has none.
    pub fn base_attack(&self, fallback: u32) -> u32 {
        self.attack.unwrap_or(fallback)
    }

    pub fn sprite_or_placeholder(&self) -> &str {
        self.sprite_path.as_deref().unwrap_or(PLACEHOLDER_SPRITE)
    }
}
