use crate::PLACEHOLDER_SPRITE;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

fn default_name() -> String {
    "Unknown".to_string()
}

fn default_count() -> u32 {
    1
}

/// What consuming an item does during an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum EffectKind {
    Heal,
    AttackBuff,
    /// Lowers the opponent's attack. Flavoured as a defensive item.
    AttackDebuff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemEffect {
    pub kind: EffectKind,
    pub magnitude: u32,
}

/// An inventory stack. `name` is the identity key: lookups always resolve to
/// the first record with a matching name, even when duplicates exist.
///
/// A stack with `count == 0` is inert but is allowed to stay in the bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_kind: Option<EffectKind>,
    #[serde(default)]
    pub effect_magnitude: u32,
}

impl ItemRecord {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
            sprite_path: None,
            effect_kind: None,
            effect_magnitude: 0,
        }
    }

    pub fn with_effect(mut self, kind: EffectKind, magnitude: u32) -> Self {
        self.effect_kind = Some(kind);
        self.effect_magnitude = magnitude;
        self
    }

    pub fn with_sprite(mut self, sprite_path: impl Into<String>) -> Self {
        self.sprite_path = Some(sprite_path.into());
        self
    }

    pub fn effect(&self) -> Option<ItemEffect> {
        self.effect_kind.map(|kind| ItemEffect {
            kind,
            magnitude: self.effect_magnitude,
        })
    }

    pub fn is_available(&self) -> bool {
        self.count > 0
    }

    pub fn sprite_or_placeholder(&self) -> &str {
        self.sprite_path.as_deref().unwrap_or(PLACEHOLDER_SPRITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_effect_requires_kind() {
        let plain = ItemRecord::new("Pokeball", 3);
        assert_eq!(plain.effect(), None);

        let potion = ItemRecord::new("Potion", 1).with_effect(EffectKind::Heal, 20);
        assert_eq!(
            potion.effect(),
            Some(ItemEffect {
                kind: EffectKind::Heal,
                magnitude: 20
            })
        );
    }

    #[test]
    fn test_count_defaults_to_one() {
        let item: ItemRecord = serde_json::from_str(r#"{"name": "Potion"}"#).unwrap();
        assert_eq!(item.count, 1);
        assert_eq!(item.sprite_or_placeholder(), PLACEHOLDER_SPRITE);
    }

    #[test]
    fn test_effect_kind_parses_from_name() {
        assert_eq!(EffectKind::from_str("AttackDebuff").unwrap(), EffectKind::AttackDebuff);
        assert_eq!(EffectKind::Heal.to_string(), "Heal");
    }
}
