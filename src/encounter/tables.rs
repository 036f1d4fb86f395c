//! Opponent pools and the stand-in creature used when the roster is empty.

use crate::encounter::state::EncounterKind;
use schema::CreatureRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_REGION: &str = "Route 1";

/// Creature lent to the player when the roster has nobody able to fight.
pub fn default_player_creature() -> CreatureRecord {
    CreatureRecord::new("Pikachu", 100, 100, 25)
        .with_attack(20)
        .with_sprite("menu_sprites/menusprite1.png")
}

fn fallback_opponent() -> CreatureRecord {
    CreatureRecord::new("Rattata", 40, 40, 5).with_sprite("menu_sprites/menusprite1.png")
}

/// Trainer battles draw from a per-region table, wild encounters from a
/// separate and generally weaker one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentTables {
    pub trainer: BTreeMap<String, Vec<CreatureRecord>>,
    pub wild: Vec<CreatureRecord>,
}

impl OpponentTables {
    pub fn new(trainer: BTreeMap<String, Vec<CreatureRecord>>, wild: Vec<CreatureRecord>) -> Self {
        Self { trainer, wild }
    }

    /// Candidates for the given encounter. Unknown regions use the default
    /// region's table.
    pub fn pool(&self, kind: EncounterKind, region: &str) -> &[CreatureRecord] {
        match kind {
            EncounterKind::Battle => self
                .trainer
                .get(region)
                .or_else(|| self.trainer.get(DEFAULT_REGION))
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            EncounterKind::Capture => &self.wild,
        }
    }

    /// Pool entry at `index`, or a stock opponent when the pool is empty.
    pub fn opponent_at(&self, kind: EncounterKind, region: &str, index: Option<usize>) -> CreatureRecord {
        index
            .and_then(|i| self.pool(kind, region).get(i))
            .cloned()
            .unwrap_or_else(fallback_opponent)
    }
}

impl Default for OpponentTables {
    fn default() -> Self {
        let route_one = vec![
            CreatureRecord::new("Rattata", 400, 400, 25).with_sprite("menu_sprites/menusprite1.png"),
            CreatureRecord::new("Pidgey", 45, 45, 6).with_sprite("menu_sprites/menusprite2.png"),
            CreatureRecord::new("Caterpie", 35, 35, 4).with_sprite("menu_sprites/menusprite3.png"),
            CreatureRecord::new("Weedle", 38, 38, 5).with_sprite("menu_sprites/menusprite4.png"),
        ];
        let wild = vec![
            CreatureRecord::new("Rattata", 40, 40, 5)
                .with_attack(12)
                .with_sprite("menu_sprites/menusprite1.png"),
            CreatureRecord::new("Pidgey", 45, 45, 6)
                .with_attack(14)
                .with_sprite("menu_sprites/menusprite2.png"),
            CreatureRecord::new("Caterpie", 35, 35, 4)
                .with_attack(10)
                .with_sprite("menu_sprites/menusprite3.png"),
            CreatureRecord::new("Weedle", 38, 38, 5)
                .with_attack(11)
                .with_sprite("menu_sprites/menusprite4.png"),
        ];

        let mut trainer = BTreeMap::new();
        trainer.insert(DEFAULT_REGION.to_string(), route_one);
        Self::new(trainer, wild)
    }
}
