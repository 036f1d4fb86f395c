use crate::config::EncounterConfig;
use crate::encounter::engine::EncounterEngine;
use crate::encounter::state::{ActionOutcome, EncounterKind, RejectionReason};
use crate::roster::Roster;
use schema::{CreatureRecord, EffectKind, ItemRecord};

/// A builder for test creatures with full HP and an explicit attack.
///
/// # Example
/// ```
/// let pikachu = TestCreatureBuilder::new("Pikachu", 100)
///     .with_hp(50)
///     .with_attack(20)
///     .build();
/// ```
pub struct TestCreatureBuilder {
    name: String,
    max_hp: u32,
    level: u32,
    hp: Option<u32>,
    attack: Option<u32>,
}

impl TestCreatureBuilder {
    pub fn new(name: &str, max_hp: u32) -> Self {
        Self {
            name: name.to_string(),
            max_hp,
            level: 5,
            hp: None,
            attack: None,
        }
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn with_attack(mut self, attack: u32) -> Self {
        self.attack = Some(attack);
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn build(self) -> CreatureRecord {
        let creature = CreatureRecord::new(
            self.name,
            self.hp.unwrap_or(self.max_hp),
            self.max_hp,
            self.level,
        );
        match self.attack {
            Some(attack) => creature.with_attack(attack),
            None => creature,
        }
    }
}

pub fn potion(count: u32) -> ItemRecord {
    ItemRecord::new("Potion", count).with_effect(EffectKind::Heal, 20)
}

pub fn pokeballs(count: u32) -> ItemRecord {
    ItemRecord::new("Pokeball", count)
}

pub fn create_test_roster(creatures: Vec<CreatureRecord>, items: Vec<ItemRecord>) -> Roster {
    Roster::new(creatures, items)
}

/// Starts an encounter whose player creature is roster slot 0.
pub fn create_test_encounter(kind: EncounterKind, roster: &Roster, opponent: CreatureRecord) -> EncounterEngine {
    let player = match roster.creatures.first() {
        Some(creature) => creature.clone(),
        None => panic!("test roster needs at least one creature"),
    };
    EncounterEngine::new(kind, player, Some(0), opponent, EncounterConfig::new())
}

/// Advances far enough for any pending opponent turn to resolve.
pub fn run_opponent_turn(engine: &mut EncounterEngine, roster: &mut Roster) {
    engine.update(2.0, roster);
}

pub fn assert_applied(outcome: ActionOutcome) {
    assert!(outcome.is_applied(), "Expected Applied but got {:?}", outcome);
}

pub fn assert_rejected(outcome: ActionOutcome, expected: RejectionReason) {
    assert_eq!(outcome, ActionOutcome::Rejected(expected));
}
