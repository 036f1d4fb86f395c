use crate::encounter::menu::PendingMenu;
use schema::{CreatureRecord, EffectKind};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Which ruleset an encounter runs under.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EncounterKind {
    /// Trainer battle: a win pays coins and ends the encounter.
    Battle,
    /// Wild encounter: a win opens the capture step.
    Capture,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TurnOwner {
    Player,
    Opponent,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EncounterOutcome {
    InProgress,
    /// Wild opponent fainted. Capture is the only remaining action.
    CaptureReady,
    PlayerWon,
    PlayerLost,
    Fled,
    CaptureSuccess,
}

impl EncounterOutcome {
    /// True once no further player action can change the result.
    pub fn is_terminal(self) -> bool {
        !matches!(self, EncounterOutcome::InProgress | EncounterOutcome::CaptureReady)
    }
}

/// Signal to the host scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition {
    ReturnToOverworld,
}

/// Why an action was ignored. Rejection never mutates state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    NotPlayerTurn,
    EncounterOver,
    MenuOpen,
    NoMenuOpen,
    /// Attack, Switch, Item and Run are disabled while a capture is pending.
    ActionDisabled,
    NoSwitchCandidates,
    NoUsableItems,
    NoCaptureItem,
    CaptureNotAvailable,
}

impl RejectionReason {
    /// Message shown to the player, for the rejections worth explaining.
    pub fn message(self) -> Option<&'static str> {
        match self {
            RejectionReason::NoSwitchCandidates => Some("There is no one else to send out!"),
            RejectionReason::NoUsableItems => Some("You have no usable potions!"),
            RejectionReason::NoCaptureItem => Some("You have no Pokeballs left!"),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    Rejected(RejectionReason),
}

impl ActionOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum EncounterEvent {
    EncounterStarted {
        kind: EncounterKind,
        player: String,
        opponent: String,
    },
    PlayerTurnStarted {
        creature: String,
    },
    OpponentTurnStarted,
    AttackLanded {
        attacker: String,
        target: String,
        damage: u32,
        remaining_hp: u32,
    },
    CreatureFainted {
        creature: String,
        is_player: bool,
    },
    CreatureSwitched {
        old_creature: String,
        new_creature: String,
    },
    ItemUsed {
        item: String,
        effect: EffectKind,
        magnitude: u32,
    },
    CreatureHealed {
        target: String,
        amount: u32,
        new_hp: u32,
    },
    AttackRaised {
        target: String,
        total_buff: u32,
    },
    OpponentAttackLowered {
        target: String,
        total_debuff: u32,
    },
    CoinsAwarded {
        amount: u32,
        new_total: u32,
    },
    CaptureAvailable {
        creature: String,
    },
    CaptureSucceeded {
        creature: String,
    },
    ActionRejected {
        reason: RejectionReason,
    },
    Fled,
    EncounterEnded {
        kind: EncounterKind,
        outcome: EncounterOutcome,
    },
}

impl EncounterEvent {
    /// Formats the event into the line shown in the battle log.
    /// Returns None for silent events.
    pub fn format(&self) -> Option<String> {
        match self {
            EncounterEvent::EncounterStarted { kind, player, opponent } => match kind {
                EncounterKind::Battle => Some(format!("What will {} do?", player)),
                EncounterKind::Capture => Some(format!("A wild {} appeared!", opponent)),
            },
            EncounterEvent::PlayerTurnStarted { creature } => {
                Some(format!("What will {} do?", creature))
            }
            EncounterEvent::OpponentTurnStarted => None,
            EncounterEvent::AttackLanded { attacker, damage, .. } => {
                Some(format!("{} attacks! Deals {} damage!", attacker, damage))
            }
            EncounterEvent::CreatureFainted { creature, .. } => {
                Some(format!("{} fainted!", creature))
            }
            EncounterEvent::CreatureSwitched { old_creature, new_creature } => Some(format!(
                "Come back, {}! Go, {}!",
                old_creature, new_creature
            )),
            EncounterEvent::ItemUsed { item, .. } => Some(format!("Used {}!", item)),
            EncounterEvent::CreatureHealed { target, amount, .. } => {
                Some(format!("{} recovered {} HP!", target, amount))
            }
            EncounterEvent::AttackRaised { target, .. } => {
                Some(format!("{}'s attack rose!", target))
            }
            EncounterEvent::OpponentAttackLowered { target, .. } => {
                Some(format!("{}'s attack fell!", target))
            }
            EncounterEvent::CoinsAwarded { amount, .. } => {
                Some(format!("Got {} coins for winning!", amount))
            }
            EncounterEvent::CaptureAvailable { creature } => {
                Some(format!("{} fainted! Catch it?", creature))
            }
            EncounterEvent::CaptureSucceeded { creature } => Some(format!("Caught {}!", creature)),
            EncounterEvent::ActionRejected { reason } => reason.message().map(str::to_string),
            EncounterEvent::Fled => Some("Got away safely!".to_string()),
            EncounterEvent::EncounterEnded { kind, outcome } => match (kind, outcome) {
                (_, EncounterOutcome::PlayerWon) => Some("You Win!".to_string()),
                (EncounterKind::Battle, EncounterOutcome::PlayerLost) => {
                    Some("You Lose!".to_string())
                }
                (EncounterKind::Capture, EncounterOutcome::PlayerLost) => {
                    Some("You blacked out!".to_string())
                }
                _ => None,
            },
        }
    }
}

/// Ordered record of everything that happened in one encounter.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<EncounterEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: EncounterEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[EncounterEvent] {
        &self.events
    }

    /// Formatted text of every non-silent event, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().filter_map(EncounterEvent::format).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Everything the renderer needs to draw an encounter.
///
/// Both creatures are copies. The roster record of the active creature is
/// only touched by the final write-back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EncounterState {
    pub kind: EncounterKind,
    pub player_creature: CreatureRecord,
    pub opponent_creature: CreatureRecord,
    /// Roster slot the player creature was copied from. `None` for a stand-in.
    pub active_roster_index: Option<usize>,
    pub turn_owner: TurnOwner,
    pub outcome: EncounterOutcome,
    pub log: String,
    pub player_base_attack: u32,
    pub opponent_base_attack: u32,
    pub player_attack_buff: u32,
    pub opponent_attack_debuff: u32,
    pub pending_menu: Option<PendingMenu>,
}

impl EncounterState {
    pub fn new(
        kind: EncounterKind,
        player_creature: CreatureRecord,
        active_roster_index: Option<usize>,
        opponent_creature: CreatureRecord,
        player_base_attack: u32,
        opponent_base_attack: u32,
    ) -> Self {
        Self {
            kind,
            player_creature,
            opponent_creature,
            active_roster_index,
            turn_owner: TurnOwner::Player,
            outcome: EncounterOutcome::InProgress,
            log: String::new(),
            player_base_attack,
            opponent_base_attack,
            player_attack_buff: 0,
            opponent_attack_debuff: 0,
            pending_menu: None,
        }
    }
}
