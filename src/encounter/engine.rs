use crate::config::EncounterConfig;
use crate::encounter::calculation::{
    calculate_opponent_damage, calculate_player_damage, effect_passes_turn, resolve_item_effect,
};
use crate::encounter::menu::{MenuKind, PendingMenu};
use crate::encounter::rng::SelectionRng;
use crate::encounter::state::{
    ActionOutcome, EncounterEvent, EncounterKind, EncounterOutcome, EncounterState, EventLog,
    RejectionReason, SceneTransition, TurnOwner,
};
use crate::encounter::tables::{default_player_creature, OpponentTables};
use crate::encounter::timer::Countdown;
use crate::encounter::validation::{
    can_attempt_capture, ensure_player_can_act, validate_item_use, validate_switch,
};
use crate::roster::Roster;
use schema::{CreatureRecord, EffectKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A button on the encounter screen.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterAction {
    Attack,
    Switch,
    UseItem,
    Run,
    Capture,
}

/// One frame's worth of player input.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterInput {
    Action(EncounterAction),
    MenuUp,
    MenuDown,
    Confirm,
    Cancel,
}

/// Turn-based resolution of one trainer battle or wild encounter.
///
/// The owning scene drives it with [`handle_input`](Self::handle_input) and
/// [`update`](Self::update) once per frame. Every operation either applies or
/// is rejected without touching state; nothing here returns an error.
#[derive(Debug, Clone)]
pub struct EncounterEngine {
    state: EncounterState,
    config: EncounterConfig,
    events: EventLog,
    opponent_timer: Countdown,
    result_timer: Countdown,
    pending_transition: Option<SceneTransition>,
    transition_sent: bool,
    // HP of roster creatures switched out mid-encounter, keyed by roster index.
    benched_hp: BTreeMap<usize, u32>,
    written_back: bool,
}

impl EncounterEngine {
    /// Create an engine for two explicit creatures.
    pub fn new(
        kind: EncounterKind,
        player_creature: CreatureRecord,
        active_roster_index: Option<usize>,
        opponent_creature: CreatureRecord,
        config: EncounterConfig,
    ) -> Self {
        let player_base_attack = player_creature.base_attack(config.default_player_attack);
        let opponent_base_attack = opponent_creature.base_attack(config.default_opponent_attack);
        let turn_delay = match kind {
            EncounterKind::Battle => config.battle_turn_delay,
            EncounterKind::Capture => config.capture_turn_delay,
        };

        tracing::info!(
            "{} encounter started: {} (lv{}) vs {} (lv{})",
            kind,
            player_creature.name,
            player_creature.level,
            opponent_creature.name,
            opponent_creature.level
        );

        let started = EncounterEvent::EncounterStarted {
            kind,
            player: player_creature.name.clone(),
            opponent: opponent_creature.name.clone(),
        };

        let mut engine = Self {
            state: EncounterState::new(
                kind,
                player_creature,
                active_roster_index,
                opponent_creature,
                player_base_attack,
                opponent_base_attack,
            ),
            opponent_timer: Countdown::new(turn_delay),
            result_timer: Countdown::new(config.result_display),
            config,
            events: EventLog::new(),
            pending_transition: None,
            transition_sent: false,
            benched_hp: BTreeMap::new(),
            written_back: false,
        };
        engine.emit(started);
        engine
    }

    /// Set up an encounter from the roster and the opponent tables.
    ///
    /// The player's creature is drawn uniformly from non-fainted roster
    /// entries; a stand-in is lent when there are none. The opponent is drawn
    /// uniformly from the pool for `kind` and `region`.
    pub fn start(
        kind: EncounterKind,
        roster: &Roster,
        tables: &OpponentTables,
        region: &str,
        config: EncounterConfig,
        rng: &mut SelectionRng,
    ) -> Self {
        let healthy = roster.healthy_indices();
        let chosen = rng
            .pick(healthy.len(), "active creature")
            .and_then(|pick| healthy.get(pick).copied())
            .and_then(|index| roster.creatures.get(index).map(|c| (c.clone(), index)));

        let (player_creature, active_roster_index) = match chosen {
            Some((creature, index)) => (creature, Some(index)),
            None => {
                tracing::info!("No healthy creature in roster, lending a stand-in");
                (default_player_creature(), None)
            }
        };

        let opponent_pick = rng.pick(tables.pool(kind, region).len(), "opponent");
        let opponent_creature = tables.opponent_at(kind, region, opponent_pick);

        Self::new(kind, player_creature, active_roster_index, opponent_creature, config)
    }

    // --- Queries ---

    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn log(&self) -> &str {
        &self.state.log
    }

    pub fn outcome(&self) -> EncounterOutcome {
        self.state.outcome
    }

    pub fn turn_owner(&self) -> TurnOwner {
        self.state.turn_owner
    }

    pub fn pending_menu(&self) -> Option<&PendingMenu> {
        self.state.pending_menu.as_ref()
    }

    /// Buttons that would currently be accepted.
    pub fn legal_actions(&self, roster: &Roster) -> Vec<EncounterAction> {
        if self.state.outcome == EncounterOutcome::CaptureReady {
            return vec![EncounterAction::Capture];
        }
        if ensure_player_can_act(&self.state).is_err() {
            return vec![];
        }

        let mut actions = vec![EncounterAction::Attack];
        if validate_switch(&self.state, roster).is_ok() {
            actions.push(EncounterAction::Switch);
        }
        if validate_item_use(&self.state, roster, &self.config.potion_keyword).is_ok() {
            actions.push(EncounterAction::UseItem);
        }
        actions.push(EncounterAction::Run);
        actions
    }

    // --- Frame driving ---

    pub fn handle_input(&mut self, input: EncounterInput, roster: &mut Roster) -> ActionOutcome {
        match input {
            EncounterInput::Action(EncounterAction::Attack) => self.attack(roster),
            EncounterInput::Action(EncounterAction::Switch) => self.open_switch_menu(roster),
            EncounterInput::Action(EncounterAction::UseItem) => self.open_item_menu(roster),
            EncounterInput::Action(EncounterAction::Run) => self.run(),
            EncounterInput::Action(EncounterAction::Capture) => self.capture(roster),
            EncounterInput::MenuUp => self.menu_up(),
            EncounterInput::MenuDown => self.menu_down(),
            EncounterInput::Confirm => self.confirm(roster),
            EncounterInput::Cancel => self.cancel_menu(),
        }
    }

    /// Advance timers by `dt` seconds.
    ///
    /// Runs the opponent's turn once its delay has elapsed and counts down the
    /// result screen. Returns the scene transition on the frame the encounter
    /// hands control back; the roster write-back happens on that same frame.
    pub fn update(&mut self, dt: f32, roster: &mut Roster) -> Option<SceneTransition> {
        match self.state.outcome {
            EncounterOutcome::InProgress => {
                if self.state.turn_owner == TurnOwner::Opponent && self.opponent_timer.tick(dt) {
                    self.opponent_attack();
                }
            }
            EncounterOutcome::CaptureReady => {}
            _ => {
                if !self.transition_sent && self.result_timer.tick(dt) {
                    self.pending_transition = Some(SceneTransition::ReturnToOverworld);
                }
            }
        }

        let transition = self.pending_transition.take()?;
        self.transition_sent = true;
        self.write_back(roster);
        Some(transition)
    }

    /// Copy final HP back into the roster. Only the first call has an effect.
    ///
    /// Covers the active creature and every creature switched out during the
    /// encounter. A stand-in creature has no roster slot and is skipped.
    pub fn write_back(&mut self, roster: &mut Roster) -> bool {
        if self.written_back {
            return false;
        }
        self.written_back = true;

        let mut final_hp = std::mem::take(&mut self.benched_hp);
        if let Some(index) = self.state.active_roster_index {
            final_hp.insert(index, self.state.player_creature.hp);
        }

        for (index, hp) in final_hp {
            if let Some(creature) = roster.creatures.get_mut(index) {
                creature.hp = hp.min(creature.max_hp);
                tracing::info!("Wrote back {} hp={}", creature.name, creature.hp);
            }
        }
        true
    }

    // --- Player actions ---

    pub fn attack(&mut self, roster: &mut Roster) -> ActionOutcome {
        if let Err(reason) = ensure_player_can_act(&self.state) {
            return self.reject(reason);
        }

        let damage =
            calculate_player_damage(self.state.player_base_attack, self.state.player_attack_buff);
        let remaining_hp = self.state.opponent_creature.take_damage(damage);
        self.emit(EncounterEvent::AttackLanded {
            attacker: self.state.player_creature.name.clone(),
            target: self.state.opponent_creature.name.clone(),
            damage,
            remaining_hp,
        });

        if remaining_hp == 0 {
            self.opponent_defeated(roster);
        } else {
            self.pass_turn_to_opponent();
        }
        ActionOutcome::Applied
    }

    pub fn open_switch_menu(&mut self, roster: &Roster) -> ActionOutcome {
        match validate_switch(&self.state, roster) {
            Ok(candidates) => {
                self.state.pending_menu = PendingMenu::open(MenuKind::Switch, candidates);
                ActionOutcome::Applied
            }
            Err(reason) => self.reject(reason),
        }
    }

    pub fn open_item_menu(&mut self, roster: &Roster) -> ActionOutcome {
        match validate_item_use(&self.state, roster, &self.config.potion_keyword) {
            Ok(items) => {
                self.state.pending_menu = PendingMenu::open(MenuKind::Item, items);
                ActionOutcome::Applied
            }
            Err(reason) => self.reject(reason),
        }
    }

    /// The Run button. Disabled while a capture is pending.
    pub fn run(&mut self) -> ActionOutcome {
        if let Err(reason) = ensure_player_can_act(&self.state) {
            return self.reject(reason);
        }
        self.flee();
        ActionOutcome::Applied
    }

    /// Leave the encounter from any non-terminal state, including a pending
    /// capture. Earlier HP and item changes are kept.
    pub fn abandon(&mut self) -> ActionOutcome {
        if self.state.outcome.is_terminal() {
            return self.reject(RejectionReason::EncounterOver);
        }
        self.flee();
        ActionOutcome::Applied
    }

    pub fn capture(&mut self, roster: &mut Roster) -> ActionOutcome {
        let capture_item = self.config.capture_item_name.clone();
        if let Err(reason) = can_attempt_capture(&self.state, roster, &capture_item) {
            return self.reject(reason);
        }
        if !roster.consume_item(&capture_item) {
            return self.reject(RejectionReason::NoCaptureItem);
        }

        self.state.opponent_creature.restore_full();
        let captured = self.state.opponent_creature.clone();
        let name = captured.name.clone();
        let index = roster.add_creature(captured);
        tracing::info!("Captured {} into roster slot {}", name, index);

        self.emit(EncounterEvent::CaptureSucceeded { creature: name });
        self.finish(EncounterOutcome::CaptureSuccess);
        ActionOutcome::Applied
    }

    // --- Menu handling ---

    pub fn menu_up(&mut self) -> ActionOutcome {
        match self.state.pending_menu.as_mut() {
            Some(menu) => {
                menu.move_up();
                ActionOutcome::Applied
            }
            None => self.reject(RejectionReason::NoMenuOpen),
        }
    }

    pub fn menu_down(&mut self) -> ActionOutcome {
        match self.state.pending_menu.as_mut() {
            Some(menu) => {
                menu.move_down();
                ActionOutcome::Applied
            }
            None => self.reject(RejectionReason::NoMenuOpen),
        }
    }

    /// Close the open menu without side effects.
    pub fn cancel_menu(&mut self) -> ActionOutcome {
        match self.state.pending_menu.take() {
            Some(_) => ActionOutcome::Applied,
            None => self.reject(RejectionReason::NoMenuOpen),
        }
    }

    /// Confirm the menu entry under the cursor. On a finished encounter this
    /// skips the rest of the result screen instead.
    pub fn confirm(&mut self, roster: &mut Roster) -> ActionOutcome {
        let Some(menu) = self.state.pending_menu.take() else {
            if self.state.outcome.is_terminal() && !self.transition_sent {
                self.pending_transition = Some(SceneTransition::ReturnToOverworld);
                return ActionOutcome::Applied;
            }
            return self.reject(RejectionReason::NoMenuOpen);
        };

        match (menu.kind, menu.selected()) {
            (MenuKind::Switch, Some(index)) => self.switch_to(index, roster),
            (MenuKind::Item, Some(index)) => self.use_item(index, roster),
            (_, None) => self.reject(RejectionReason::NoMenuOpen),
        }
    }

    fn switch_to(&mut self, index: usize, roster: &Roster) -> ActionOutcome {
        if let Err(reason) = ensure_player_can_act(&self.state) {
            return self.reject(reason);
        }
        let active_name = self.state.player_creature.name.clone();
        let Some(mut incoming) = roster
            .creatures
            .get(index)
            .filter(|creature| !creature.is_fainted() && creature.name != active_name)
            .cloned()
        else {
            return self.reject(RejectionReason::NoSwitchCandidates);
        };

        // A creature benched earlier this encounter comes back with the HP it left with.
        if let Some(hp) = self.benched_hp.remove(&index) {
            incoming.hp = hp;
        }
        if let Some(outgoing_index) = self.state.active_roster_index {
            self.benched_hp
                .insert(outgoing_index, self.state.player_creature.hp);
        }

        let outgoing = std::mem::replace(&mut self.state.player_creature, incoming);
        self.state.active_roster_index = Some(index);
        self.state.player_attack_buff = 0;
        self.state.player_base_attack = self
            .state
            .player_creature
            .base_attack(self.config.default_player_attack);

        self.emit(EncounterEvent::CreatureSwitched {
            old_creature: outgoing.name,
            new_creature: self.state.player_creature.name.clone(),
        });
        self.pass_turn_to_opponent();
        ActionOutcome::Applied
    }

    fn use_item(&mut self, index: usize, roster: &mut Roster) -> ActionOutcome {
        if let Err(reason) = ensure_player_can_act(&self.state) {
            return self.reject(reason);
        }
        let Some(name) = roster.items.get(index).map(|item| item.name.clone()) else {
            return self.reject(RejectionReason::NoUsableItems);
        };
        // Resolves to the first stack of that name. An empty one is inert.
        let Some(item) = roster.find_item_mut(&name).filter(|item| item.is_available()) else {
            return self.reject(RejectionReason::NoUsableItems);
        };
        let effect = resolve_item_effect(item, self.config.default_heal_amount);
        item.count = item.count.saturating_sub(1);

        self.emit(EncounterEvent::ItemUsed {
            item: name,
            effect: effect.kind,
            magnitude: effect.magnitude,
        });

        match effect.kind {
            EffectKind::Heal => {
                let amount = self.state.player_creature.heal(effect.magnitude);
                self.emit(EncounterEvent::CreatureHealed {
                    target: self.state.player_creature.name.clone(),
                    amount,
                    new_hp: self.state.player_creature.hp,
                });
            }
            EffectKind::AttackBuff => {
                self.state.player_attack_buff =
                    self.state.player_attack_buff.saturating_add(effect.magnitude);
                self.emit(EncounterEvent::AttackRaised {
                    target: self.state.player_creature.name.clone(),
                    total_buff: self.state.player_attack_buff,
                });
            }
            EffectKind::AttackDebuff => {
                self.state.opponent_attack_debuff =
                    self.state.opponent_attack_debuff.saturating_add(effect.magnitude);
                self.emit(EncounterEvent::OpponentAttackLowered {
                    target: self.state.opponent_creature.name.clone(),
                    total_debuff: self.state.opponent_attack_debuff,
                });
            }
        }

        if effect_passes_turn(effect.kind) {
            self.pass_turn_to_opponent();
        }
        ActionOutcome::Applied
    }

    // --- Resolution ---

    fn opponent_attack(&mut self) {
        let damage =
            calculate_opponent_damage(self.state.opponent_base_attack, self.state.opponent_attack_debuff);
        let remaining_hp = self.state.player_creature.take_damage(damage);
        self.emit(EncounterEvent::AttackLanded {
            attacker: self.state.opponent_creature.name.clone(),
            target: self.state.player_creature.name.clone(),
            damage,
            remaining_hp,
        });

        if remaining_hp == 0 {
            self.emit(EncounterEvent::CreatureFainted {
                creature: self.state.player_creature.name.clone(),
                is_player: true,
            });
            self.finish(EncounterOutcome::PlayerLost);
        } else {
            self.state.turn_owner = TurnOwner::Player;
            self.emit(EncounterEvent::PlayerTurnStarted {
                creature: self.state.player_creature.name.clone(),
            });
        }
    }

    fn opponent_defeated(&mut self, roster: &mut Roster) {
        let name = self.state.opponent_creature.name.clone();
        self.emit(EncounterEvent::CreatureFainted {
            creature: name.clone(),
            is_player: false,
        });

        match self.state.kind {
            EncounterKind::Battle => {
                let amount = self.config.coin_reward;
                let new_total = roster.add_item(&self.config.coin_item_name, amount, None);
                self.emit(EncounterEvent::CoinsAwarded { amount, new_total });
                self.finish(EncounterOutcome::PlayerWon);
            }
            EncounterKind::Capture => {
                self.state.outcome = EncounterOutcome::CaptureReady;
                self.emit(EncounterEvent::CaptureAvailable { creature: name });
            }
        }
    }

    fn pass_turn_to_opponent(&mut self) {
        self.state.turn_owner = TurnOwner::Opponent;
        self.opponent_timer.restart();
        self.emit(EncounterEvent::OpponentTurnStarted);
    }

    fn flee(&mut self) {
        self.state.pending_menu = None;
        self.emit(EncounterEvent::Fled);
        self.finish(EncounterOutcome::Fled);
        self.pending_transition = Some(SceneTransition::ReturnToOverworld);
    }

    fn finish(&mut self, outcome: EncounterOutcome) {
        self.state.outcome = outcome;
        self.result_timer.restart();
        tracing::info!("{} encounter ended: {}", self.state.kind, outcome);
        self.emit(EncounterEvent::EncounterEnded {
            kind: self.state.kind,
            outcome,
        });
    }

    fn reject(&mut self, reason: RejectionReason) -> ActionOutcome {
        match reason.message() {
            Some(message) => tracing::warn!("Action rejected: {}", message),
            None => tracing::debug!("Action rejected: {:?}", reason),
        }
        self.emit(EncounterEvent::ActionRejected { reason });
        ActionOutcome::Rejected(reason)
    }

    fn emit(&mut self, event: EncounterEvent) {
        tracing::debug!(?event, "encounter event");
        if let Some(message) = event.format() {
            self.state.log = message;
        }
        self.events.push(event);
    }
}
