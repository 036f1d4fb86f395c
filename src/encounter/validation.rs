use crate::encounter::state::{EncounterKind, EncounterOutcome, EncounterState, RejectionReason, TurnOwner};
use crate::roster::Roster;

/// Check if capture attempts are allowed for this encounter kind
pub fn is_capture_allowed(kind: EncounterKind) -> bool {
    matches!(kind, EncounterKind::Capture)
}

/// Gate shared by Attack, Switch, UseItem and Run.
pub fn ensure_player_can_act(state: &EncounterState) -> Result<(), RejectionReason> {
    match state.outcome {
        EncounterOutcome::CaptureReady => return Err(RejectionReason::ActionDisabled),
        outcome if outcome.is_terminal() => return Err(RejectionReason::EncounterOver),
        _ => {}
    }
    if state.pending_menu.is_some() {
        return Err(RejectionReason::MenuOpen);
    }
    if state.turn_owner != TurnOwner::Player {
        return Err(RejectionReason::NotPlayerTurn);
    }
    Ok(())
}

/// Roster indices the player may switch to.
pub fn validate_switch(
    state: &EncounterState,
    roster: &Roster,
) -> Result<Vec<usize>, RejectionReason> {
    ensure_player_can_act(state)?;
    let candidates = roster.switch_candidates(&state.player_creature.name);
    if candidates.is_empty() {
        return Err(RejectionReason::NoSwitchCandidates);
    }
    Ok(candidates)
}

/// Item indices the player may use.
pub fn validate_item_use(
    state: &EncounterState,
    roster: &Roster,
    keyword: &str,
) -> Result<Vec<usize>, RejectionReason> {
    ensure_player_can_act(state)?;
    let usable = roster.usable_item_indices(keyword);
    if usable.is_empty() {
        return Err(RejectionReason::NoUsableItems);
    }
    Ok(usable)
}

/// Validate if a capture attempt can be made with the named capture item.
pub fn can_attempt_capture(
    state: &EncounterState,
    roster: &Roster,
    capture_item: &str,
) -> Result<(), RejectionReason> {
    if !is_capture_allowed(state.kind) {
        return Err(RejectionReason::CaptureNotAvailable);
    }
    match state.outcome {
        EncounterOutcome::CaptureReady => {}
        outcome if outcome.is_terminal() => return Err(RejectionReason::EncounterOver),
        _ => return Err(RejectionReason::CaptureNotAvailable),
    }
    match roster.find_item(capture_item) {
        Some(item) if item.is_available() => Ok(()),
        _ => Err(RejectionReason::NoCaptureItem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounter::menu::{MenuKind, PendingMenu};
    use schema::{CreatureRecord, ItemRecord};

    fn create_test_state(kind: EncounterKind) -> EncounterState {
        EncounterState::new(
            kind,
            CreatureRecord::new("Pikachu", 100, 100, 25),
            Some(0),
            CreatureRecord::new("Weedle", 38, 38, 5),
            20,
            15,
        )
    }

    #[test]
    fn test_is_capture_allowed() {
        assert!(is_capture_allowed(EncounterKind::Capture));
        assert!(!is_capture_allowed(EncounterKind::Battle));
    }

    #[test]
    fn test_gate_order() {
        let mut state = create_test_state(EncounterKind::Capture);
        assert_eq!(ensure_player_can_act(&state), Ok(()));

        state.turn_owner = TurnOwner::Opponent;
        assert_eq!(ensure_player_can_act(&state), Err(RejectionReason::NotPlayerTurn));

        state.pending_menu = PendingMenu::open(MenuKind::Item, vec![0]);
        assert_eq!(ensure_player_can_act(&state), Err(RejectionReason::MenuOpen));

        state.outcome = EncounterOutcome::CaptureReady;
        assert_eq!(ensure_player_can_act(&state), Err(RejectionReason::ActionDisabled));

        state.outcome = EncounterOutcome::Fled;
        assert_eq!(ensure_player_can_act(&state), Err(RejectionReason::EncounterOver));
    }

    #[test]
    fn test_capture_requires_pending_capture_and_ball() {
        let mut state = create_test_state(EncounterKind::Capture);
        let mut roster = Roster::new(vec![], vec![ItemRecord::new("Pokeball", 0)]);

        assert_eq!(
            can_attempt_capture(&state, &roster, "Pokeball"),
            Err(RejectionReason::CaptureNotAvailable)
        );

        state.outcome = EncounterOutcome::CaptureReady;
        assert_eq!(
            can_attempt_capture(&state, &roster, "Pokeball"),
            Err(RejectionReason::NoCaptureItem)
        );

        roster.items[0].count = 1;
        assert_eq!(can_attempt_capture(&state, &roster, "Pokeball"), Ok(()));
    }

    #[test]
    fn test_capture_never_allowed_in_battle() {
        let mut state = create_test_state(EncounterKind::Battle);
        state.outcome = EncounterOutcome::CaptureReady;
        let roster = Roster::new(vec![], vec![ItemRecord::new("Pokeball", 5)]);
        assert_eq!(
            can_attempt_capture(&state, &roster, "Pokeball"),
            Err(RejectionReason::CaptureNotAvailable)
        );
    }
}
