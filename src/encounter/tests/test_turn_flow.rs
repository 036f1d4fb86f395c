use crate::encounter::engine::{EncounterAction, EncounterInput};
use crate::encounter::state::{EncounterKind, EncounterOutcome, SceneTransition, TurnOwner};
use crate::encounter::tests::common::{
    assert_applied, create_test_encounter, create_test_roster, potion, TestCreatureBuilder,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(EncounterKind::Battle, 0.9, 0.2)]
#[case(EncounterKind::Capture, 1.4, 0.2)]
fn test_opponent_acts_after_turn_delay(
    #[case] kind: EncounterKind,
    #[case] first_tick: f32,
    #[case] second_tick: f32,
) {
    let mut roster = create_test_roster(
        vec![TestCreatureBuilder::new("Pikachu", 100).with_attack(20).build()],
        vec![],
    );
    let opponent = TestCreatureBuilder::new("Rattata", 400).with_attack(15).build();
    let mut engine = create_test_encounter(kind, &roster, opponent);

    engine.attack(&mut roster);

    assert_eq!(engine.update(first_tick, &mut roster), None);
    assert_eq!(engine.turn_owner(), TurnOwner::Opponent);
    assert_eq!(engine.state().player_creature.hp, 100);

    assert_eq!(engine.update(second_tick, &mut roster), None);
    assert_eq!(engine.turn_owner(), TurnOwner::Player);
    assert_eq!(engine.state().player_creature.hp, 85);
}

#[test]
fn test_update_idle_on_player_turn() {
    let mut roster = create_test_roster(vec![TestCreatureBuilder::new("Pikachu", 100).build()], vec![]);
    let opponent = TestCreatureBuilder::new("Rattata", 400).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);
    let before = engine.state().clone();

    assert_eq!(engine.update(30.0, &mut roster), None);
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_result_screen_returns_once_after_delay() {
    let mut roster = create_test_roster(
        vec![TestCreatureBuilder::new("Pikachu", 100).with_attack(50).build()],
        vec![],
    );
    let opponent = TestCreatureBuilder::new("Caterpie", 35).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    engine.attack(&mut roster);
    assert_eq!(engine.outcome(), EncounterOutcome::PlayerWon);

    assert_eq!(engine.update(1.0, &mut roster), None);
    assert_eq!(engine.update(2.0, &mut roster), Some(SceneTransition::ReturnToOverworld));
    assert_eq!(engine.update(5.0, &mut roster), None);
}

#[test]
fn test_confirm_skips_result_screen() {
    let mut roster = create_test_roster(
        vec![TestCreatureBuilder::new("Pikachu", 100).with_attack(50).build()],
        vec![],
    );
    let opponent = TestCreatureBuilder::new("Caterpie", 35).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    engine.attack(&mut roster);
    assert_applied(engine.handle_input(EncounterInput::Confirm, &mut roster));
    assert_eq!(engine.update(0.0, &mut roster), Some(SceneTransition::ReturnToOverworld));
}

#[test]
fn test_run_returns_on_same_frame_and_writes_back() {
    let mut roster = create_test_roster(
        vec![TestCreatureBuilder::new("Pikachu", 100).with_attack(20).build()],
        vec![potion(1)],
    );
    let opponent = TestCreatureBuilder::new("Rattata", 400).with_attack(15).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    engine.attack(&mut roster);
    engine.update(1.0, &mut roster);
    assert_applied(engine.handle_input(EncounterInput::Action(EncounterAction::Run), &mut roster));

    assert_eq!(engine.outcome(), EncounterOutcome::Fled);
    assert_eq!(engine.log(), "Got away safely!");
    assert_eq!(engine.update(0.0, &mut roster), Some(SceneTransition::ReturnToOverworld));
    assert_eq!(roster.creatures[0].hp, 85);
}

#[test]
fn test_write_back_happens_only_once() {
    let mut roster = create_test_roster(
        vec![TestCreatureBuilder::new("Pikachu", 100).with_attack(20).build()],
        vec![],
    );
    let opponent = TestCreatureBuilder::new("Rattata", 400).with_attack(15).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    engine.attack(&mut roster);
    engine.update(1.0, &mut roster);
    engine.run();
    engine.update(0.0, &mut roster);
    assert_eq!(roster.creatures[0].hp, 85);

    roster.creatures[0].hp = 100;
    assert!(!engine.write_back(&mut roster));
    assert_eq!(roster.creatures[0].hp, 100);
}

#[test]
fn test_legal_actions_follow_roster_contents() {
    let mut roster = create_test_roster(
        vec![
            TestCreatureBuilder::new("Pikachu", 100).with_attack(20).build(),
            TestCreatureBuilder::new("Bulbasaur", 80).build(),
        ],
        vec![potion(1)],
    );
    let opponent = TestCreatureBuilder::new("Rattata", 400).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    assert_eq!(
        engine.legal_actions(&roster),
        vec![
            EncounterAction::Attack,
            EncounterAction::Switch,
            EncounterAction::UseItem,
            EncounterAction::Run
        ]
    );

    engine.attack(&mut roster);
    assert!(engine.legal_actions(&roster).is_empty());

    engine.update(1.0, &mut roster);
    roster.items.clear();
    roster.creatures.truncate(1);
    assert_eq!(
        engine.legal_actions(&roster),
        vec![EncounterAction::Attack, EncounterAction::Run]
    );
}
