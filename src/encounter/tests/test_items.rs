use crate::encounter::engine::EncounterInput;
use crate::encounter::menu::MenuKind;
use crate::encounter::state::{EncounterKind, RejectionReason, TurnOwner};
use crate::encounter::tests::common::{
    assert_applied, assert_rejected, create_test_encounter, create_test_roster, potion,
    run_opponent_turn, TestCreatureBuilder,
};
use pretty_assertions::assert_eq;
use schema::{EffectKind, ItemRecord};

fn wounded_pikachu() -> schema::CreatureRecord {
    TestCreatureBuilder::new("Pikachu", 100)
        .with_hp(50)
        .with_attack(20)
        .build()
}

#[test]
fn test_potion_heals_and_passes_turn() {
    let mut roster = create_test_roster(vec![wounded_pikachu()], vec![potion(1)]);
    let opponent = TestCreatureBuilder::new("Rattata", 400).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    assert_applied(engine.open_item_menu(&roster));
    assert_eq!(engine.pending_menu().map(|menu| menu.kind), Some(MenuKind::Item));
    assert_applied(engine.confirm(&mut roster));

    assert_eq!(engine.state().player_creature.hp, 70);
    assert_eq!(roster.item_count("Potion"), 0);
    assert_eq!(engine.turn_owner(), TurnOwner::Opponent);
    assert_eq!(engine.pending_menu(), None);
    assert_eq!(engine.log(), "Pikachu recovered 20 HP!");
}

#[test]
fn test_heal_capped_at_max_hp() {
    let mut roster = create_test_roster(
        vec![TestCreatureBuilder::new("Pikachu", 100).with_hp(95).build()],
        vec![potion(2)],
    );
    let opponent = TestCreatureBuilder::new("Rattata", 400).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    engine.open_item_menu(&roster);
    engine.confirm(&mut roster);

    assert_eq!(engine.state().player_creature.hp, 100);
    assert_eq!(roster.item_count("Potion"), 1);
}

#[test]
fn test_item_without_effect_heals_default_amount() {
    let mut roster = create_test_roster(vec![wounded_pikachu()], vec![ItemRecord::new("Potion", 1)]);
    let opponent = TestCreatureBuilder::new("Rattata", 400).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    engine.open_item_menu(&roster);
    engine.confirm(&mut roster);

    assert_eq!(engine.state().player_creature.hp, 70);
}

#[test]
fn test_debuff_keeps_player_turn_and_floors_damage() {
    let mut roster = create_test_roster(
        vec![wounded_pikachu()],
        vec![ItemRecord::new("Potion of Weakness", 1).with_effect(EffectKind::AttackDebuff, 40)],
    );
    let opponent = TestCreatureBuilder::new("Rattata", 400).with_attack(15).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    engine.open_item_menu(&roster);
    assert_applied(engine.confirm(&mut roster));

    assert_eq!(engine.turn_owner(), TurnOwner::Player);
    assert_eq!(engine.state().opponent_attack_debuff, 40);
    assert_eq!(engine.log(), "Rattata's attack fell!");

    engine.attack(&mut roster);
    run_opponent_turn(&mut engine, &mut roster);
    assert_eq!(engine.state().player_creature.hp, 49);
}

#[test]
fn test_buff_passes_turn_and_raises_damage() {
    let mut roster = create_test_roster(
        vec![wounded_pikachu()],
        vec![ItemRecord::new("X Attack Potion", 1).with_effect(EffectKind::AttackBuff, 10)],
    );
    let opponent = TestCreatureBuilder::new("Rattata", 400).with_attack(5).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    engine.open_item_menu(&roster);
    engine.confirm(&mut roster);
    assert_eq!(engine.turn_owner(), TurnOwner::Opponent);

    run_opponent_turn(&mut engine, &mut roster);
    engine.attack(&mut roster);
    assert_eq!(engine.state().opponent_creature.hp, 370);
}

#[test]
fn test_item_menu_rejected_without_usable_potions() {
    let roster = create_test_roster(
        vec![wounded_pikachu()],
        vec![potion(0), ItemRecord::new("Pokeball", 3)],
    );
    let opponent = TestCreatureBuilder::new("Rattata", 400).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    assert_rejected(engine.open_item_menu(&roster), RejectionReason::NoUsableItems);
    assert_eq!(engine.log(), "You have no usable potions!");
    assert_eq!(engine.pending_menu(), None);
    assert_eq!(engine.turn_owner(), TurnOwner::Player);
}

#[test]
fn test_empty_first_stack_shadows_later_duplicate() {
    let mut roster = create_test_roster(vec![wounded_pikachu()], vec![potion(0), potion(3)]);
    let opponent = TestCreatureBuilder::new("Rattata", 400).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    assert_rejected(engine.open_item_menu(&roster), RejectionReason::NoUsableItems);
    assert_rejected(engine.confirm(&mut roster), RejectionReason::NoMenuOpen);

    assert_eq!(engine.state().player_creature.hp, 50);
    assert_eq!(roster.items[0].count, 0);
    assert_eq!(roster.items[1].count, 3);
    assert_eq!(engine.turn_owner(), TurnOwner::Player);
}

#[test]
fn test_every_heal_consumes_a_unit() {
    let mut roster = create_test_roster(
        vec![TestCreatureBuilder::new("Pikachu", 100).with_hp(10).build()],
        vec![potion(1), potion(1)],
    );
    let opponent = TestCreatureBuilder::new("Rattata", 400).with_attack(1).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    let mut heals = 0;
    for _ in 0..5 {
        if engine.open_item_menu(&roster).is_applied() && engine.confirm(&mut roster).is_applied() {
            heals += 1;
        }
        run_opponent_turn(&mut engine, &mut roster);
    }

    assert_eq!(heals, 1);
    assert_eq!(roster.items[0].count, 0);
    assert_eq!(roster.items[1].count, 1);
    assert_eq!(engine.state().player_creature.hp, 29);
}

#[test]
fn test_confirm_rejects_stack_emptied_after_menu_opened() {
    let mut roster = create_test_roster(vec![wounded_pikachu()], vec![potion(1)]);
    let opponent = TestCreatureBuilder::new("Rattata", 400).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    assert_applied(engine.open_item_menu(&roster));
    roster.items[0].count = 0;

    assert_rejected(engine.confirm(&mut roster), RejectionReason::NoUsableItems);
    assert_eq!(engine.state().player_creature.hp, 50);
    assert_eq!(roster.items[0].count, 0);
    assert_eq!(engine.turn_owner(), TurnOwner::Player);
}

#[test]
fn test_menu_cursor_selects_second_item() {
    let mut roster = create_test_roster(
        vec![wounded_pikachu()],
        vec![
            potion(1),
            ItemRecord::new("Super Potion", 1).with_effect(EffectKind::Heal, 50),
        ],
    );
    let opponent = TestCreatureBuilder::new("Rattata", 400).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    engine.handle_input(EncounterInput::Action(crate::encounter::EncounterAction::UseItem), &mut roster);
    engine.handle_input(EncounterInput::MenuDown, &mut roster);
    engine.handle_input(EncounterInput::Confirm, &mut roster);

    assert_eq!(engine.state().player_creature.hp, 100);
    assert_eq!(roster.item_count("Potion"), 1);
    assert_eq!(roster.item_count("Super Potion"), 0);
}

#[test]
fn test_cancel_closes_menu_without_side_effects() {
    let mut roster = create_test_roster(vec![wounded_pikachu()], vec![potion(1)]);
    let opponent = TestCreatureBuilder::new("Rattata", 400).build();
    let mut engine = create_test_encounter(EncounterKind::Battle, &roster, opponent);

    engine.open_item_menu(&roster);
    assert_rejected(engine.attack(&mut roster), RejectionReason::MenuOpen);
    assert_applied(engine.cancel_menu());

    assert_eq!(engine.pending_menu(), None);
    assert_eq!(roster.item_count("Potion"), 1);
    assert_eq!(engine.state().player_creature.hp, 50);
    assert_eq!(engine.turn_owner(), TurnOwner::Player);
    assert_rejected(engine.cancel_menu(), RejectionReason::NoMenuOpen);
}
