use std::path::Path;
use tile_quest::encounter::tables::DEFAULT_REGION;
use tile_quest::shop::default_templates;
use tile_quest::{
    CollisionMap, CreatureRecord, EncounterAction, EncounterEngine, EncounterInput, EncounterKind,
    GameConfig, GameResult, GridCell, ItemRecord, NavigationStatus, OpponentTables, PathTracker,
    PurchaseOutcome, Roster, SaveData, SelectionRng, Shop, DESTINATIONS,
};
use tracing_subscriber::EnvFilter;

const FRAME_SECONDS: f32 = 0.25;
const MAX_FRAMES: usize = 10_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> GameResult<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "tile_quest.ron".to_string());
    let save_path = args.next();

    let config = GameConfig::load_or_default(Path::new(&config_path))?;
    let mut roster = match &save_path {
        Some(path) => SaveData::load(Path::new(path))?.roster,
        None => starter_roster(),
    };
    let mut rng = SelectionRng::new_random();

    println!("=== Trainer battle ===");
    run_encounter(EncounterKind::Battle, &config, &mut roster, &mut rng);
    println!();

    println!("=== Wild encounter ===");
    run_encounter(EncounterKind::Capture, &config, &mut roster, &mut rng);
    println!();

    println!("=== Shop ===");
    run_shop(&config, &mut roster, &mut rng);
    println!();

    println!("=== GPS ===");
    run_navigation(&config);
    println!();

    print_roster(&roster);

    if let Some(path) = save_path {
        SaveData::new(roster).store(Path::new(&path))?;
    }
    Ok(())
}

fn starter_roster() -> Roster {
    Roster::new(
        vec![
            CreatureRecord::new("Pikachu", 100, 100, 25)
                .with_attack(20)
                .with_sprite("menu_sprites/menusprite1.png"),
            CreatureRecord::new("Bulbasaur", 90, 90, 20)
                .with_attack(16)
                .with_sprite("menu_sprites/menusprite2.png"),
        ],
        vec![
            ItemRecord::new("Coins", 150),
            ItemRecord::new("Potion", 2).with_sprite("ingame_ui/potion.png"),
            ItemRecord::new("Pokeball", 1).with_sprite("ingame_ui/ball.png"),
        ],
    )
}

/// Plays one encounter with a simple autopilot: heal when low, otherwise attack.
fn run_encounter(kind: EncounterKind, config: &GameConfig, roster: &mut Roster, rng: &mut SelectionRng) {
    let tables = OpponentTables::default();
    let mut engine = EncounterEngine::start(
        kind,
        roster,
        &tables,
        DEFAULT_REGION,
        config.encounter.clone(),
        rng,
    );
    let mut last_log = String::new();

    for _ in 0..MAX_FRAMES {
        let actions = engine.legal_actions(roster);
        let low_hp = engine.state().player_creature.hp_below_percent(40);

        if actions.contains(&EncounterAction::Capture) {
            engine.handle_input(EncounterInput::Action(EncounterAction::Capture), roster);
            if !engine.outcome().is_terminal() {
                engine.abandon();
            }
        } else if actions.contains(&EncounterAction::UseItem) && low_hp {
            engine.handle_input(EncounterInput::Action(EncounterAction::UseItem), roster);
            engine.handle_input(EncounterInput::Confirm, roster);
        } else if actions.contains(&EncounterAction::Attack) {
            engine.handle_input(EncounterInput::Action(EncounterAction::Attack), roster);
        }

        if engine.log() != last_log {
            println!("  {}", engine.log());
            last_log = engine.log().to_string();
        }

        if let Some(transition) = engine.update(FRAME_SECONDS, roster) {
            println!("  -> {:?} after {} events", transition, engine.events().len());
            return;
        }
    }

    tracing::warn!("Encounter did not finish within {} frames", MAX_FRAMES);
    engine.write_back(roster);
}

fn run_shop(config: &GameConfig, roster: &mut Roster, rng: &mut SelectionRng) {
    let mut shop = Shop::new(
        default_templates(),
        config.shop.clone(),
        config.encounter.coin_item_name.clone(),
        rng,
    );

    for listing in shop.listings() {
        println!(
            "  {:<10} {:>4} G  x{}  {}",
            listing.name,
            listing.price,
            listing.stock,
            shop.description(listing).unwrap_or_default()
        );
    }
    println!("  Next refresh: {}", shop.time_until_refresh());

    match shop.buy_selected(roster) {
        PurchaseOutcome::Purchased { item, coins_left, owned } => {
            println!("  Bought {} (now {}), {} coins left", item, owned, coins_left)
        }
        PurchaseOutcome::Rejected(reason) => println!("  Purchase refused: {:?}", reason),
    }
}

/// Walks the player along the GPS route on a small walled map.
fn run_navigation(config: &GameConfig) {
    let mut map = CollisionMap::unbounded();
    for y in 0..20 {
        map.block(GridCell::new(30, y));
    }

    let Some(shop) = DESTINATIONS.iter().find(|destination| destination.name == "Shop") else {
        return;
    };
    let mut tracker = PathTracker::new(config.navigation.clone());
    tracker.navigate_to(shop);

    let mut player = GridCell::new(20, 10);
    for step in 0..MAX_FRAMES {
        match tracker.update(player, &map) {
            NavigationStatus::Arrived => {
                println!("  Arrived at {} after {} steps", shop.name, step);
                return;
            }
            NavigationStatus::Unreachable => {
                println!("  {} is unreachable", shop.name);
                return;
            }
            NavigationStatus::Idle => return,
            NavigationStatus::Following => {}
        }

        if step == 0 {
            let arrows: Vec<String> = tracker
                .indicators()
                .iter()
                .map(|indicator| indicator.direction.to_string())
                .collect();
            println!("  Route: {} cells, first arrows: {}", tracker.route().len(), arrows.join(" "));
        }

        match tracker.route().get(1) {
            Some(next) => player = *next,
            None => return,
        }
    }
}

fn print_roster(roster: &Roster) {
    println!("=== Roster ===");
    for creature in &roster.creatures {
        println!(
            "  {:<10} lv{:<3} {}/{}",
            creature.name, creature.level, creature.hp, creature.max_hp
        );
    }
    for item in &roster.items {
        println!("  {:<10} x{}", item.name, item.count);
    }
}
