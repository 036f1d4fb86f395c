//! Tile Quest Engine
//!
//! Turn-based encounter resolution and overworld navigation for a 2D tile
//! RPG. Rendering, audio and input live with the host; this crate owns the
//! state machines and hands the host plain state to draw.

// --- MODULE DECLARATIONS ---
pub mod config;
pub mod encounter;
pub mod errors;
pub mod navigation;
pub mod roster;
pub mod save;
pub mod shop;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    CreatureRecord, Direction, EffectKind, GridCell, ItemEffect, ItemRecord, MapDimensions,
    PLACEHOLDER_SPRITE,
};

// --- From this crate's modules (`src/`) ---

// Encounter engine and the state it exposes.
pub use encounter::{
    ActionOutcome, EncounterAction, EncounterEngine, EncounterEvent, EncounterInput,
    EncounterKind, EncounterOutcome, EncounterState, OpponentTables, RejectionReason,
    SceneTransition, SelectionRng, TurnOwner,
};

// Navigation.
pub use navigation::{
    find_path, route_indicators, CollisionMap, CollisionOracle, NavigationStatus, PathTracker,
    RouteIndicator, DESTINATIONS,
};

pub use config::GameConfig;
pub use roster::Roster;
pub use save::SaveData;
pub use shop::{PurchaseOutcome, Shop};

// Crate-specific error and result types.
pub use errors::{ConfigError, ConfigResult, GameError, GameResult, SaveDataError, SaveDataResult};
