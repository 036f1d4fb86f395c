pub mod calculation;
pub mod engine;
pub mod menu;
pub mod rng;
pub mod state;
pub mod tables;
pub mod timer;
pub mod validation;

pub use engine::{EncounterAction, EncounterEngine, EncounterInput};
pub use menu::{MenuKind, PendingMenu};
pub use rng::SelectionRng;
pub use state::{
    ActionOutcome, EncounterEvent, EncounterKind, EncounterOutcome, EncounterState, EventLog,
    RejectionReason, SceneTransition, TurnOwner,
};
pub use tables::OpponentTables;

#[cfg(test)]
mod tests;
