// Tile Quest Schema - Shared record definitions
// This crate contains the plain data records that both the encounter engine
// and the navigation engine read, mutate and persist. Everything here is
// serializable to a flat key-value shape.

// Re-export the main types
pub use creature_data::*;
pub use grid::*;
pub use item_data::*;

pub mod creature_data;
pub mod grid;
pub mod item_data;

/// Sprite reference used whenever a record carries no sprite of its own.
pub const PLACEHOLDER_SPRITE: &str = "placeholder.png";
