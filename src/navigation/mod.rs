//! Guidance from the player's tile to a chosen destination.

pub mod destinations;
pub mod indicators;
pub mod pathfinder;
pub mod tracker;

pub use destinations::{Destination, DESTINATIONS};
pub use indicators::{route_indicators, RouteIndicator};
pub use pathfinder::{find_path, CollisionMap, CollisionOracle};
pub use tracker::{NavigationStatus, PathState, PathTracker};
