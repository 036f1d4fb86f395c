use crate::config::NavigationConfig;
use crate::navigation::destinations::Destination;
use crate::navigation::indicators::{route_indicators, RouteIndicator};
use crate::navigation::pathfinder::{find_path, CollisionOracle};
use schema::GridCell;
use serde::{Deserialize, Serialize};

/// Current goal and the route towards it. Empty when idle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathState {
    pub destination: Option<GridCell>,
    pub route: Vec<GridCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationStatus {
    /// No destination set.
    Idle,
    /// The player stepped onto the destination; navigation stopped.
    Arrived,
    Following,
    /// A destination is set but no route leads there from the player's tile.
    Unreachable,
}

/// Keeps a route fresh while the player walks it.
#[derive(Debug, Clone)]
pub struct PathTracker {
    state: PathState,
    config: NavigationConfig,
}

impl PathTracker {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            state: PathState::default(),
            config,
        }
    }

    pub fn state(&self) -> &PathState {
        &self.state
    }

    pub fn destination(&self) -> Option<GridCell> {
        self.state.destination
    }

    pub fn route(&self) -> &[GridCell] {
        &self.state.route
    }

    pub fn is_navigating(&self) -> bool {
        self.state.destination.is_some()
    }

    /// Starts guiding towards `destination`. The route is computed on the next update.
    pub fn set_destination(&mut self, destination: GridCell) {
        tracing::info!("Navigating to {:?}", destination);
        self.state.destination = Some(destination);
        self.state.route.clear();
    }

    pub fn navigate_to(&mut self, destination: &Destination) {
        self.set_destination(destination.cell);
    }

    pub fn cancel(&mut self) {
        self.state = PathState::default();
    }

    /// Per-frame update with the player's current tile.
    ///
    /// Reaching the destination stops navigation before anything else is
    /// checked. Otherwise the route is recomputed whenever it is empty or
    /// does not start on the player's tile.
    pub fn update<O>(&mut self, player_cell: GridCell, oracle: &O) -> NavigationStatus
    where
        O: CollisionOracle + ?Sized,
    {
        let Some(destination) = self.state.destination else {
            return NavigationStatus::Idle;
        };

        if player_cell == destination {
            tracing::info!("Arrived at {:?}", destination);
            self.cancel();
            return NavigationStatus::Arrived;
        }

        if self.state.route.first() != Some(&player_cell) {
            self.state.route = find_path(player_cell, destination, oracle, self.config.search_limit);
            tracing::debug!(
                "Recomputed route from {:?}: {} cells",
                player_cell,
                self.state.route.len()
            );
        }

        if self.state.route.is_empty() {
            NavigationStatus::Unreachable
        } else {
            NavigationStatus::Following
        }
    }

    /// Same as [`update`](Self::update) for a pixel-space position.
    pub fn update_from_pixels<O>(&mut self, x: f32, y: f32, oracle: &O) -> NavigationStatus
    where
        O: CollisionOracle + ?Sized,
    {
        let cell = GridCell::from_pixels(x, y, self.config.tile_size);
        self.update(cell, oracle)
    }

    /// Arrows to draw along the current route.
    pub fn indicators(&self) -> Vec<RouteIndicator> {
        route_indicators(&self.state.route, self.config.max_indicators)
    }
}
