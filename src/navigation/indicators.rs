use schema::{Direction, GridCell};
use serde::{Deserialize, Serialize};

/// One arrow drawn on the overworld, placed on the cell it points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteIndicator {
    pub cell: GridCell,
    pub direction: Direction,
}

/// Arrows for the first `limit` steps of `route`.
pub fn route_indicators(route: &[GridCell], limit: usize) -> Vec<RouteIndicator> {
    route
        .windows(2)
        .take(limit)
        .map(|step| RouteIndicator {
            cell: step[1],
            direction: Direction::between(step[0], step[1]),
        })
        .collect()
}
