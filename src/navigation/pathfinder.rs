use schema::{GridCell, MapDimensions};
use std::collections::{HashMap, HashSet, VecDeque};

/// Collision query supplied by the map layer.
pub trait CollisionOracle {
    fn is_blocked(&self, cell: GridCell) -> bool;

    /// Finite bounds, when the map has any. Cells outside are never entered.
    fn dimensions(&self) -> Option<MapDimensions> {
        None
    }

    fn contains(&self, cell: GridCell) -> bool {
        cell.is_non_negative() && self.dimensions().map_or(true, |dims| dims.contains(cell))
    }
}

impl<F> CollisionOracle for F
where
    F: Fn(GridCell) -> bool,
{
    fn is_blocked(&self, cell: GridCell) -> bool {
        self(cell)
    }
}

/// A bounded map with an explicit set of blocked cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionMap {
    dimensions: Option<MapDimensions>,
    blocked: HashSet<GridCell>,
}

impl CollisionMap {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions: Some(dimensions),
            blocked: HashSet::new(),
        }
    }

    /// A map with no right or bottom edge.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Builds a map from text rows where `#` marks a blocked tile.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0) as u32;
        let mut map = Self::new(MapDimensions::new(width, height));
        for (y, row) in rows.iter().enumerate() {
            for (x, tile) in row.chars().enumerate() {
                if tile == '#' {
                    map.block(GridCell::new(x as i32, y as i32));
                }
            }
        }
        map
    }

    pub fn block(&mut self, cell: GridCell) {
        self.blocked.insert(cell);
    }

    pub fn unblock(&mut self, cell: GridCell) {
        self.blocked.remove(&cell);
    }
}

impl CollisionOracle for CollisionMap {
    fn is_blocked(&self, cell: GridCell) -> bool {
        self.blocked.contains(&cell)
    }

    fn dimensions(&self) -> Option<MapDimensions> {
        self.dimensions
    }
}

/// Shortest 4-connected route from `start` to `destination`, both included.
///
/// Neighbours expand in up, down, left, right order and are marked visited
/// when enqueued. Cells with a negative coordinate or outside the oracle's
/// bounds are discarded before the oracle is asked about them. The search
/// stops the moment the destination is discovered. Returns an empty route
/// when the destination cannot be reached, or when `search_limit` cells have
/// been visited without discovering it.
pub fn find_path<O>(start: GridCell, destination: GridCell, oracle: &O, search_limit: usize) -> Vec<GridCell>
where
    O: CollisionOracle + ?Sized,
{
    if start == destination {
        return vec![start];
    }

    let mut came_from: HashMap<GridCell, GridCell> = HashMap::new();
    let mut visited: HashSet<GridCell> = HashSet::from([start]);
    let mut queue: VecDeque<GridCell> = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for next in current.neighbors() {
            if visited.contains(&next) || !oracle.contains(next) || oracle.is_blocked(next) {
                continue;
            }
            came_from.insert(next, current);
            // The first discovery is at minimum depth.
            if next == destination {
                return reconstruct(&came_from, start, destination);
            }
            if visited.len() >= search_limit {
                tracing::debug!(
                    "Search limit {} reached routing {:?} -> {:?}",
                    search_limit,
                    start,
                    destination
                );
                return Vec::new();
            }
            visited.insert(next);
            queue.push_back(next);
        }
    }

    tracing::debug!("No route from {:?} to {:?}", start, destination);
    Vec::new()
}

fn reconstruct(came_from: &HashMap<GridCell, GridCell>, start: GridCell, destination: GridCell) -> Vec<GridCell> {
    let mut route = vec![destination];
    let mut current = destination;
    while current != start {
        match came_from.get(&current) {
            Some(&previous) => {
                route.push(previous);
                current = previous;
            }
            None => return Vec::new(),
        }
    }
    route.reverse();
    route
}
