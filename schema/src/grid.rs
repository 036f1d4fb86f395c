use serde::{Deserialize, Serialize};
use strum::Display;

/// A tile coordinate on the overworld grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts a pixel position into the cell that contains it.
    pub fn from_pixels(x: f32, y: f32, tile_size: u32) -> Self {
        let tile = tile_size.max(1) as f32;
        Self {
            x: (x / tile).floor() as i32,
            y: (y / tile).floor() as i32,
        }
    }

    /// Top-left pixel of this cell.
    pub fn to_pixels(self, tile_size: u32) -> (f32, f32) {
        let tile = tile_size as f32;
        (self.x as f32 * tile, self.y as f32 * tile)
    }

    /// The four orthogonal neighbours, in up, down, left, right order.
    pub fn neighbors(self) -> [GridCell; 4] {
        [
            GridCell::new(self.x, self.y - 1),
            GridCell::new(self.x, self.y + 1),
            GridCell::new(self.x - 1, self.y),
            GridCell::new(self.x + 1, self.y),
        ]
    }

    pub fn manhattan_distance(self, other: GridCell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

impl From<(i32, i32)> for GridCell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }
}

/// Cardinal direction of a single route step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Direction of travel from `from` to `to`.
    ///
    /// Horizontal movement wins over vertical, checked in right, left, down, up
    /// order. A zero delta reports `Up`.
    pub fn between(from: GridCell, to: GridCell) -> Direction {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        if dx > 0 {
            Direction::Right
        } else if dx < 0 {
            Direction::Left
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}
