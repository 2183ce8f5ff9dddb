use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::state::Position;

/// What happens when the snake's head steps over the edge of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Coordinates wrap modulo the grid dimensions (torus)
    Wrap,
    /// Leaving the grid is a wall collision
    Walled,
}

/// Fixed-size discrete coordinate space, immutable after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    boundary: BoundaryPolicy,
}

impl Grid {
    /// Create a grid of `width` x `height` cells with the given boundary policy
    pub fn new(width: usize, height: usize, boundary: BoundaryPolicy) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self {
            width,
            height,
            boundary,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Total number of cells on the grid
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Iterate over every cell of the grid, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Position::new(x, y)))
    }

    /// Move one cell from `from` in `direction`.
    ///
    /// Returns `None` when the step leaves a walled grid; under the wrap
    /// policy the result is always in bounds (rem_euclid never goes negative).
    pub fn step(&self, from: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let raw = from.moved_by(dx, dy);

        match self.boundary {
            BoundaryPolicy::Wrap => Some(Position::new(
                raw.x.rem_euclid(self.width as i32),
                raw.y.rem_euclid(self.height as i32),
            )),
            BoundaryPolicy::Walled => self.contains(raw).then_some(raw),
        }
    }
}
