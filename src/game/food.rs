use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::error::GameError;
use super::grid::Grid;
use super::state::Position;

/// The single active pickup on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Place food uniformly at random on a cell not in `excluded`.
    ///
    /// The RNG is an explicit instance so placement is seedable and
    /// reproducible. Errors with `NoFreeCell` when the exclusion set covers
    /// the whole grid; the engine maps that to GameOver(BoardFull).
    pub fn spawn(
        rng: &mut StdRng,
        excluded: &HashSet<Position>,
        grid: &Grid,
    ) -> Result<Food, GameError> {
        let free: Vec<Position> = grid.cells().filter(|c| !excluded.contains(c)).collect();

        free.choose(rng)
            .map(|&position| Food { position })
            .ok_or(GameError::NoFreeCell)
    }
}
