use serde::{Deserialize, Serialize};

use super::grid::BoundaryPolicy;

/// Configuration for the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// What happens at the edge of the grid
    pub boundary: BoundaryPolicy,
    /// Score awarded per food eaten (the source variants used 1 and 10)
    pub food_reward: u32,
    /// Simulation rate in ticks per second
    pub tick_rate_hz: u32,
    /// Seed for food placement; None draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 3,
            boundary: BoundaryPolicy::Walled,
            food_reward: 10,
            tick_rate_hz: 8,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
