//! Core simulation logic for grid snake
//!
//! Everything in here is synchronous, deterministic (given a seed) and free
//! of I/O or rendering dependencies; the front end drives it through
//! `SimulationEngine::tick` and the transition commands.

pub mod action;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, InputGate};
pub use clock::TickClock;
pub use config::GameConfig;
pub use engine::{SimulationEngine, TickResult};
pub use error::GameError;
pub use food::Food;
pub use grid::{BoundaryPolicy, Grid};
pub use state::{GameOverCause, GamePhase, Position, Snake};
