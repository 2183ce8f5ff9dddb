use thiserror::Error;

use super::state::GamePhase;

/// Errors the engine can signal to its caller.
///
/// Gameplay outcomes (collisions, a full board) are not errors; they resolve
/// into `GamePhase::GameOver` with a cause attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A transition command was issued in the wrong state; recoverable,
    /// callers may ignore or log it
    #[error("{command} is not a valid command in the {phase} state")]
    InvalidTransition {
        command: &'static str,
        phase: GamePhase,
    },

    /// No grid cell is free for food placement
    #[error("no free cell left on the grid for food")]
    NoFreeCell,
}
