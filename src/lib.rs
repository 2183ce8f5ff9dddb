//! gridsnake - a deterministic grid-based snake simulation engine
//!
//! This library provides:
//! - Core simulation logic (game module): grid, snake, food, tick loop and
//!   the Start/Playing/GameOver state machine
//! - Keyboard input handling (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive game mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
