use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::action::{Direction, InputGate};
use super::config::GameConfig;
use super::error::GameError;
use super::food::Food;
use super::grid::Grid;
use super::state::{GameOverCause, GamePhase, Position, Snake};

/// The full observable state of one frame, consumed by rendering
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    pub phase: GamePhase,
    pub score: u32,
    /// Snake cells, head first
    pub snake_cells: Vec<Position>,
    /// None before the first round and once the board has filled up
    pub food: Option<Position>,
}

/// The simulation engine: owns the grid, snake, food, score and the
/// game-state machine, and advances them one tick at a time.
///
/// Synchronous and total; every abnormal gameplay condition resolves into
/// `GamePhase::GameOver` with a cause rather than an error. Not thread-safe
/// for concurrent mutation; the caller serializes `tick` and commands.
pub struct SimulationEngine {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Option<Food>,
    score: u32,
    phase: GamePhase,
    rng: StdRng,
}

impl SimulationEngine {
    /// Create an engine in the Start phase; entities are placed when a
    /// round begins
    pub fn new(config: GameConfig) -> Self {
        let grid = Grid::new(config.grid_width, config.grid_height, config.boundary);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let center = Position::new((grid.width() / 2) as i32, (grid.height() / 2) as i32);

        let mut engine = Self {
            config,
            grid,
            snake: Snake::from_cells(vec![center], Direction::Right),
            food: None,
            score: 0,
            phase: GamePhase::Start,
            rng,
        };
        engine.snake = engine.spawn_snake();
        engine
    }

    /// Lay the initial body backwards from the grid center, one grid step at
    /// a time: the trail wraps where the policy allows, stops at a wall, and
    /// stops before overlapping itself, so every segment starts on a
    /// distinct in-bounds cell even when the configured length doesn't fit.
    fn spawn_snake(&self) -> Snake {
        let center = Position::new(
            (self.grid.width() / 2) as i32,
            (self.grid.height() / 2) as i32,
        );
        let heading = Direction::Right;
        let mut body = vec![center];
        let mut cursor = center;

        while body.len() < self.config.initial_snake_length {
            match self.grid.step(cursor, heading.opposite()) {
                Some(next) if !body.contains(&next) => {
                    body.push(next);
                    cursor = next;
                }
                _ => break,
            }
        }

        Snake::from_cells(body, heading)
    }

    /// Reinitialize snake, food and score for a fresh round.
    ///
    /// If the snake already covers every cell there is nowhere to put food
    /// and the round ends immediately as BoardFull.
    fn reset_entities(&mut self) {
        self.snake = self.spawn_snake();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.respawn_food();
    }

    /// Place new food, or end the round when the board is full
    fn respawn_food(&mut self) {
        match Food::spawn(&mut self.rng, &self.snake.occupied_cells(), &self.grid) {
            Ok(food) => self.food = Some(food),
            Err(_) => {
                self.food = None;
                self.end_round(GameOverCause::BoardFull);
            }
        }
    }

    fn end_round(&mut self, cause: GameOverCause) {
        self.phase = GamePhase::GameOver(cause);
        info!(?cause, score = self.score, "game over");
    }

    /// Begin the first round; only valid from the Start phase
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Start {
            return Err(GameError::InvalidTransition {
                command: "start",
                phase: self.phase,
            });
        }
        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            boundary = ?self.grid.boundary(),
            "round started"
        );
        self.reset_entities();
        Ok(())
    }

    /// Start a new round after a game over, resetting snake, food and score
    pub fn restart(&mut self) -> Result<(), GameError> {
        if !self.phase.is_game_over() {
            return Err(GameError::InvalidTransition {
                command: "restart",
                phase: self.phase,
            });
        }
        info!("round restarted");
        self.reset_entities();
        Ok(())
    }

    /// Advance the simulation by one tick.
    ///
    /// Only meaningful while Playing; in Start and GameOver this is a no-op
    /// returning the current snapshot. At most one heading change is honored
    /// per tick, and a reversal request is silently dropped.
    pub fn tick(&mut self, requested: Option<Direction>) -> TickResult {
        if self.phase != GamePhase::Playing {
            return self.snapshot();
        }

        self.snake.heading = InputGate::propose_heading(self.snake.heading, requested);

        let new_head = match self.grid.step(self.snake.head(), self.snake.heading) {
            Some(pos) => pos,
            None => {
                self.end_round(GameOverCause::WallCollision);
                return self.snapshot();
            }
        };

        if self.snake.will_collide_with(new_head) {
            self.end_round(GameOverCause::SelfCollision);
            return self.snapshot();
        }

        self.snake.advance(new_head);

        if self.food.map(|f| f.position) == Some(new_head) {
            self.snake.grow();
            self.score += self.config.food_reward;
            debug!(score = self.score, length = self.snake.len(), "food eaten");
            self.respawn_food();
        }

        self.snapshot()
    }

    /// The current observable state without advancing the simulation
    pub fn snapshot(&self) -> TickResult {
        TickResult {
            phase: self.phase,
            score: self.score,
            snake_cells: self.snake.cells().to_vec(),
            food: self.food.map(|f| f.position),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Exposed for a persistence collaborator to compare high scores
    pub fn current_score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    pub fn game_over_cause(&self) -> Option<GameOverCause> {
        match self.phase {
            GamePhase::GameOver(cause) => Some(cause),
            _ => None,
        }
    }

    /// The direction the snake will move on the next tick
    pub fn heading(&self) -> Direction {
        self.snake.heading
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[cfg(test)]
    fn place_food(&mut self, pos: Position) {
        self.food = Some(Food { position: pos });
    }
}
