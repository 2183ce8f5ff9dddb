use std::collections::HashSet;
use std::fmt;

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake: an ordered body of grid cells with head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Position>,
    /// Direction the snake will move on the next tick
    pub heading: Direction,
    /// Ticks the tail is retained on advance, one per food eaten
    pending_growth: u32,
}

impl Snake {
    /// Create a snake of `length` cells with the head at `head`, trailing
    /// away from the heading
    pub fn new(head: Position, heading: Direction, length: usize) -> Self {
        assert!(length >= 1, "snake length must be at least 1");

        let (dx, dy) = heading.delta();
        let body = (0..length as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self {
            body,
            heading,
            pending_growth: 0,
        }
    }

    /// Assemble a snake from explicit cells, head first.
    ///
    /// The caller guarantees the cells are pairwise distinct.
    pub fn from_cells(body: Vec<Position>, heading: Direction) -> Self {
        assert!(!body.is_empty(), "snake needs at least one cell");
        Self {
            body,
            heading,
            pending_growth: 0,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Body segments head-first
    pub fn cells(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Insert `new_head` at the front; the tail is retained while growth is
    /// pending, otherwise popped.
    pub fn advance(&mut self, new_head: Position) {
        self.body.insert(0, new_head);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop();
        }
    }

    /// Would moving the head to `new_head` run into the body?
    ///
    /// The current tail cell is exempt because it vacates on the same tick,
    /// except while growth is pending, when the tail stays put and counts
    /// as occupied.
    pub fn will_collide_with(&self, new_head: Position) -> bool {
        let occupied = if self.pending_growth > 0 {
            &self.body[..]
        } else {
            &self.body[..self.body.len() - 1]
        };
        occupied.contains(&new_head)
    }

    /// Cells the snake occupies right now, used to exclude food placement
    pub fn occupied_cells(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Schedule one cell of growth for the next advance
    pub fn grow(&mut self) {
        self.pending_growth += 1;
    }
}

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// Snake ran into its own body
    SelfCollision,
    /// Snake left a walled grid
    WallCollision,
    /// Every grid cell is occupied by the snake, nowhere left for food
    BoardFull,
}

/// The game-state machine: Start -> Playing -> GameOver -> Playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Start,
    Playing,
    GameOver(GameOverCause),
}

impl GamePhase {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GamePhase::GameOver(_))
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Start => write!(f, "Start"),
            GamePhase::Playing => write!(f, "Playing"),
            GamePhase::GameOver(cause) => write!(f, "GameOver({:?})", cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.cells()[1], Position::new(4, 5));
        assert_eq!(snake.cells()[2], Position::new(3, 5));
        assert_eq!(snake.pending_growth(), 0);
    }

    #[test]
    fn test_snake_from_cells() {
        let cells = vec![Position::new(2, 2), Position::new(2, 3)];
        let snake = Snake::from_cells(cells.clone(), Direction::Up);

        assert_eq!(snake.cells(), &cells[..]);
        assert_eq!(snake.head(), Position::new(2, 2));
        assert_eq!(snake.heading, Direction::Up);
        assert_eq!(snake.pending_growth(), 0);
    }

    #[test]
    fn test_advance_pops_tail() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.advance(Position::new(6, 5));

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert!(!snake.occupied_cells().contains(&Position::new(3, 5)));
    }

    #[test]
    fn test_advance_with_pending_growth_keeps_tail() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        snake.grow();

        snake.advance(Position::new(6, 5));

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.pending_growth(), 0);
        assert!(snake.occupied_cells().contains(&Position::new(3, 5)));
    }

    #[test]
    fn test_tail_cell_is_legal_without_growth() {
        // Snake curled so the head can step onto the tail cell:
        // (1,1) (1,0) (0,0) (0,1) with the head about to move to (0,1)
        let mut snake = Snake::new(Position::new(1, 1), Direction::Down, 1);
        snake.grow();
        snake.grow();
        snake.grow();
        snake.advance(Position::new(1, 0)); // body: (1,0) (1,1)
        snake.advance(Position::new(0, 0)); // body: (0,0) (1,0) (1,1)
        snake.advance(Position::new(0, 1)); // body: (0,1) (0,0) (1,0) (1,1)

        // Tail (1,1) vacates this tick, so stepping onto it is legal
        assert!(!snake.will_collide_with(Position::new(1, 1)));
        // A non-tail segment is not
        assert!(snake.will_collide_with(Position::new(0, 0)));
    }

    #[test]
    fn test_tail_cell_occupied_while_growing() {
        let mut snake = Snake::new(Position::new(1, 1), Direction::Down, 1);
        snake.grow();
        snake.grow();
        snake.grow();
        snake.advance(Position::new(1, 0));
        snake.advance(Position::new(0, 0));
        snake.advance(Position::new(0, 1));

        // With growth pending the tail is retained, so it counts as occupied
        snake.grow();
        assert!(snake.will_collide_with(Position::new(1, 1)));
    }

    #[test]
    fn test_occupied_cells() {
        let snake = Snake::new(Position::new(2, 0), Direction::Right, 3);
        let occupied = snake.occupied_cells();

        assert_eq!(occupied.len(), 3);
        assert!(occupied.contains(&Position::new(2, 0)));
        assert!(occupied.contains(&Position::new(1, 0)));
        assert!(occupied.contains(&Position::new(0, 0)));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(GamePhase::Start.to_string(), "Start");
        assert_eq!(
            GamePhase::GameOver(GameOverCause::BoardFull).to_string(),
            "GameOver(BoardFull)"
        );
        assert!(GamePhase::GameOver(GameOverCause::SelfCollision).is_game_over());
        assert!(!GamePhase::Playing.is_game_over());
    }
}
