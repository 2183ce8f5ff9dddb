use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::interval;
use tracing::debug;

use crate::game::{Direction, GameConfig, GamePhase, SimulationEngine, TickClock, TickResult};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

/// Frame rate of the TUI; simulation speed is set by the tick clock, not
/// by this
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Interactive keyboard-driven mode
pub struct HumanMode {
    engine: SimulationEngine,
    clock: TickClock,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    latest: TickResult,
    /// Last legal heading request since the previous tick; reversals are
    /// dropped at press time, never queued
    pending_direction: Option<Direction>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let clock = TickClock::new(config.tick_rate_hz);
        let renderer = Renderer::new(config.grid_width, config.grid_height);
        let engine = SimulationEngine::new(config);
        let latest = engine.snapshot();

        Self {
            engine,
            clock,
            metrics: SessionMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            latest,
            pending_direction: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_timer = interval(FRAME_INTERVAL);
        self.clock.reset(Instant::now());

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // One frame: run due simulation ticks, then draw
                _ = frame_timer.tick() => {
                    let due = self.clock.advance(Instant::now());
                    self.run_due_ticks(due);

                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.latest, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(dir) => {
                    // Latch only a legal request so the last legal press
                    // between ticks wins
                    if self.engine.phase() == GamePhase::Playing
                        && !dir.is_opposite(self.engine.heading())
                    {
                        self.pending_direction = Some(dir);
                    }
                }
                KeyAction::Advance => self.advance_phase(),
                KeyAction::Restart => {
                    if self.engine.is_game_over() {
                        self.advance_phase();
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// Drive the state machine forward: Start -> Playing, GameOver -> Playing
    fn advance_phase(&mut self) {
        let result = match self.engine.phase() {
            GamePhase::Start => self.engine.start(),
            GamePhase::GameOver(_) => self.engine.restart(),
            GamePhase::Playing => return,
        };

        match result {
            Ok(()) => {
                self.metrics.on_round_start();
                self.pending_direction = None;
                self.clock.reset(Instant::now());
                self.latest = self.engine.snapshot();

                // A board too small for snake plus food ends immediately
                if self.engine.is_game_over() {
                    self.metrics.on_game_over(self.engine.current_score());
                }
            }
            Err(err) => debug!(%err, "transition command ignored"),
        }
    }

    /// Run the ticks the clock released for this frame; the latched
    /// direction is consumed by the first tick of the batch
    fn run_due_ticks(&mut self, due: u32) {
        for i in 0..due {
            let requested = if i == 0 {
                self.pending_direction.take()
            } else {
                None
            };

            let was_over = self.engine.is_game_over();
            self.latest = self.engine.tick(requested);

            if !was_over && self.engine.is_game_over() {
                self.metrics.on_game_over(self.engine.current_score());
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_mode() -> HumanMode {
        HumanMode::new(GameConfig::small().with_seed(7))
    }

    #[test]
    fn test_mode_begins_on_start_screen() {
        let mode = test_mode();
        assert_eq!(mode.latest.phase, GamePhase::Start);
        assert_eq!(mode.latest.score, 0);
    }

    #[test]
    fn test_space_starts_a_round() {
        let mut mode = test_mode();
        mode.advance_phase();

        assert_eq!(mode.engine.phase(), GamePhase::Playing);
        assert!(mode.latest.food.is_some());
    }

    #[test]
    fn test_advance_is_noop_while_playing() {
        let mut mode = test_mode();
        mode.advance_phase();
        mode.run_due_ticks(2);
        let snapshot = mode.latest.clone();

        mode.advance_phase();

        assert_eq!(mode.latest, snapshot);
        assert_eq!(mode.engine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_last_legal_press_wins() {
        let mut mode = test_mode();
        mode.advance_phase();
        assert_eq!(mode.engine.heading(), Direction::Right);

        // Reversal is dropped at press time, later legal press sticks
        mode.handle_event(Event::Key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Left,
            crossterm::event::KeyModifiers::NONE,
        )));
        assert_eq!(mode.pending_direction, None);

        mode.handle_event(Event::Key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Up,
            crossterm::event::KeyModifiers::NONE,
        )));
        assert_eq!(mode.pending_direction, Some(Direction::Up));

        // A reversal after a legal press must not clobber the latch
        mode.handle_event(Event::Key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Left,
            crossterm::event::KeyModifiers::NONE,
        )));
        assert_eq!(mode.pending_direction, Some(Direction::Up));
    }

    #[test]
    fn test_latch_consumed_by_first_tick_of_batch() {
        let mut mode = test_mode();
        mode.advance_phase();
        mode.pending_direction = Some(Direction::Up);

        mode.run_due_ticks(3);

        assert_eq!(mode.pending_direction, None);
        assert_eq!(mode.engine.heading(), Direction::Up);
    }

    #[test]
    fn test_game_over_updates_session_metrics() {
        // 1x1 board fills immediately on start
        let mut config = GameConfig::new(1, 1).with_seed(0);
        config.initial_snake_length = 1;
        let mut mode = HumanMode::new(config);

        mode.advance_phase();
        mode.run_due_ticks(1);

        assert!(mode.engine.is_game_over());
        assert_eq!(mode.metrics.rounds_played(), 1);
    }
}
