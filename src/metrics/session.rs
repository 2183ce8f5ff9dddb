use std::time::{Duration, Instant};

/// Session-local play statistics.
///
/// Tracks the best score and round count across restarts within one run of
/// the program; nothing here is persisted to disk.
pub struct SessionMetrics {
    round_started: Instant,
    elapsed: Duration,
    high_score: u32,
    rounds_played: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            round_started: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            rounds_played: 0,
        }
    }

    /// Refresh the elapsed-time reading; called once per rendered frame
    pub fn update(&mut self) {
        self.elapsed = self.round_started.elapsed();
    }

    pub fn on_round_start(&mut self) {
        self.round_started = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.rounds_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Round time as mm:ss
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
