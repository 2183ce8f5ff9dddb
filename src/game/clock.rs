use std::time::{Duration, Instant};

/// Upper bound on ticks released per frame, so a stalled host does not
/// replay an unbounded backlog when it wakes up
const MAX_TICKS_PER_FRAME: u32 = 8;

/// Fixed-rate tick accumulator.
///
/// Carries leftover time between frames and fires zero or more ticks per
/// `advance`, keeping simulation speed independent of the host frame rate.
#[derive(Debug)]
pub struct TickClock {
    period: Duration,
    accumulator: Duration,
    last: Instant,
}

impl TickClock {
    pub fn new(ticks_per_second: u32) -> Self {
        assert!(ticks_per_second > 0, "tick rate must be non-zero");
        Self {
            period: Duration::from_secs(1) / ticks_per_second,
            accumulator: Duration::ZERO,
            last: Instant::now(),
        }
    }

    /// One simulation tick's worth of wall time
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Account for the time elapsed up to `now` and return how many ticks
    /// are due, retaining any remainder for the next frame
    pub fn advance(&mut self, now: Instant) -> u32 {
        self.accumulator += now.saturating_duration_since(self.last);
        self.last = now;

        let mut due = 0;
        while self.accumulator >= self.period && due < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.period;
            due += 1;
        }

        // Drop whatever backlog remains past the cap
        if due == MAX_TICKS_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }

        due
    }

    /// Discard accumulated time, e.g. after leaving a menu screen
    pub fn reset(&mut self, now: Instant) {
        self.accumulator = Duration::ZERO;
        self.last = now;
    }
}
