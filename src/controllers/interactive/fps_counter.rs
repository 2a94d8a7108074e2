use std::collections::VecDeque;
use std::time::{Duration, Instant};

const DEFAULT_WINDOW: usize = 10;

/// Frames per second averaged over the most recent frame intervals.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: usize,
    intervals: VecDeque<Duration>,
    last_tick: Option<Instant>,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl FpsCounter {
    #[must_use]
    pub fn new(window: usize) -> Self {
        let window = window.max(1);

        Self {
            window,
            intervals: VecDeque::with_capacity(window),
            last_tick: None,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_tick {
            if self.intervals.len() == self.window {
                self.intervals.pop_front();
            }
            self.intervals.push_back(now.saturating_duration_since(last));
        }

        self.last_tick = Some(now);
    }

    #[must_use]
    pub fn fps(&self) -> f64 {
        let total: f64 = self.intervals.iter().map(Duration::as_secs_f64).sum();

        if total <= 0.0 {
            return 0.0;
        }

        self.intervals.len() as f64 / total
    }
}
