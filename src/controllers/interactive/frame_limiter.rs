use std::num::NonZeroU32;
use std::thread;
use std::time::{Duration, Instant};

/// Caps the presentation loop at a fixed rate by sleeping out whatever is
/// left of each frame's time budget.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    budget: Duration,
    last_frame: Option<Instant>,
}

impl FrameLimiter {
    #[must_use]
    pub fn new(rate: NonZeroU32) -> Self {
        Self {
            budget: Duration::from_secs(1) / rate.get(),
            last_frame: None,
        }
    }

    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left in the current frame, zero before the first frame.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.last_frame.map_or(Duration::ZERO, |last| {
            self.budget.saturating_sub(now.saturating_duration_since(last))
        })
    }

    /// When the next frame may start, for event loops that wait on a deadline
    /// instead of sleeping.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.last_frame.map(|last| last + self.budget)
    }

    pub fn finish_frame(&mut self, now: Instant) {
        self.last_frame = Some(now);
    }

    /// Sleeps until the frame budget is used up, then starts a new frame.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());

        if !remaining.is_zero() {
            thread::sleep(remaining);
        }

        self.finish_frame(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(rate: u32) -> FrameLimiter {
        FrameLimiter::new(NonZeroU32::new(rate).unwrap())
    }

    #[test]
    fn budget_is_reciprocal_of_rate() {
        assert_eq!(limiter(100).budget(), Duration::from_millis(10));
        assert_eq!(limiter(144).budget(), Duration::from_nanos(6_944_444));
    }

    #[test]
    fn remaining_counts_down_from_last_frame() {
        let mut limiter = limiter(100);
        let start = Instant::now();

        assert_eq!(limiter.remaining(start), Duration::ZERO);
        assert_eq!(limiter.next_deadline(), None);

        limiter.finish_frame(start);

        assert_eq!(limiter.remaining(start + Duration::from_millis(4)), Duration::from_millis(6));
        assert_eq!(limiter.remaining(start + Duration::from_millis(25)), Duration::ZERO);
        assert_eq!(limiter.next_deadline(), Some(start + Duration::from_millis(10)));
    }

    #[test]
    fn wait_never_returns_before_budget() {
        let mut limiter = limiter(100);
        limiter.finish_frame(Instant::now());
        let start = Instant::now();

        for _ in 0..5 {
            limiter.wait();
        }

        assert!(start.elapsed() >= Duration::from_millis(40));
    }
}
