//! Retry backoff for transient network failures.
//!
//! The schedule is 1, 2, 4, 8, 15, 30 steps, then 60 forever. Each step is
//! multiplied by the pacing interval, so the real waits stay proportional to
//! the request rate limit.

use std::time::Duration;

pub const BACKOFF_STEPS: [u32; 7] = [1, 2, 4, 8, 15, 30, 60];

/// Retry state for a single request. Starts fresh for every call.
#[derive(Debug, Clone)]
pub struct Backoff {
    pace:     Duration,
    attempts: usize,
}

impl Backoff {
    pub fn new(pace: Duration) -> Self {
        Self { pace, attempts: 0 }
    }

    /// Number of failures recorded so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Record a failure and return how long to wait before the next try.
    pub fn next_delay(&mut self) -> Duration {
        let step = BACKOFF_STEPS[self.attempts.min(BACKOFF_STEPS.len() - 1)];
        self.attempts = self.attempts.saturating_add(1);
        self.pace.checked_mul(step).unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_schedule_then_stays_flat() {
        let mut backoff = Backoff::new(Duration::from_secs(1));
        let delays: Vec<u64> = (0..10).map(|_| backoff.next_delay().as_secs()).collect();
        assert_eq!(delays, vec![1, 2, 4, 8, 15, 30, 60, 60, 60, 60]);
        assert_eq!(backoff.attempts(), 10);
    }

    #[test]
    fn scales_by_pace() {
        let mut backoff = Backoff::new(Duration::from_millis(650));
        assert_eq!(backoff.next_delay(), Duration::from_millis(650));
        assert_eq!(backoff.next_delay(), Duration::from_millis(1300));
        assert_eq!(backoff.next_delay(), Duration::from_millis(2600));
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let pace = Duration::from_secs(u64::MAX / 3);
        let mut backoff = Backoff::new(pace);
        assert_eq!(backoff.next_delay(), pace);
        assert_eq!(backoff.next_delay(), pace * 2);
        assert_eq!(backoff.next_delay(), Duration::MAX);
    }
}
