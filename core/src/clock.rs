//! Wall-clock waits — request pacing and retry backoff both sleep here.
//!
//! RULE: nothing in the crate calls `std::thread::sleep` directly.
//! Every wait goes through a Sleeper so tests can observe the schedule
//! without actually waiting.

use std::time::Duration;

pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread. Used by the real process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Records every requested wait and returns immediately.
#[derive(Debug, Default, Clone)]
pub struct RecordingSleeper {
    pub waits: Vec<Duration>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Duration {
        self.waits.iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.waits.push(duration);
    }
}
