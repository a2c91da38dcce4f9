//! The poll engine.
//!
//! EXECUTION ORDER (per pass, never reordered):
//!   1. Refresh the region's nation listing.
//!   2. For every listed nation:
//!        a. fetch its status
//!        b. store it in the cache
//!        c. wait one pacing interval
//!        d. build the snapshot for the listing and hand it to the sink
//!   3. Finish the progress line.
//!
//! An empty listing waits one pacing interval instead of fetching.
//!
//! RULES:
//!   - The cache is mutated strictly before the snapshot is built, so each
//!     snapshot reflects the fetch that just completed.
//!   - Exactly one snapshot per fetch.
//!   - `run` never returns except on error.

use crate::{
    api::{Transport, ZombieApi},
    clock::Sleeper,
    error::ZombieResult,
    sink::SnapshotSink,
    status::StatusCache,
};
use std::io::Write;

/// Counts from one completed pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// Nations in this pass's listing.
    pub listed: usize,
    /// Status requests that completed during this pass.
    pub fetched: usize,
}

pub struct PollEngine<T: Transport, S: Sleeper, W: Write> {
    api:      ZombieApi<T, S>,
    cache:    StatusCache,
    progress: W,
    passes:   u64,
}

impl<T: Transport, S: Sleeper, W: Write> PollEngine<T, S, W> {
    pub fn new(api: ZombieApi<T, S>, cache: StatusCache, progress: W) -> Self {
        Self { api, cache, progress, passes: 0 }
    }

    /// Poll forever. Only returns when something non-transient fails.
    pub fn run(&mut self, sink: &mut dyn SnapshotSink) -> ZombieResult<()> {
        loop {
            self.run_pass(sink)?;
        }
    }

    /// One outer iteration: list, then fetch every listed nation once.
    pub fn run_pass(&mut self, sink: &mut dyn SnapshotSink) -> ZombieResult<PassSummary> {
        let nations = self.api.nations()?;
        let total = nations.len();
        self.print_progress(0, total)?;

        // Keep listing requests paced when there is nothing to fetch.
        if total == 0 {
            self.api.pace();
        }

        let mut fetched = 0;
        for (i, nation) in nations.iter().enumerate() {
            let status = self.api.status(nation)?;
            log::debug!(
                "{nation}: {} survivors={} zombies={} dead={}",
                status.action,
                status.survivors,
                status.zombies,
                status.dead
            );
            self.cache.insert(nation.clone(), status);
            fetched += 1;
            self.print_progress(i + 1, total)?;
            self.api.pace();

            let snapshot = self.cache.snapshot(&nations);
            sink.accept(&snapshot)?;
        }

        self.print_progress(total, total)?;
        writeln!(self.progress)?;

        self.passes += 1;
        log::info!("Pass {} complete: {total} nations", self.passes);
        Ok(PassSummary { listed: total, fetched })
    }

    fn print_progress(&mut self, done: usize, total: usize) -> ZombieResult<()> {
        write!(self.progress, "\r{}", progress_line(done, total))?;
        self.progress.flush()?;
        Ok(())
    }

    pub fn cache(&self) -> &StatusCache {
        &self.cache
    }

    pub fn api(&self) -> &ZombieApi<T, S> {
        &self.api
    }

    pub fn progress(&self) -> &W {
        &self.progress
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }
}

/// `Retrieving data for N nations...  XX.XX%`. An empty listing is complete.
pub fn progress_line(done: usize, total: usize) -> String {
    let percent = if total == 0 {
        100.0
    } else {
        done as f64 / total as f64 * 100.0
    };
    format!("Retrieving data for {total} nations... {percent:6.2}%")
}
