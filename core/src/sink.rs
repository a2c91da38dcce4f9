//! Snapshot sink trait.
//!
//! RULE: the poll engine hands every snapshot to exactly one sink,
//! synchronously, right after the fetch that produced it.

use crate::{error::ZombieResult, types::Snapshot};

pub trait SnapshotSink {
    fn accept(&mut self, snapshot: &Snapshot) -> ZombieResult<()>;
}

/// Keeps every snapshot in memory. Used by tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub snapshots: Vec<Snapshot>,
}

impl SnapshotSink for CollectingSink {
    fn accept(&mut self, snapshot: &Snapshot) -> ZombieResult<()> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }
}
