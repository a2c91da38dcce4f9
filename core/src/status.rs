//! Per-nation zombie status and the in-process cache of them.

use crate::types::{NationId, NationSet, Snapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Latest known Z-Day status of a single nation.
///
/// Fields are declared in lexicographic order so the persisted file keeps
/// sorted keys all the way down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub action:    String,
    pub dead:      u64,
    pub survivors: u64,
    pub zombies:   u64,
}

/// Every nation ever seen, mapped to its last successful fetch.
/// `None` marks a nation that is known but was never fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCache {
    entries: BTreeMap<NationId, Option<Status>>,
}

impl StatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: BTreeMap<NationId, Option<Status>>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, nation: &str) -> Option<&Status> {
        self.entries.get(nation).and_then(Option::as_ref)
    }

    pub fn contains(&self, nation: &str) -> bool {
        self.entries.contains_key(nation)
    }

    /// Replace whatever is stored for `nation` with a fresh status.
    pub fn insert(&mut self, nation: NationId, status: Status) {
        self.entries.insert(nation, Some(status));
    }

    /// Build the snapshot for one listing epoch. Listed nations missing from
    /// the cache are recorded as never fetched; stale nations outside the
    /// listing stay in the cache but are left out of the snapshot.
    pub fn snapshot(&mut self, listing: &NationSet) -> Snapshot {
        listing
            .iter()
            .map(|nation| {
                let entry = self.entries.entry(nation.clone()).or_insert(None);
                (nation.clone(), entry.clone())
            })
            .collect()
    }

    pub fn entries(&self) -> &BTreeMap<NationId, Option<Status>> {
        &self.entries
    }
}
