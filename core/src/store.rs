//! JSON file persistence.
//!
//! RULE: the canonical file is only ever replaced by rename. Every write
//! goes to `<path>.part` first, so an interrupted write never leaves a
//! truncated canonical file behind.

use crate::{
    config::part_path_for,
    error::ZombieResult,
    sink::SnapshotSink,
    status::{Status, StatusCache},
    types::{NationId, Snapshot},
};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

pub struct SnapshotStore {
    path:      PathBuf,
    part_path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let part_path = part_path_for(&path);
        Self { path, part_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rebuild the cache from the canonical file. A missing file is an
    /// empty cache; anything else that goes wrong is an error.
    pub fn load(&self) -> ZombieResult<StatusCache> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("{} not found, starting with an empty cache", self.path.display());
                return Ok(StatusCache::new());
            }
            Err(e) => return Err(e.into()),
        };
        let entries: BTreeMap<NationId, Option<Status>> = serde_json::from_str(&content)?;
        log::info!("Loaded {} nations from {}", entries.len(), self.path.display());
        Ok(StatusCache::from_entries(entries))
    }

    /// Write the snapshot to the scratch file, then rename it into place.
    pub fn save(&self, snapshot: &Snapshot) -> ZombieResult<()> {
        let file = File::create(&self.part_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, snapshot)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        drop(writer);

        std::fs::rename(&self.part_path, &self.path)?;
        log::debug!("Persisted {} nations to {}", snapshot.len(), self.path.display());
        Ok(())
    }
}

impl SnapshotSink for SnapshotStore {
    fn accept(&mut self, snapshot: &Snapshot) -> ZombieResult<()> {
        self.save(snapshot)
    }
}
