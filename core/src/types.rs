//! Shared primitive types used across the crate.

use crate::status::Status;
use std::collections::{BTreeMap, BTreeSet};

/// A nation identifier as returned by the listing call.
pub type NationId = String;

/// The nations of one listing epoch.
pub type NationSet = BTreeSet<NationId>;

/// Every listed nation mapped to its latest status, or `None` if it has
/// never been fetched. Ordered so serialization emits sorted keys.
pub type Snapshot = BTreeMap<NationId, Option<Status>>;
