//! Positional decoding of NationStates API responses.
//!
//! RULE: the upstream schema is addressed by child index, not by tag name.
//! All knowledge of those positions lives in this file.

use crate::{
    error::{ZombieError, ZombieResult},
    status::Status,
    types::NationSet,
    xml::Element,
};

/// Decode a `q=nations` region response: the first child holds the member
/// list as colon-separated text.
pub fn parse_nations(root: &Element) -> ZombieResult<NationSet> {
    let nations = root.child(0).ok_or(ZombieError::MissingField {
        what:  "nation list",
        index: 0,
    })?;
    let text = nations.text.as_deref().unwrap_or("");
    Ok(text
        .split(':')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect())
}

/// Decode a `q=zombie` nation response: the first child holds action,
/// survivors, zombies and dead, in that order.
pub fn parse_status(root: &Element) -> ZombieResult<Status> {
    let zombie = root.child(0).ok_or(ZombieError::MissingField {
        what:  "zombie block",
        index: 0,
    })?;

    Ok(Status {
        action:    field(zombie, 0, "action")?.to_string(),
        survivors: parse_count("survivors", field(zombie, 1, "survivors")?)?,
        zombies:   parse_count("zombies", field(zombie, 2, "zombies")?)?,
        dead:      parse_count("dead", field(zombie, 3, "dead")?)?,
    })
}

fn field<'a>(parent: &'a Element, index: usize, what: &'static str) -> ZombieResult<&'a str> {
    parent
        .child(index)
        .map(|el| el.text.as_deref().unwrap_or(""))
        .ok_or(ZombieError::MissingField { what, index })
}

fn parse_count(field: &'static str, raw: &str) -> ZombieResult<u64> {
    raw.trim().parse().map_err(|source| ZombieError::InvalidNumber {
        field,
        value: raw.to_string(),
        source,
    })
}
