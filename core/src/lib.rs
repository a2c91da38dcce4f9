//! zombie-core: polls the NationStates Z-Day API for every nation in a
//! region and keeps the latest status of each in a JSON file.

pub mod api;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod parse;
pub mod retry;
pub mod sink;
pub mod status;
pub mod store;
pub mod types;
pub mod xml;
