//! zombie-watch: polls a region's Z-Day status forever, keeping the latest
//! snapshot in a JSON file.
//!
//! Usage:
//!   zombie-watch
//!   zombie-watch --region the_east_pacific --output tep.json
//!   zombie-watch --config watch.json

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use zombie_core::{
    api::{HttpTransport, ZombieApi},
    clock::ThreadSleeper,
    config::WatchConfig,
    engine::PollEngine,
    store::SnapshotStore,
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = build_config(&args)?;

    log::info!(
        "region={} output={} pace={}s",
        config.region,
        config.output_path.display(),
        config.pace_secs
    );

    let mut store = SnapshotStore::new(config.output_path.clone());
    let cache = store
        .load()
        .with_context(|| format!("Cannot load {}", store.path().display()))?;

    let transport = HttpTransport::new(&config).context("Cannot build HTTP client")?;
    let api = ZombieApi::new(&config, transport, ThreadSleeper)?;
    let mut engine = PollEngine::new(api, cache, std::io::stdout());

    engine.run(&mut store)?;
    Ok(())
}

/// Defaults, then the optional config file, then individual flags.
fn build_config(args: &[String]) -> Result<WatchConfig> {
    let mut config = match flag_value(args, "--config") {
        Some(path) => WatchConfig::load(Path::new(path))?,
        None => WatchConfig::default(),
    };
    if let Some(region) = flag_value(args, "--region") {
        config.region = region.to_string();
    }
    if let Some(output) = flag_value(args, "--output") {
        config.output_path = PathBuf::from(output);
    }
    config.validate()?;
    Ok(config)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
