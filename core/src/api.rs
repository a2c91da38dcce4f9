//! NationStates API client.
//!
//! RULE: only transient transport failures are retried. A body that
//! arrived but does not parse is returned as an error immediately.

use crate::{
    clock::Sleeper,
    config::WatchConfig,
    error::ZombieResult,
    parse::{parse_nations, parse_status},
    retry::Backoff,
    status::Status,
    types::NationSet,
    xml::Element,
};
use std::io::Write;
use std::time::Duration;
use thiserror::Error;

/// A failed attempt that is worth retrying.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {code}")]
    Status { code: u16 },

    #[error("{0}")]
    Other(String),
}

/// One GET request, returning the response body.
pub trait Transport {
    fn get(&mut self, url: &str) -> Result<String, TransportError>;
}

/// Production transport backed by a blocking reqwest client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &WatchConfig) -> ZombieResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&mut self, url: &str) -> Result<String, TransportError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { code: status.as_u16() });
        }
        Ok(response.text()?)
    }
}

/// Join `base` and the query parameters as `k=v` pairs in the given order.
/// With no parameters the base URL is used unchanged.
pub fn request_url(base: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return base.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{base}?{query}")
}

pub struct ZombieApi<T: Transport, S: Sleeper> {
    transport: T,
    sleeper:   S,
    /// Operator-facing retry notices. Standard output unless replaced.
    notices:   Box<dyn Write>,
    base_url:  String,
    region:    String,
    pace:      Duration,
}

impl<T: Transport, S: Sleeper> ZombieApi<T, S> {
    pub fn new(config: &WatchConfig, transport: T, sleeper: S) -> ZombieResult<Self> {
        config.validate()?;
        Ok(Self {
            transport,
            sleeper,
            notices:  Box::new(std::io::stdout()),
            base_url: config.base_url.clone(),
            region:   config.region.clone(),
            pace:     config.pace()?,
        })
    }

    /// Send retry notices somewhere other than standard output.
    pub fn with_notices(mut self, notices: impl Write + 'static) -> Self {
        self.notices = Box::new(notices);
        self
    }

    /// Perform one request, retrying transport failures forever.
    pub fn call(&mut self, params: &[(&str, &str)]) -> ZombieResult<Element> {
        let url = request_url(&self.base_url, params);
        let mut backoff = Backoff::new(self.pace);
        loop {
            match self.transport.get(&url) {
                Ok(body) => return Element::parse(&body),
                Err(e) => {
                    let delay = backoff.next_delay();
                    log::warn!(
                        "GET {url} failed (attempt {}): {e}; retrying in {:.2}s",
                        backoff.attempts(),
                        delay.as_secs_f64()
                    );
                    writeln!(self.notices)?;
                    writeln!(self.notices, "** ERROR: {e}")?;
                    writeln!(self.notices, "Retrying in {:.2} seconds...", delay.as_secs_f64())?;
                    self.notices.flush()?;
                    self.sleeper.sleep(delay);
                }
            }
        }
    }

    /// Current member list of the configured region.
    pub fn nations(&mut self) -> ZombieResult<NationSet> {
        let region = self.region.clone();
        let root = self.call(&[("region", region.as_str()), ("q", "nations")])?;
        let nations = parse_nations(&root)?;
        log::debug!("region {region}: {} nations listed", nations.len());
        Ok(nations)
    }

    /// Z-Day status of one nation.
    pub fn status(&mut self, nation: &str) -> ZombieResult<Status> {
        let root = self.call(&[("nation", nation), ("q", "zombie")])?;
        parse_status(&root)
    }

    /// Wait one pacing interval between requests.
    pub fn pace(&mut self) {
        self.sleeper.sleep(self.pace);
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }
}
