//! Shared fixtures: a scripted transport and canned API bodies.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io::{self, Write};
use std::rc::Rc;
use zombie_core::{
    api::{Transport, TransportError, ZombieApi},
    clock::RecordingSleeper,
    config::WatchConfig,
};

pub const BASE: &str = "https://api.test/cgi-bin/api.cgi";

/// Serves queued responses per URL and records every request made.
/// A URL with nothing queued falls back to its sticky response, if any.
#[derive(Default)]
pub struct ScriptedTransport {
    queued:       HashMap<String, VecDeque<Result<String, String>>>,
    sticky:       HashMap<String, String>,
    pub requests: Vec<String>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(mut self, url: &str, message: &str) -> Self {
        self.queued
            .entry(url.to_string())
            .or_default()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn respond(mut self, url: &str, body: &str) -> Self {
        self.queued
            .entry(url.to_string())
            .or_default()
            .push_back(Ok(body.to_string()));
        self
    }

    pub fn always(mut self, url: &str, body: &str) -> Self {
        self.sticky.insert(url.to_string(), body.to_string());
        self
    }
}

impl Transport for ScriptedTransport {
    fn get(&mut self, url: &str) -> Result<String, TransportError> {
        self.requests.push(url.to_string());
        if let Some(next) = self.queued.get_mut(url).and_then(VecDeque::pop_front) {
            return next.map_err(TransportError::Other);
        }
        match self.sticky.get(url) {
            Some(body) => Ok(body.clone()),
            None => panic!("unexpected request: {url}"),
        }
    }
}

pub fn test_config() -> WatchConfig {
    WatchConfig {
        base_url: BASE.to_string(),
        region:   "test_region".to_string(),
        ..WatchConfig::default()
    }
}

pub fn api(transport: ScriptedTransport) -> ZombieApi<ScriptedTransport, RecordingSleeper> {
    ZombieApi::new(&test_config(), transport, RecordingSleeper::new())
        .expect("valid test config")
        .with_notices(io::sink())
}

/// Clonable in-memory writer; every clone appends to the same buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("utf8 output")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn nations_url() -> String {
    format!("{BASE}?region=test_region&q=nations")
}

pub fn status_url(nation: &str) -> String {
    format!("{BASE}?nation={nation}&q=zombie")
}

pub fn nations_body(ids: &[&str]) -> String {
    format!(
        "<REGION id=\"test_region\"><NATIONS>{}</NATIONS></REGION>",
        ids.join(":")
    )
}

pub fn status_body(nation: &str, action: &str, survivors: u64, zombies: u64, dead: u64) -> String {
    format!(
        "<NATION id=\"{nation}\"><ZOMBIE>\
         <ACTION>{action}</ACTION>\
         <SURVIVORS>{survivors}</SURVIVORS>\
         <ZOMBIES>{zombies}</ZOMBIES>\
         <DEAD>{dead}</DEAD>\
         </ZOMBIE></NATION>"
    )
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
