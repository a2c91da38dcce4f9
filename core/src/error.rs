use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZombieError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed XML response: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Response is missing {what} (expected child #{index})")]
    MissingField { what: &'static str, index: usize },

    #[error("Field '{field}' is not a number: {value:?}")]
    InvalidNumber {
        field:  &'static str,
        value:  String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type ZombieResult<T> = Result<T, ZombieError>;
