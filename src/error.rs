//! src/error.rs
//!
//! Defines the library's `Error` enum using `thiserror`.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize or deserialize: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An actual value fetched from the page differs from its expected literal.
    #[error("{message}: expected {expected:?}, found {}", display_actual(.actual))]
    AssertionMismatch {
        message: String,
        expected: String,
        actual: Option<String>,
    },

    #[error("Navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("No element matches selector `{selector}`")]
    ElementNotFound { selector: String },

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("Run cancelled before the script completed")]
    Cancelled,
}

fn display_actual(actual: &Option<String>) -> String {
    match actual {
        Some(value) => format!("{value:?}"),
        None => "no value".to_string(),
    }
}
