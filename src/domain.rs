//! src/domain.rs
//!
//! Core data structures shared by the script and the browser session: CSS
//! selectors, element handles returned by the session, and the literal
//! expectations the script compares page values against.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS selector identifying zero or more elements in the loaded page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selector(String);

impl Selector {
    pub fn css(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An opaque reference to an element located by the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementHandle {
    pub id: String,
    pub selector: Selector,
}

/// A single literal comparison and the message reported when it fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expectation {
    pub expected: String,
    pub message: String,
}

impl Expectation {
    pub fn new(expected: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            message: message.into(),
        }
    }

    /// Compares an actual value against the expected literal. An absent value
    /// never matches.
    pub fn check(&self, actual: Option<&str>) -> Result<()> {
        if actual == Some(self.expected.as_str()) {
            return Ok(());
        }
        Err(Error::AssertionMismatch {
            message: self.message.clone(),
            expected: self.expected.clone(),
            actual: actual.map(str::to_owned),
        })
    }
}
