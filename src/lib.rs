//! src/lib.rs
//!
//! Library crate for the synthetic browser check. It exposes the script, the
//! `BrowserSession` capability it runs against, a W3C WebDriver implementation
//! of that capability, and the `App` that ties a run together.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod script;
pub mod session;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use report::{RunReport, RunStatus};
