//! src/config.rs
//!
//! Defines the strongly-typed `Config` struct for all runtime parameters,
//! loaded from files and environment variables via `figment`.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::PathBuf;
use thirtyfour::{Capabilities, DesiredCapabilities};

/// Top-level struct holding all application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the WebDriver endpoint (chromedriver, geckodriver, Selenium).
    pub webdriver_url: String,
    pub browser: BrowserConfig,
    /// Where to write the JSON run report, if anywhere.
    pub report_path: Option<PathBuf>,
}

/// The browser requested when creating a WebDriver session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    pub name: String,
    pub headless: bool,
    pub args: Vec<String>,
}

impl Config {
    /// Loads configuration from `synthetic.toml` and `SYNTHETIC_*` environment
    /// variables, on top of the `Default` implementation. Nested keys use a
    /// double underscore, e.g. `SYNTHETIC_BROWSER__NAME`.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file("synthetic.toml"))
            .merge(Env::prefixed("SYNTHETIC_").split("__"))
            .extract()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:4444".to_string(),
            browser: BrowserConfig::default(),
            report_path: None,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            name: "chrome".to_string(),
            headless: true,
            args: Vec::new(),
        }
    }
}

impl BrowserConfig {
    /// Builds the capabilities for a new session, starting from the
    /// browser's `DesiredCapabilities`. Browser arguments go under the vendor
    /// options key of the requested browser.
    pub fn capabilities(&self) -> Capabilities {
        let (mut capabilities, options_key, headless_flag): (Capabilities, _, _) =
            match self.name.as_str() {
                "chrome" | "chromium" => (
                    DesiredCapabilities::chrome().into(),
                    "goog:chromeOptions",
                    "--headless=new",
                ),
                "MicrosoftEdge" | "msedge" => (
                    DesiredCapabilities::edge().into(),
                    "ms:edgeOptions",
                    "--headless=new",
                ),
                "firefox" => (
                    DesiredCapabilities::firefox().into(),
                    "moz:firefoxOptions",
                    "-headless",
                ),
                _ => {
                    let mut capabilities = Capabilities::new();
                    capabilities.insert("browserName".into(), Value::String(self.name.clone()));
                    return capabilities;
                }
            };

        let mut args = self.args.clone();
        if self.headless && !args.iter().any(|arg| arg.starts_with(headless_flag)) {
            args.push(headless_flag.to_string());
        }
        if !args.is_empty() {
            let options = capabilities
                .entry(options_key)
                .or_insert_with(|| json!({}));
            if let Some(options) = options.as_object_mut() {
                options.insert("args".into(), json!(args));
            }
        }
        capabilities
    }
}
