//! src/main.rs
//!
//! The entrypoint for the synthetic-check binary. Sets up logging, loads the
//! configuration and runs a single check. Exits non-zero when the check fails.

use anyhow::Context;
use synthetic_check::{App, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // `RUST_LOG=debug` shows each WebDriver step.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("💥 Check could not run: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> anyhow::Result<bool> {
    let config = Config::load().context("Failed to load configuration")?;
    let report = App::new(config)?
        .run()
        .await
        .context("Failed to run check")?;

    println!("{}", serde_json::to_string(&report)?);
    Ok(report.passed())
}
