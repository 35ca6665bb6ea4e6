//! src/app.rs
//!
//! Defines the main `App` struct, which owns the configuration and manages
//! the lifecycle of a single check run: open a browser session, run the
//! script, release the session, report.

use crate::{
    config::Config,
    error::{Error, Result},
    report::RunReport,
    script::Script,
    session::{BrowserSession, WebDriverSession},
};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tokio_util::sync::CancellationToken;

pub struct App {
    config: Config,
    script: Script,
    shutdown_token: CancellationToken,
}

impl App {
    /// Creates a new `App` running the example.com script.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            script: Script::example_domain(),
            shutdown_token: CancellationToken::new(),
        })
    }

    /// A token that aborts the run when cancelled.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Connects to the WebDriver endpoint, runs the script and always deletes
    /// the session afterwards. Failing to create the session is an error; a
    /// failing check is reported through the returned `RunReport`.
    pub async fn run(self) -> Result<RunReport> {
        tracing::info!(
            webdriver_url = %self.config.webdriver_url,
            script = %self.script.name,
            "🚀 Starting check..."
        );

        let shutdown_token = self.shutdown_token.clone();
        let signal_task = tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Ctrl+C received. Aborting run...");
                    shutdown_token.cancel();
                }
                Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C"),
            }
        });

        let session = match WebDriverSession::connect(&self.config).await {
            Ok(session) => session,
            Err(e) => {
                signal_task.abort();
                return Err(e);
            }
        };
        let report = self.execute(&session).await;
        signal_task.abort();

        if let Err(e) = session.close().await {
            tracing::warn!(error = %e, "Failed to delete WebDriver session");
        }

        if let Some(path) = &self.config.report_path {
            match report.write_to(path) {
                Ok(()) => tracing::debug!(path = %path.display(), "Run report written"),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "Failed to write run report"),
            }
        }

        Ok(report)
    }

    /// Runs the script against an already open session.
    pub async fn execute<S>(&self, session: &S) -> RunReport
    where
        S: BrowserSession + ?Sized,
    {
        let started_at_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let started = Instant::now();
        let mut completed = 0;

        let outcome = tokio::select! {
            result = self.script.run_tracked(session, &mut completed) => result,
            _ = self.shutdown_token.cancelled() => Err(Error::Cancelled),
        };

        let report = RunReport::from_outcome(
            &self.script.name,
            self.script.steps.len(),
            completed,
            &outcome,
            started_at_ms,
            started.elapsed().as_millis() as u64,
        );

        match &outcome {
            Ok(()) => tracing::info!(
                script = %report.script,
                duration_ms = report.duration_ms,
                "✅ Check passed"
            ),
            Err(e) => tracing::error!(
                script = %report.script,
                steps_completed = report.steps_completed,
                error = %e,
                "❌ Check failed"
            ),
        }
        report
    }
}
