//! src/script.rs
//!
//! The scripted check: an ordered list of steps executed one after another
//! against a `BrowserSession`. Any failing step aborts the remaining ones.

use crate::{
    domain::{Expectation, Selector},
    error::Result,
    session::BrowserSession,
};

pub const TARGET_URL: &str = "http://example.com";
pub const HEADING_SELECTOR: &str = "h1";
pub const HEADING_TEXT: &str = "Example Domain";
pub const HEADING_MISMATCH: &str = "Page H1 title did not match";
pub const LINK_SELECTOR: &str = "div > p > a";
pub const LINK_HREF: &str = "http://www.iana.org/domains/example";
pub const LINK_MISMATCH: &str = "More information link did not match";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Navigate {
        url: String,
    },
    /// Compares the rendered text of the first element matching `selector`.
    ExpectText {
        selector: Selector,
        expectation: Expectation,
    },
    /// Compares one attribute of the first element matching `selector`.
    ExpectAttribute {
        selector: Selector,
        attribute: String,
        expectation: Expectation,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Navigate { .. } => "navigate",
            Step::ExpectText { .. } => "expect_text",
            Step::ExpectAttribute { .. } => "expect_attribute",
        }
    }

    async fn execute<S>(&self, session: &S) -> Result<()>
    where
        S: BrowserSession + ?Sized,
    {
        match self {
            Step::Navigate { url } => {
                tracing::debug!(%url, "Navigating");
                session.navigate(url).await
            }
            Step::ExpectText {
                selector,
                expectation,
            } => {
                let element = session.find_element(selector).await?;
                let text = session.element_text(&element).await?;
                tracing::debug!(%selector, %text, "Fetched element text");
                expectation.check(Some(text.as_str()))
            }
            Step::ExpectAttribute {
                selector,
                attribute,
                expectation,
            } => {
                let element = session.find_element(selector).await?;
                let value = session.element_attribute(&element, attribute).await?;
                tracing::debug!(%selector, %attribute, ?value, "Fetched element attribute");
                expectation.check(value.as_deref())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    pub name: String,
    pub steps: Vec<Step>,
}

impl Script {
    /// The example.com check: load the page, verify the heading and the
    /// "More information" link.
    pub fn example_domain() -> Self {
        Self {
            name: "example-domain".to_string(),
            steps: vec![
                Step::Navigate {
                    url: TARGET_URL.to_string(),
                },
                Step::ExpectText {
                    selector: Selector::css(HEADING_SELECTOR),
                    expectation: Expectation::new(HEADING_TEXT, HEADING_MISMATCH),
                },
                Step::ExpectAttribute {
                    selector: Selector::css(LINK_SELECTOR),
                    attribute: "href".to_string(),
                    expectation: Expectation::new(LINK_HREF, LINK_MISMATCH),
                },
            ],
        }
    }

    /// Runs every step in order, stopping at the first failure. Returns the
    /// number of steps executed.
    pub async fn run<S>(&self, session: &S) -> Result<usize>
    where
        S: BrowserSession + ?Sized,
    {
        let mut completed = 0;
        self.run_tracked(session, &mut completed).await?;
        Ok(completed)
    }

    /// Like `run`, but records progress in `completed` so the caller can tell
    /// how far a failed or cancelled run got.
    pub async fn run_tracked<S>(&self, session: &S, completed: &mut usize) -> Result<()>
    where
        S: BrowserSession + ?Sized,
    {
        tracing::info!(script = %self.name, steps = self.steps.len(), "Running script");

        for (index, step) in self.steps.iter().enumerate() {
            if let Err(e) = step.execute(session).await {
                tracing::warn!(script = %self.name, step = index, kind = step.name(), error = %e, "Step failed");
                return Err(e);
            }
            *completed += 1;
            tracing::info!(script = %self.name, step = index, kind = step.name(), "Step passed");
        }
        Ok(())
    }
}
