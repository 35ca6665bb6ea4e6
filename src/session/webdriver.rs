//! src/session/webdriver.rs
//!
//! A `BrowserSession` backed by `thirtyfour`. The browser session is created
//! on `connect` and must be released with `close`.

use crate::{
    config::Config,
    domain::{ElementHandle, Selector},
    error::{Error, Result},
    session::BrowserSession,
};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};
use thirtyfour::{error::WebDriverError, By, WebDriver, WebElement};

pub struct WebDriverSession {
    driver: WebDriver,
    // Elements located so far, keyed by the handle id given to the script.
    elements: Mutex<HashMap<String, WebElement>>,
    next_element: AtomicU64,
}

impl WebDriverSession {
    /// Creates a new browser session on the configured WebDriver endpoint.
    pub async fn connect(config: &Config) -> Result<Self> {
        let driver = WebDriver::new(
            config.webdriver_url.as_str(),
            config.browser.capabilities(),
        )
        .await?;

        tracing::info!(
            browser = %config.browser.name,
            webdriver_url = %config.webdriver_url,
            "WebDriver session created"
        );

        Ok(Self {
            driver,
            elements: Mutex::new(HashMap::new()),
            next_element: AtomicU64::new(0),
        })
    }

    /// Quits the browser and ends the session.
    pub async fn close(self) -> Result<()> {
        self.driver.quit().await?;
        tracing::debug!("WebDriver session deleted");
        Ok(())
    }

    fn element(&self, handle: &ElementHandle) -> Result<WebElement> {
        let elements = self.elements.lock().unwrap_or_else(|e| e.into_inner());
        elements
            .get(&handle.id)
            .cloned()
            .ok_or_else(|| Error::ElementNotFound {
                selector: handle.selector.to_string(),
            })
    }
}

#[async_trait]
impl BrowserSession for WebDriverSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.driver
            .goto(url)
            .await
            .map_err(|e| Error::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn find_element(&self, selector: &Selector) -> Result<ElementHandle> {
        let element = match self.driver.find(By::Css(selector.to_string())).await {
            Ok(element) => element,
            Err(WebDriverError::NoSuchElement(..)) => {
                return Err(Error::ElementNotFound {
                    selector: selector.to_string(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        let id = format!("el-{}", self.next_element.fetch_add(1, Ordering::Relaxed));
        self.elements
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id.clone(), element);
        Ok(ElementHandle {
            id,
            selector: selector.clone(),
        })
    }

    async fn element_text(&self, element: &ElementHandle) -> Result<String> {
        let text = self.element(element)?.text().await?;
        Ok(text)
    }

    async fn element_attribute(
        &self,
        element: &ElementHandle,
        name: &str,
    ) -> Result<Option<String>> {
        let value = self.element(element)?.attr(name).await?;
        Ok(value)
    }
}
