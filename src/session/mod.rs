//! src/session/mod.rs
//!
//! Defines the `BrowserSession` capability the script runs against. Every
//! operation is a suspension point: the caller does not issue the next request
//! until the previous one has resolved.

use crate::{
    domain::{ElementHandle, Selector},
    error::Result,
};
use async_trait::async_trait;

pub mod webdriver;

pub use webdriver::WebDriverSession;

#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Navigates the browser to `url` and resolves once the page has loaded.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Locates the first element matching `selector`.
    async fn find_element(&self, selector: &Selector) -> Result<ElementHandle>;

    /// Returns the rendered text of `element`.
    async fn element_text(&self, element: &ElementHandle) -> Result<String>;

    /// Returns the value of attribute `name` on `element`, or `None` when the
    /// attribute is absent.
    async fn element_attribute(&self, element: &ElementHandle, name: &str)
        -> Result<Option<String>>;
}
