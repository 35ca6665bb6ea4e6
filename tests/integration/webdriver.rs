//! tests/integration/webdriver.rs
//!
//! Exercises the `thirtyfour`-backed `WebDriverSession` over real HTTP
//! against the fake endpoint.

use crate::common::harness::{FakePage, FakeWebDriver, SESSION_ID};
use serde_json::json;
use synthetic_check::{
    domain::Selector,
    script::Script,
    session::{BrowserSession, WebDriverSession},
    Config, Error,
};
use test_log::test;

#[test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn test_connect_sends_capabilities() {
    let driver = FakeWebDriver::spawn(FakePage::example_domain()).await.unwrap();

    let session = WebDriverSession::connect(&driver.config()).await.unwrap();

    let capabilities = driver.observed(|o| o.capabilities.clone());
    assert_eq!(capabilities.len(), 1);
    assert_eq!(capabilities[0]["browserName"], "chrome");
    assert_eq!(
        capabilities[0]["goog:chromeOptions"]["args"],
        json!(["--headless=new"])
    );
    session.close().await.unwrap();
}

#[test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn test_script_passes_over_http() {
    let driver = FakeWebDriver::spawn(FakePage::example_domain()).await.unwrap();
    let session = WebDriverSession::connect(&driver.config()).await.unwrap();

    let completed = Script::example_domain().run(&session).await.unwrap();
    session.close().await.unwrap();

    assert_eq!(completed, 3);
    let (navigations, commands, deleted) = driver.observed(|o| {
        (
            o.navigations.clone(),
            o.commands.clone(),
            o.deleted_sessions.clone(),
        )
    });
    assert_eq!(navigations, ["http://example.com"]);
    assert_eq!(
        commands,
        [
            "navigate http://example.com",
            "find css selector h1",
            "text heading",
            "find css selector div > p > a",
            "attribute link href",
        ]
    );
    assert_eq!(deleted, [SESSION_ID]);
}

#[test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn test_no_such_element_maps_to_element_not_found() {
    let driver = FakeWebDriver::spawn(FakePage::example_domain()).await.unwrap();
    let session = WebDriverSession::connect(&driver.config()).await.unwrap();

    let err = session
        .find_element(&Selector::css("main > h2"))
        .await
        .unwrap_err();
    session.close().await.unwrap();

    assert!(
        matches!(err, Error::ElementNotFound { ref selector } if selector == "main > h2"),
        "{err:?}"
    );
}

#[test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn test_navigation_error_maps_to_navigation() {
    let driver = FakeWebDriver::spawn(
        FakePage::example_domain().failing_navigation("net::ERR_NAME_NOT_RESOLVED"),
    )
    .await
    .unwrap();
    let session = WebDriverSession::connect(&driver.config()).await.unwrap();

    let err = session.navigate("http://example.com").await.unwrap_err();
    session.close().await.unwrap();

    match err {
        Error::Navigation { url, reason } => {
            assert_eq!(url, "http://example.com");
            assert!(!reason.is_empty());
        }
        other => panic!("expected a navigation error, got {other:?}"),
    }
}

#[test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn test_absent_attribute_is_none() {
    let driver = FakeWebDriver::spawn(FakePage::example_domain().with_link_href(None))
        .await
        .unwrap();
    let session = WebDriverSession::connect(&driver.config()).await.unwrap();

    let link = session
        .find_element(&Selector::css("div > p > a"))
        .await
        .unwrap();
    let href = session.element_attribute(&link, "href").await.unwrap();
    session.close().await.unwrap();

    assert_eq!(href, None);
}

#[test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn test_unreachable_endpoint_fails_to_connect() {
    // Bind and release a port so nothing is listening on it.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let config = Config {
        webdriver_url: format!("http://{addr}"),
        ..Config::default()
    };

    let result = WebDriverSession::connect(&config).await;

    assert!(matches!(result, Err(Error::WebDriver(_))));
}
