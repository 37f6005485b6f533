//! Startup health probes through `ReqwestTransport`

use crate::common::MockProviders;
use std::time::{Duration, Instant};
use storyweave_ai::{OverallHealth, StaticCredentials};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_all_probes_healthy() {
    let mocks = MockProviders::start().await;
    for probe in ["/openai/models", "/openrouter/models"] {
        Mock::given(method("GET"))
            .and(path(probe))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\":[]}"))
            .mount(&mocks.server)
            .await;
    }
    // Base-URL probe: a 404 still proves the host is alive
    Mock::given(method("GET"))
        .and(path("/together"))
        .and(header("authorization", "Bearer tg-test"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mocks.server)
        .await;

    let orchestrator = mocks.orchestrator(mocks.config(), MockProviders::credentials());
    let health = orchestrator.startup_health_check().await.unwrap();

    assert_eq!(health.status, OverallHealth::Healthy);
    assert_eq!(health.summary.total, 3);
    assert_eq!(health.providers[2].status_code, Some(404));
}

#[tokio::test]
async fn test_degraded_when_one_provider_rejects_auth() {
    let mocks = MockProviders::start().await;
    Mock::given(method("GET"))
        .and(path("/openai/models"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mocks.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/together"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mocks.server)
        .await;

    let credentials = StaticCredentials::new()
        .with("openai", "sk-test")
        .with("openrouter", "your-api-key-here")
        .with("together", "tg-test");
    let orchestrator = mocks.orchestrator(mocks.config(), credentials);
    let health = orchestrator.startup_health_check().await.unwrap();

    assert_eq!(health.status, OverallHealth::Degraded);
    assert_eq!(health.summary.healthy, 1);
    assert_eq!(
        health.providers[1].error.as_deref(),
        Some("credential not configured")
    );
    assert_eq!(health.providers[2].status_code, Some(403));
    assert_eq!(mocks.hits("/openrouter/models").await, 0);
}

#[tokio::test]
async fn test_slow_provider_times_out_without_blocking_others() {
    let mocks = MockProviders::start().await;
    Mock::given(method("GET"))
        .and(path("/openai/models"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mocks.server)
        .await;
    for probe in ["/openrouter/models", "/together"] {
        Mock::given(method("GET"))
            .and(path(probe))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mocks.server)
            .await;
    }

    let mut config = mocks.config();
    config.health.timeout_ms = 200;
    let orchestrator = mocks.orchestrator(config, MockProviders::credentials());

    let started = Instant::now();
    let health = orchestrator.startup_health_check().await.unwrap();

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(health.status, OverallHealth::Degraded);
    assert!(!health.providers[0].healthy);
    assert_eq!(
        health.providers[0].error.as_deref(),
        Some("Health check for openai timed out after 200ms")
    );
    assert!(health.providers[1].healthy);
    assert!(health.providers[2].healthy);
}
