//! Retry and fallback through `ReqwestTransport`

use crate::common::{MockProviders, chat_completion_body, image_body};
use storyweave_ai::{ChatMessage, OrchestratorError, TelemetryStatus};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn story_prompt() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You write bedtime stories."),
        ChatMessage::user("A whale who learns to whistle."),
    ]
}

#[tokio::test]
async fn test_transient_errors_are_retried_until_success() {
    let mocks = MockProviders::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .up_to_n_times(2)
        .mount(&mocks.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/openai/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("Once")))
        .mount(&mocks.server)
        .await;

    let orchestrator = mocks.orchestrator(mocks.config(), MockProviders::credentials());
    let routed = orchestrator
        .generate_text("generate_story", story_prompt())
        .await
        .unwrap();

    assert!(!routed.used_fallback);
    assert_eq!(routed.response.content(), Some("Once"));
    assert_eq!(mocks.hits("/openai/chat/completions").await, 3);

    let statuses: Vec<_> = orchestrator
        .telemetry()
        .snapshot()
        .iter()
        .map(|e| e.status)
        .collect();
    assert_eq!(
        statuses,
        vec![
            TelemetryStatus::Retry,
            TelemetryStatus::Retry,
            TelemetryStatus::Success
        ]
    );
    assert_eq!(orchestrator.telemetry().snapshot()[2].token_usage, Some(30));
}

#[tokio::test]
async fn test_auth_failure_falls_back_without_retry() {
    let mocks = MockProviders::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&mocks.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/openrouter/chat/completions"))
        .and(header("authorization", "Bearer or-test"))
        .and(body_partial_json(serde_json::json!({
            "model": "meta-llama/llama-3.1-70b-instruct",
            "max_tokens": 2048
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("Twice")))
        .mount(&mocks.server)
        .await;

    let orchestrator = mocks.orchestrator(mocks.config(), MockProviders::credentials());
    let routed = orchestrator
        .generate_text("generate_story", story_prompt())
        .await
        .unwrap();

    assert!(routed.used_fallback);
    assert_eq!(routed.provider.name, "openrouter");
    assert_eq!(routed.response.content(), Some("Twice"));
    assert_eq!(mocks.hits("/openai/chat/completions").await, 1);

    let stats = orchestrator.stats(None);
    let openai = stats.iter().find(|s| s.provider == "openai").unwrap();
    assert_eq!(openai.failure_count, 1);
    assert_eq!(openai.fallback_count, 1);
    assert_eq!(openai.success_rate, 0.0);
}

#[tokio::test]
async fn test_both_providers_exhausted() {
    let mocks = MockProviders::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&mocks.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/openrouter/chat/completions"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mocks.server)
        .await;

    let orchestrator = mocks.orchestrator(mocks.config(), MockProviders::credentials());
    let err = orchestrator
        .generate_text("generate_story", story_prompt())
        .await
        .unwrap_err();

    // max_retries = 2: three attempts per provider
    assert_eq!(mocks.hits("/openai/chat/completions").await, 3);
    assert_eq!(mocks.hits("/openrouter/chat/completions").await, 3);
    assert_eq!(
        err.to_string(),
        "All providers failed. Primary (openai): HTTP 429: rate limited. \
         Fallback (openrouter): HTTP 502: bad gateway"
    );
    assert!(matches!(err, OrchestratorError::AllProvidersFailed { .. }));
}

#[tokio::test]
async fn test_image_generation() {
    let mocks = MockProviders::start().await;
    Mock::given(method("POST"))
        .and(path("/together/images/generations"))
        .and(body_partial_json(serde_json::json!({
            "model": "black-forest-labs/FLUX.1-schnell",
            "prompt": "a whale whistling at dawn"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(image_body("https://cdn.test/whale.png")),
        )
        .mount(&mocks.server)
        .await;

    let orchestrator = mocks.orchestrator(mocks.config(), MockProviders::credentials());
    let routed = orchestrator
        .generate_image("illustrate_page", "a whale whistling at dawn")
        .await
        .unwrap();

    assert_eq!(
        routed.response.data[0].url.as_deref(),
        Some("https://cdn.test/whale.png")
    );
}
