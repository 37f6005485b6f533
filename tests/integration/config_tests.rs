//! Configuration loading from YAML files

use std::io::Write;
use storyweave_ai::config::{HealthProbeKind, LogFormat};
use storyweave_ai::{Config, OrchestratorError};
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_load_full_config() {
    let file = write_config(
        r#"
providers:
  text:
    primary:
      name: groq
      base_url: https://api.groq.com/openai/v1
      model: llama-3.1-8b-instant
      max_tokens: 1024
      temperature: 0.7
    fallback:
      name: openrouter
      base_url: https://openrouter.ai/api/v1
      model: meta-llama/llama-3.1-70b-instruct
      max_tokens: 2048
      temperature: 0.8
  image:
    name: stability
    base_url: https://api.stability.ai/v1
    model: stable-diffusion-xl
    health_probe: base_url
retry:
  max_retries: 5
  base_delay_ms: 250
telemetry:
  capacity: 50
logging:
  level: debug
  format: json
"#,
    );

    let config = Config::from_file(file.path()).await.unwrap();

    assert_eq!(config.providers.text.primary.name, "groq");
    assert_eq!(config.providers.image.health_probe, HealthProbeKind::BaseUrl);
    assert_eq!(config.retry.max_retries, 5);
    assert_eq!(config.retry.base_delay_ms, 250);
    assert_eq!(config.retry.max_delay_ms, 10_000);
    assert_eq!(config.telemetry.capacity, 50);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.health.enabled);
}

#[tokio::test]
async fn test_empty_file_uses_defaults() {
    let file = write_config("{}\n");
    let config = Config::from_file(file.path()).await.unwrap();
    assert_eq!(config, Config::default());
}

#[tokio::test]
async fn test_invalid_values_rejected() {
    let file = write_config(
        r#"
retry:
  base_delay_ms: 20000
  max_delay_ms: 1000
"#,
    );
    let err = Config::from_file(file.path()).await.unwrap_err();
    assert!(matches!(err, OrchestratorError::Config(ref m) if m.contains("Retry")));
}

#[tokio::test]
async fn test_unparseable_yaml() {
    let file = write_config("retry: [not, a, map");
    let err = Config::from_file(file.path()).await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[tokio::test]
async fn test_missing_file() {
    let err = Config::from_file("/nonexistent/storyweave.yaml")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
