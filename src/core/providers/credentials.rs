//! Credential resolution
//!
//! Credentials are never stored by the registry; they are resolved from the
//! process configuration each time a decision needs them.

use super::provider::Provider;
use std::collections::HashMap;

/// Values shipped in example `.env` files that must never count as a key
const PLACEHOLDER_VALUES: &[&str] = &[
    "your-api-key-here",
    "your_api_key_here",
    "your-api-key",
    "sk-placeholder",
    "placeholder",
    "changeme",
    "xxx",
];

/// True if a resolved secret is a known placeholder rather than a real key
pub fn is_placeholder(secret: &str) -> bool {
    let secret = secret.trim();
    if secret.is_empty() {
        return true;
    }
    let lower = secret.to_ascii_lowercase();
    PLACEHOLDER_VALUES.contains(&lower.as_str())
        || lower.starts_with("your-")
        || lower.starts_with('<')
}

/// Resolves the secret for a provider
#[cfg_attr(test, mockall::automock)]
pub trait CredentialResolver: Send + Sync {
    fn resolve(&self, provider: &Provider) -> Option<String>;
}

/// Reads credentials from the process environment at call time
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentials;

impl CredentialResolver for EnvCredentials {
    fn resolve(&self, provider: &Provider) -> Option<String> {
        std::env::var(provider.credential_env()).ok()
    }
}

/// In-memory credentials keyed by provider name
#[derive(Debug, Default, Clone)]
pub struct StaticCredentials {
    secrets: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, provider: &str, secret: &str) -> Self {
        self.secrets
            .insert(provider.to_string(), secret.to_string());
        self
    }
}

impl CredentialResolver for StaticCredentials {
    fn resolve(&self, provider: &Provider) -> Option<String> {
        self.secrets.get(&provider.name).cloned()
    }
}
