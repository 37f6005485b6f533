//! Provider descriptors and auth schemes

use crate::config::{HealthProbeKind, ProviderConfig};
use serde::Serialize;

/// Whether a provider serves text or image generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Text,
    Image,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Text => write!(f, "text"),
            ProviderKind::Image => write!(f, "image"),
        }
    }
}

/// Immutable provider descriptor
///
/// Built once from configuration and shared by `Arc` across the registry,
/// the client and the health checker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provider {
    pub name: String,
    pub kind: ProviderKind,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    #[serde(skip)]
    pub api_key_env: Option<String>,
    pub health_probe: HealthProbeKind,
}

impl Provider {
    pub fn from_config(config: &ProviderConfig, kind: ProviderKind) -> Self {
        Self {
            name: config.name.clone(),
            kind,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            api_key_env: config.api_key_env.clone(),
            health_probe: config.health_probe,
        }
    }

    /// Join a path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL hit by the startup liveness probe
    pub fn health_url(&self) -> String {
        match self.health_probe {
            HealthProbeKind::ModelList => self.endpoint("models"),
            HealthProbeKind::BaseUrl => self.base_url.clone(),
        }
    }

    /// Environment variable the credential is read from
    pub fn credential_env(&self) -> String {
        if let Some(env) = &self.api_key_env {
            return env.clone();
        }
        match known_credential_env(&self.name) {
            Some(env) => env.to_string(),
            None => format!(
                "{}_API_KEY",
                self.name.to_ascii_uppercase().replace(['-', '.'], "_")
            ),
        }
    }
}

/// How a provider expects its credential in the `Authorization` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    Bearer,
    Token,
}

impl AuthScheme {
    /// Look up the scheme for a provider name
    pub fn for_provider(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "openai" | "openrouter" | "together" | "groq" | "stability" => Some(Self::Bearer),
            "replicate" => Some(Self::Token),
            _ => None,
        }
    }

    pub fn header_value(&self, secret: &str) -> String {
        match self {
            AuthScheme::Bearer => format!("Bearer {}", secret),
            AuthScheme::Token => format!("Token {}", secret),
        }
    }
}

fn known_credential_env(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "openai" => Some("OPENAI_API_KEY"),
        "openrouter" => Some("OPENROUTER_API_KEY"),
        "together" => Some("TOGETHER_API_KEY"),
        "groq" => Some("GROQ_API_KEY"),
        "stability" => Some("STABILITY_API_KEY"),
        "replicate" => Some("REPLICATE_API_TOKEN"),
        _ => None,
    }
}
