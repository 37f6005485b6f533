//! Provider configuration

use serde::{Deserialize, Serialize};

/// How a provider's liveness is probed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HealthProbeKind {
    /// `GET {base_url}/models`
    #[default]
    ModelList,
    /// Bare `GET {base_url}` for providers without a listing endpoint
    BaseUrl,
}

/// Provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name, also selects the auth scheme
    pub name: String,
    /// Base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Output token cap
    #[serde(default)]
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default)]
    pub temperature: f32,
    /// Environment variable holding the credential (catalogue default if unset)
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Liveness probe style
    #[serde(default)]
    pub health_probe: HealthProbeKind,
}

impl ProviderConfig {
    pub fn openai() -> Self {
        Self {
            name: "openai".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 4096,
            temperature: 0.8,
            api_key_env: None,
            health_probe: HealthProbeKind::ModelList,
        }
    }

    pub fn openrouter() -> Self {
        Self {
            name: "openrouter".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "meta-llama/llama-3.1-70b-instruct".to_string(),
            max_tokens: 2048,
            temperature: 0.8,
            api_key_env: None,
            health_probe: HealthProbeKind::ModelList,
        }
    }

    pub fn together_images() -> Self {
        Self {
            name: "together".to_string(),
            base_url: "https://api.together.xyz/v1".to_string(),
            model: "black-forest-labs/FLUX.1-schnell".to_string(),
            max_tokens: 0,
            temperature: 0.0,
            api_key_env: None,
            health_probe: HealthProbeKind::BaseUrl,
        }
    }
}

/// Primary/fallback pair for text generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProvidersConfig {
    #[serde(default = "ProviderConfig::openai")]
    pub primary: ProviderConfig,
    #[serde(default = "ProviderConfig::openrouter")]
    pub fallback: ProviderConfig,
}

impl Default for TextProvidersConfig {
    fn default() -> Self {
        Self {
            primary: ProviderConfig::openai(),
            fallback: ProviderConfig::openrouter(),
        }
    }
}

/// All configured providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub text: TextProvidersConfig,
    #[serde(default = "ProviderConfig::together_images")]
    pub image: ProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            text: TextProvidersConfig::default(),
            image: ProviderConfig::together_images(),
        }
    }
}

impl ProvidersConfig {
    /// Every configured provider, text first
    pub fn all(&self) -> [&ProviderConfig; 3] {
        [&self.text.primary, &self.text.fallback, &self.image]
    }
}
