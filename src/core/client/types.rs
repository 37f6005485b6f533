//! Provider-facing request and response shapes

use crate::core::providers::Provider;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A request body the resilient client can send to any provider
pub trait InferencePayload: Serialize + Clone + Send + Sync {
    /// Parsed success body
    type Response: DeserializeOwned + Send;

    /// Path appended to the provider's base URL
    const ENDPOINT: &'static str;

    /// Rewrite the payload for a different provider's constraints
    fn adapt_to(&self, provider: &Provider) -> Self;

    /// Tokens reported by the provider, if any
    fn token_usage(_response: &Self::Response) -> Option<u64> {
        None
    }
}

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Chat-completion request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatRequest {
    /// Build a request using the provider's model and sampling defaults
    pub fn for_provider(provider: &Provider, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: provider.model.clone(),
            messages,
            max_tokens: provider.max_tokens,
            temperature: provider.temperature,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

impl InferencePayload for ChatRequest {
    type Response = ChatResponse;

    const ENDPOINT: &'static str = "chat/completions";

    fn adapt_to(&self, provider: &Provider) -> Self {
        Self {
            model: provider.model.clone(),
            messages: self.messages.clone(),
            max_tokens: self.max_tokens.min(provider.max_tokens),
            temperature: self.temperature,
        }
    }

    fn token_usage(response: &ChatResponse) -> Option<u64> {
        response.usage.as_ref().map(|usage| usage.total_tokens)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: Option<u64>,
    #[serde(default)]
    pub completion_tokens: Option<u64>,
    pub total_tokens: u64,
}

/// Chat-completion response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Content of the first choice
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// Image generation request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl ImageRequest {
    pub fn for_provider(provider: &Provider, prompt: impl Into<String>) -> Self {
        Self {
            model: provider.model.clone(),
            prompt: prompt.into(),
            n: 1,
            size: None,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

impl InferencePayload for ImageRequest {
    type Response = ImageResponse;

    const ENDPOINT: &'static str = "images/generations";

    fn adapt_to(&self, provider: &Provider) -> Self {
        Self {
            model: provider.model.clone(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub b64_json: Option<String>,
}

/// Image generation response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResponse {
    pub data: Vec<ImageData>,
}
