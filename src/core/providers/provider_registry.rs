//! Provider Registry
//!
//! Static description of the configured providers plus the policy that picks
//! a provider for each request category. Decisions are re-evaluated on every
//! call because credentials may appear or disappear in long-lived processes.

use super::credentials::{CredentialResolver, is_placeholder};
use super::provider::{AuthScheme, Provider, ProviderKind};
use crate::config::ProvidersConfig;
use crate::utils::error::{OrchestratorError, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Providers probed by the startup health check, grouped by category
#[derive(Debug, Clone, Default)]
pub struct ProviderTargets {
    pub text: Vec<Arc<Provider>>,
    pub image: Vec<Arc<Provider>>,
}

impl ProviderTargets {
    /// All targets, text first
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Provider>> {
        self.text.iter().chain(self.image.iter())
    }

    pub fn len(&self) -> usize {
        self.text.len() + self.image.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Current routing decision for both categories
#[derive(Debug, Clone, Serialize)]
pub struct RoutingDecision {
    pub text: Provider,
    pub image: Provider,
}

/// Provider registry with primary/fallback selection
pub struct ProviderRegistry {
    text_primary: Arc<Provider>,
    text_fallback: Arc<Provider>,
    image: Arc<Provider>,
    credentials: Arc<dyn CredentialResolver>,
}

impl ProviderRegistry {
    /// Create a registry from configuration
    pub fn new(config: &ProvidersConfig, credentials: Arc<dyn CredentialResolver>) -> Self {
        Self {
            text_primary: Arc::new(Provider::from_config(&config.text.primary, ProviderKind::Text)),
            text_fallback: Arc::new(Provider::from_config(
                &config.text.fallback,
                ProviderKind::Text,
            )),
            image: Arc::new(Provider::from_config(&config.image, ProviderKind::Image)),
            credentials,
        }
    }

    pub fn text_primary(&self) -> &Arc<Provider> {
        &self.text_primary
    }

    pub fn text_fallback(&self) -> &Arc<Provider> {
        &self.text_fallback
    }

    pub fn image(&self) -> &Arc<Provider> {
        &self.image
    }

    /// Credential resolver shared with the health checker
    pub fn credentials(&self) -> Arc<dyn CredentialResolver> {
        Arc::clone(&self.credentials)
    }

    /// True iff a non-placeholder credential resolves for the provider
    pub fn is_available(&self, provider: &Provider) -> bool {
        self.credentials
            .resolve(provider)
            .is_some_and(|secret| !is_placeholder(&secret))
    }

    /// Primary text provider if usable, else the fallback
    pub fn select_text_provider(&self) -> Result<Arc<Provider>> {
        if self.is_available(&self.text_primary) {
            debug!(provider = %self.text_primary.name, "Selected primary text provider");
            return Ok(Arc::clone(&self.text_primary));
        }

        if self.is_available(&self.text_fallback) {
            warn!(
                primary = %self.text_primary.name,
                fallback = %self.text_fallback.name,
                "Primary text provider has no credential, selecting fallback"
            );
            return Ok(Arc::clone(&self.text_fallback));
        }

        Err(OrchestratorError::no_provider_available(
            ProviderKind::Text.to_string(),
        ))
    }

    /// The configured image provider if usable
    pub fn select_image_provider(&self) -> Result<Arc<Provider>> {
        if self.is_available(&self.image) {
            return Ok(Arc::clone(&self.image));
        }

        Err(OrchestratorError::no_provider_available(
            ProviderKind::Image.to_string(),
        ))
    }

    /// Both routing decisions at once
    pub fn routing(&self) -> Result<RoutingDecision> {
        Ok(RoutingDecision {
            text: Provider::clone(&*self.select_text_provider()?),
            image: Provider::clone(&*self.select_image_provider()?),
        })
    }

    /// Provider-specific `Authorization` header value
    pub fn auth_header(&self, provider: &Provider) -> Result<String> {
        let scheme = AuthScheme::for_provider(&provider.name)
            .ok_or_else(|| OrchestratorError::unknown_provider(&provider.name))?;

        let secret = self
            .credentials
            .resolve(provider)
            .filter(|secret| !is_placeholder(secret))
            .ok_or_else(|| OrchestratorError::no_provider_available(&provider.name))?;

        Ok(scheme.header_value(secret.trim()))
    }

    /// Every configured provider grouped for the startup probe
    pub fn health_targets(&self) -> ProviderTargets {
        ProviderTargets {
            text: vec![
                Arc::clone(&self.text_primary),
                Arc::clone(&self.text_fallback),
            ],
            image: vec![Arc::clone(&self.image)],
        }
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("text_primary", &self.text_primary.name)
            .field("text_fallback", &self.text_fallback.name)
            .field("image", &self.image.name)
            .finish()
    }
}
