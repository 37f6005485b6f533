//! Provider descriptors, credentials and selection policy

pub mod credentials;
pub mod provider;
pub mod provider_registry;

pub use credentials::{CredentialResolver, EnvCredentials, StaticCredentials, is_placeholder};
pub use provider::{AuthScheme, Provider, ProviderKind};
pub use provider_registry::{ProviderRegistry, ProviderTargets, RoutingDecision};
