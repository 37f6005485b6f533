//! Common test utilities for storyweave-ai
//!
//! Every provider is served by one `wiremock` server under its own path
//! prefix (`/openai`, `/openrouter`, `/together`).

pub mod fixtures;

pub use fixtures::{MockProviders, chat_completion_body, image_body};
