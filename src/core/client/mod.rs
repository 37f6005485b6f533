//! Resilient provider client
//!
//! Wire payloads, the transport seam, retry policy and the retry/fallback
//! state machine that ties them to telemetry.

pub mod resilient;
pub mod retry;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod scripted;

pub use resilient::{ResilientClient, RoutedResponse};
pub use retry::{ErrorClass, RetryPolicy, classify};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, ImageData, ImageRequest, ImageResponse,
    InferencePayload, MessageRole,
};
