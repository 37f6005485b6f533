//! HTTP response handling for errors

use super::types::OrchestratorError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for OrchestratorError {
    fn status_code(&self) -> StatusCode {
        match self {
            OrchestratorError::NoProviderAvailable(_)
            | OrchestratorError::AllProvidersFailed { .. } => StatusCode::SERVICE_UNAVAILABLE,
            OrchestratorError::ProviderRequestFailed { .. } => StatusCode::BAD_GATEWAY,
            OrchestratorError::HealthCheckTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_code = match self {
            OrchestratorError::Config(_) => "CONFIG_ERROR",
            OrchestratorError::HttpClient(_) => "HTTP_CLIENT_ERROR",
            OrchestratorError::Serialization(_) | OrchestratorError::Yaml(_) => {
                "SERIALIZATION_ERROR"
            }
            OrchestratorError::Io(_) => "IO_ERROR",
            OrchestratorError::NoProviderAvailable(_) => "NO_PROVIDER_AVAILABLE",
            OrchestratorError::UnknownProvider(_) => "UNKNOWN_PROVIDER",
            OrchestratorError::ProviderRequestFailed { .. } => "PROVIDER_REQUEST_FAILED",
            OrchestratorError::AllProvidersFailed { .. } => "ALL_PROVIDERS_FAILED",
            OrchestratorError::HealthCheckTimeout { .. } => "HEALTH_CHECK_TIMEOUT",
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message: self.to_string(),
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
