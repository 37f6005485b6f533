//! Startup health snapshot endpoint

use crate::monitoring::health::SystemHealth;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use tracing::debug;

/// `GET /health`
///
/// Always 200: the snapshot is advisory and a degraded provider set does not
/// make this process unavailable.
pub async fn startup_health(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health snapshot requested");

    match &state.startup_health {
        Some(health) => HttpResponse::Ok().json(ApiResponse::success(health.as_ref())),
        None => HttpResponse::Ok().json(ApiResponse::<SystemHealth>::error(
            "startup health check disabled",
        )),
    }
}
