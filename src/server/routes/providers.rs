//! Routing decision endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::OrchestratorError;
use actix_web::{HttpResponse, web};

/// `GET /providers`
pub async fn routing(state: web::Data<AppState>) -> Result<HttpResponse, OrchestratorError> {
    let decision = state.registry.routing()?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(decision)))
}
