//! Telemetry statistics endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    /// Look-back window; omitted means the whole buffer
    pub window_ms: Option<u64>,
}

/// `GET /telemetry/stats`
pub async fn stats(state: web::Data<AppState>, query: web::Query<StatsQuery>) -> HttpResponse {
    let window = query.window_ms.map(Duration::from_millis);
    let stats = state.telemetry.windowed_stats(window);
    HttpResponse::Ok().json(ApiResponse::success(stats))
}
