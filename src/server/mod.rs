//! Operational HTTP surface
//!
//! Read-only endpoints over the startup health snapshot, the current routing
//! decision and windowed telemetry.

pub mod routes;
pub mod server;
pub mod state;


pub use server::HttpServer;
pub use state::AppState;
