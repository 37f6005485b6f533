//! Startup health checking
//!
//! Concurrent liveness probes against every configured provider, each bounded
//! by a timeout, classified into healthy, degraded or unhealthy.

mod checker;
mod types;


pub use checker::{CREDENTIAL_NOT_CONFIGURED, HEALTH_CHECK_FUNCTION, HealthChecker, is_healthy_status};
pub use types::{HealthCheckResult, HealthSummary, OverallHealth, SystemHealth};
