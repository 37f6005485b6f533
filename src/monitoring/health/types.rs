//! Health checking types and data structures

use crate::core::providers::ProviderKind;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregate classification of a probe run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallHealth {
    /// Every probe succeeded
    Healthy,
    /// At least one probe succeeded and at least one failed
    Degraded,
    /// No probe succeeded, or there was nothing to probe
    Unhealthy,
}

impl OverallHealth {
    pub fn from_counts(healthy: usize, total: usize) -> Self {
        if total > 0 && healthy == total {
            OverallHealth::Healthy
        } else if healthy == 0 {
            OverallHealth::Unhealthy
        } else {
            OverallHealth::Degraded
        }
    }
}

impl std::fmt::Display for OverallHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallHealth::Healthy => write!(f, "healthy"),
            OverallHealth::Degraded => write!(f, "degraded"),
            OverallHealth::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Outcome of probing one provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthCheckResult {
    pub provider: String,
    pub kind: ProviderKind,
    pub healthy: bool,
    /// Wall time of the probe, including a timed-out wait
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSummary {
    pub total: usize,
    pub healthy: usize,
    pub unhealthy: usize,
    pub health_percentage: f64,
}

impl HealthSummary {
    pub fn from_results(results: &[HealthCheckResult]) -> Self {
        let total = results.len();
        let healthy = results.iter().filter(|result| result.healthy).count();
        let health_percentage = if total == 0 {
            0.0
        } else {
            healthy as f64 / total as f64 * 100.0
        };

        Self {
            total,
            healthy,
            unhealthy: total - healthy,
            health_percentage,
        }
    }
}

/// Result of a full startup probe run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemHealth {
    pub status: OverallHealth,
    /// One entry per probed provider, in target order
    pub providers: Vec<HealthCheckResult>,
    pub summary: HealthSummary,
    pub checked_at: DateTime<Utc>,
}

impl SystemHealth {
    pub fn from_results(providers: Vec<HealthCheckResult>) -> Self {
        let summary = HealthSummary::from_results(&providers);
        Self {
            status: OverallHealth::from_counts(summary.healthy, summary.total),
            providers,
            summary,
            checked_at: Utc::now(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == OverallHealth::Healthy
    }

    pub fn unhealthy_providers(&self) -> impl Iterator<Item = &HealthCheckResult> {
        self.providers.iter().filter(|result| !result.healthy)
    }
}
