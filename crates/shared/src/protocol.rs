use serde::{Deserialize, Serialize};

pub const HEALTH_STATUS_UP: &str = "UP";

/// Body of `GET /api/health`. Sent with 200 when healthy and 503 when degraded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub ml_service_status: Option<String>,
    #[serde(default)]
    pub uptime: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthReport {
    pub fn is_up(&self) -> bool {
        self.status == HEALTH_STATUS_UP
    }
}

/// Body of `GET /api/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsSnapshot {
    pub total: u64,
    pub positive_count: u64,
    pub negative_count: u64,
    pub neutral_count: u64,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
    pub average_probability_positive: f64,
    pub average_probability_negative: f64,
    pub average_probability_neutral: f64,
}
