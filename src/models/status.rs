use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const GREETING: &str = "Hello from Multi-Cloud DevSecOps sample";

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RootStatus {
    pub status: String,
    pub message: String,
}

impl RootStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: GREETING.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Request/error counters. Nothing records into these yet, so they stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub errors_total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn root_status_shape() {
        let value = serde_json::to_value(RootStatus::ok()).unwrap();
        assert_eq!(
            value,
            json!({ "status": "ok", "message": "Hello from Multi-Cloud DevSecOps sample" })
        );
    }

    #[test]
    fn health_status_shape() {
        let value = serde_json::to_value(HealthStatus::healthy()).unwrap();
        assert_eq!(value, json!({ "status": "healthy" }));
    }

    #[test]
    fn metrics_snapshot_defaults_to_zero() {
        let value = serde_json::to_value(MetricsSnapshot::default()).unwrap();
        assert_eq!(value, json!({ "requests_total": 0, "errors_total": 0 }));
    }
}
