//! Health status value objects

use serde::{Deserialize, Serialize};

/// Liveness classification for one backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    /// Backend reachable and reporting success
    Healthy,
    /// Backend replied, but with an error status
    Unhealthy,
    /// Transport failure - the backend never replied
    Unreachable,
}

impl HealthState {
    pub fn as_str(&self) -> &str {
        match self {
            HealthState::Healthy => "healthy",
            HealthState::Unhealthy => "unhealthy",
            HealthState::Unreachable => "unreachable",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of probing one backend
///
/// Transient — recomputed on every probe, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// The probed subject ("member1", ..., or "chairman")
    pub subject_id: String,
    /// Liveness classification
    pub state: HealthState,
    /// Error detail for unhealthy/unreachable subjects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl HealthStatus {
    pub fn healthy(subject_id: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            state: HealthState::Healthy,
            detail: None,
        }
    }

    pub fn unhealthy(subject_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            state: HealthState::Unhealthy,
            detail: Some(detail.into()),
        }
    }

    pub fn unreachable(subject_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            state: HealthState::Unreachable,
            detail: Some(detail.into()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.state == HealthState::Healthy
    }
}

/// Consolidated report over every member plus the chairman
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// One entry per configured member, in configured order
    pub members: Vec<HealthStatus>,
    /// The chairman's status
    pub chairman: HealthStatus,
}

impl HealthReport {
    /// True when every member and the chairman are healthy
    pub fn all_healthy(&self) -> bool {
        self.chairman.is_healthy() && self.members.iter().all(HealthStatus::is_healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serializes_snake_case() {
        let json = serde_json::to_value(HealthState::Unreachable).unwrap();
        assert_eq!(json, "unreachable");
    }

    #[test]
    fn test_healthy_has_no_detail() {
        let status = HealthStatus::healthy("member1");
        assert!(status.is_healthy());
        assert!(status.detail.is_none());
    }

    #[test]
    fn test_all_healthy() {
        let report = HealthReport {
            members: vec![
                HealthStatus::healthy("member1"),
                HealthStatus::unreachable("member2", "connection refused"),
            ],
            chairman: HealthStatus::healthy("chairman"),
        };
        assert!(!report.all_healthy());

        let report = HealthReport {
            members: vec![HealthStatus::healthy("member1")],
            chairman: HealthStatus::healthy("chairman"),
        };
        assert!(report.all_healthy());
    }
}
