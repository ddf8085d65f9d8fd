//! Member and chairman client ports
//!
//! Defines how the use cases talk to the LLM-backed council services.
//! Every call returns an explicit `Result` — failures are values at this
//! boundary, never panics, so the fan-out executor can treat success and
//! failure uniformly across concurrent tasks.

use async_trait::async_trait;
use council_domain::{Answer, CouncilMember, HealthStatus, Review, Synthesis};
use thiserror::Error;

/// Errors from one backend call
///
/// `Unreachable` covers transport failures (connect refused, DNS, reset);
/// `Status` covers replies that arrived but carried an error status. A
/// failed call is final - no layer retries.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Backend error ({status}): {detail}")]
    Status { status: u16, detail: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// True for transport-level failures where the backend never replied
    pub fn is_unreachable(&self) -> bool {
        matches!(self, BackendError::Unreachable(_) | BackendError::Timeout)
    }
}

/// Client for one council member's backend
#[async_trait]
pub trait MemberClient: Send + Sync {
    /// The member this client speaks for
    fn member(&self) -> &CouncilMember;

    /// Ask the member to answer the query (stage 1)
    async fn get_answer(&self, query: &str) -> Result<Answer, BackendError>;

    /// Ask the member to review the given answers (stage 2)
    ///
    /// The member's own answer is anonymized away before any prompt is
    /// built; `answers` is the full stage-1 output in canonical order.
    async fn get_review(&self, query: &str, answers: &[Answer]) -> Result<Review, BackendError>;

    /// Probe the member's backend, classifying the outcome.
    ///
    /// Always yields a status - probe failures are data, not errors.
    async fn check_health(&self) -> HealthStatus;
}

/// Client for the chairman's synthesis backend
#[async_trait]
pub trait ChairmanClient: Send + Sync {
    /// Synthesize a final answer from all council output (stage 3)
    async fn synthesize(
        &self,
        query: &str,
        answers: &[Answer],
        reviews: &[Review],
    ) -> Result<Synthesis, BackendError>;

    /// Probe the chairman's backend, identical contract to members
    async fn check_health(&self) -> HealthStatus;
}
