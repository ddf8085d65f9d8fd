//! HTTP adapter for the chairman's synthesis backend

use super::protocol::{GenerateOptions, GenerateRequest, GenerateResponse};
use super::transport_error;
use crate::config::Timeouts;
use async_trait::async_trait;
use council_application::{BackendError, ChairmanClient};
use council_domain::{Answer, HealthStatus, PromptTemplate, Review, Synthesis};
use tracing::debug;

/// Generation options for synthesis calls.
///
/// The context window must be wide enough to read every answer and review;
/// values carried over from the original chairman deployment.
const SYNTHESIS_OPTIONS: GenerateOptions = GenerateOptions {
    num_ctx: 2048,
    temperature: 0.7,
};

/// [`ChairmanClient`] over an Ollama-style generation backend
pub struct HttpChairmanClient {
    endpoint: String,
    model: String,
    http: reqwest::Client,
    timeouts: Timeouts,
}

impl HttpChairmanClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        http: reqwest::Client,
        timeouts: Timeouts,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            http,
            timeouts,
        }
    }
}

#[async_trait]
impl ChairmanClient for HttpChairmanClient {
    async fn synthesize(
        &self,
        query: &str,
        answers: &[Answer],
        reviews: &[Review],
    ) -> Result<Synthesis, BackendError> {
        let prompt = PromptTemplate::synthesis_prompt(query, answers, reviews);
        let url = format!("{}/api/generate", self.endpoint.trim_end_matches('/'));
        debug!("Sending synthesis prompt ({} chars)", prompt.len());

        let request = GenerateRequest {
            model: &self.model,
            prompt: &prompt,
            stream: false,
            options: Some(SYNTHESIS_OPTIONS),
        };

        let response = self
            .http
            .post(&url)
            .timeout(self.timeouts.synthesis)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        Ok(Synthesis::completed(&self.model, body.response))
    }

    async fn check_health(&self) -> HealthStatus {
        let url = format!("{}/api/tags", self.endpoint.trim_end_matches('/'));
        match self
            .http
            .get(&url)
            .timeout(self.timeouts.health)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => HealthStatus::healthy("chairman"),
            Ok(response) => HealthStatus::unhealthy(
                "chairman",
                format!("backend replied with status {}", response.status()),
            ),
            Err(e) => HealthStatus::unreachable("chairman", e.to_string()),
        }
    }
}
