//! HTTP adapter for one council member's backend

use super::protocol::{GenerateRequest, GenerateResponse};
use super::transport_error;
use crate::config::Timeouts;
use async_trait::async_trait;
use council_application::{BackendError, MemberClient};
use council_domain::{
    Answer, CouncilMember, HealthStatus, PromptTemplate, Review, anonymize_answers,
    parse_review_text,
};
use std::time::Duration;
use tracing::debug;

/// [`MemberClient`] over an Ollama-style generation backend
pub struct HttpMemberClient {
    member: CouncilMember,
    http: reqwest::Client,
    timeouts: Timeouts,
}

impl HttpMemberClient {
    /// The client does not set a global timeout on `http`; every request
    /// carries its own bound from `timeouts`.
    pub fn new(member: CouncilMember, http: reqwest::Client, timeouts: Timeouts) -> Self {
        Self {
            member,
            http,
            timeouts,
        }
    }

    async fn generate(&self, prompt: &str, timeout: Duration) -> Result<String, BackendError> {
        let url = format!(
            "{}/api/generate",
            self.member.endpoint.trim_end_matches('/')
        );
        debug!(member = %self.member.id, "Sending prompt ({} chars)", prompt.len());

        let request = GenerateRequest {
            model: &self.member.model,
            prompt,
            stream: false,
            options: None,
        };

        let response = self
            .http
            .post(&url)
            .timeout(timeout)
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
        Ok(body.response)
    }
}

#[async_trait]
impl MemberClient for HttpMemberClient {
    fn member(&self) -> &CouncilMember {
        &self.member
    }

    async fn get_answer(&self, query: &str) -> Result<Answer, BackendError> {
        let prompt = PromptTemplate::answer_prompt(query);
        let text = self.generate(&prompt, self.timeouts.answer).await?;
        Ok(Answer::new(&self.member.id, &self.member.model, text))
    }

    async fn get_review(&self, query: &str, answers: &[Answer]) -> Result<Review, BackendError> {
        // Labels come from positions in the full stage-1 list; the member's
        // own answer is dropped before the prompt is built
        let anonymous = anonymize_answers(answers, &self.member.id);
        let prompt = PromptTemplate::review_prompt(query, &anonymous);
        let text = self.generate(&prompt, self.timeouts.review).await?;

        let parsed = parse_review_text(&text);
        Ok(Review::new(
            &self.member.id,
            parsed.ranking,
            parsed.reasoning,
            text,
        ))
    }

    async fn check_health(&self) -> HealthStatus {
        let url = format!("{}/api/tags", self.member.endpoint.trim_end_matches('/'));
        match self
            .http
            .get(&url)
            .timeout(self.timeouts.health)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                HealthStatus::healthy(&self.member.id)
            }
            Ok(response) => HealthStatus::unhealthy(
                &self.member.id,
                format!("backend replied with status {}", response.status()),
            ),
            Err(e) => HealthStatus::unreachable(&self.member.id, e.to_string()),
        }
    }
}
