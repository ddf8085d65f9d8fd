//! Run Council use case
//!
//! Orchestrates the full three-stage deliberation workflow:
//! collect answers, collect peer reviews, synthesize.
//!
//! Failure policy: individual member failures in stages 1 and 2 are
//! dropped silently (the council tolerates any subset of backends being
//! down), chairman failure is recorded inside the result, and the only
//! hard stop is stage 1 yielding zero answers.

use crate::fan_out::fan_out;
use crate::ports::clients::{ChairmanClient, MemberClient};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use council_domain::{Answer, CouncilResult, Question, Review, Stage, StageTimings, Synthesis};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that terminate a council run
///
/// Everything else degrades: the workflow returns its best available
/// aggregate rather than aborting.
#[derive(Error, Debug)]
pub enum RunCouncilError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("No answers received from council")]
    NoAnswers,
}

/// Use case for running a full council deliberation
pub struct RunCouncilUseCase {
    members: Vec<Arc<dyn MemberClient>>,
    chairman: Arc<dyn ChairmanClient>,
}

impl RunCouncilUseCase {
    /// `members` must be in configured (canonical) order; every stage's
    /// output is normalized to it.
    pub fn new(members: Vec<Arc<dyn MemberClient>>, chairman: Arc<dyn ChairmanClient>) -> Self {
        Self { members, chairman }
    }

    /// Execute the workflow with default (no-op) progress
    pub async fn execute(&self, query: &str) -> Result<CouncilResult, RunCouncilError> {
        self.execute_with_progress(query, &NoProgress).await
    }

    /// Execute the workflow with progress callbacks
    pub async fn execute_with_progress(
        &self,
        query: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<CouncilResult, RunCouncilError> {
        // Validation failure, not a stage failure - nothing has been sent yet
        let question = Question::try_new(query).ok_or(RunCouncilError::EmptyQuery)?;

        info!(
            members = self.members.len(),
            "Starting council run: {}",
            question
        );

        let mut timing = StageTimings::default();

        // Stage 1: every member answers
        let started = Instant::now();
        let answers = self.collect_answers(&question, progress).await;
        timing.answers_ms = started.elapsed().as_millis() as u64;

        if answers.is_empty() {
            warn!("Stage 1 yielded no answers; aborting run");
            return Err(RunCouncilError::NoAnswers);
        }
        info!("Stage 1 complete: {} answers received", answers.len());

        // Stage 2: every member reviews - runs only after stage 1 has fully
        // fanned in, so reviews see all available answers
        let started = Instant::now();
        let reviews = self.collect_reviews(&question, &answers, progress).await;
        timing.reviews_ms = started.elapsed().as_millis() as u64;
        info!("Stage 2 complete: {} reviews received", reviews.len());

        // Stage 3: one synthesis call; failure is recorded, not raised
        let started = Instant::now();
        let synthesis = self.synthesize(&question, &answers, &reviews, progress).await;
        timing.synthesis_ms = started.elapsed().as_millis() as u64;

        Ok(CouncilResult::new(
            question.into_content(),
            answers,
            reviews,
            synthesis,
            timing,
        ))
    }

    /// Stage 1: fan out `get_answer` to every member, dropping failures
    async fn collect_answers(
        &self,
        question: &Question,
        progress: &dyn ProgressNotifier,
    ) -> Vec<Answer> {
        progress.on_stage_start(Stage::Answers, self.members.len());

        let tasks: Vec<_> = self
            .members
            .iter()
            .map(|member| {
                let member = Arc::clone(member);
                let query = question.content().to_string();
                async move {
                    let result = member.get_answer(&query).await;
                    (member.member().id.clone(), result)
                }
            })
            .collect();

        let mut answers = Vec::new();
        for (member_id, result) in fan_out(tasks).await {
            match result {
                Ok(answer) => {
                    debug!("Received answer from {member_id}");
                    progress.on_task_complete(Stage::Answers, &member_id, true);
                    answers.push(answer);
                }
                Err(e) => {
                    warn!("Member {member_id} failed to answer: {e}");
                    progress.on_task_complete(Stage::Answers, &member_id, false);
                }
            }
        }

        progress.on_stage_complete(Stage::Answers);
        answers
    }

    /// Stage 2: fan out `get_review` to every member, dropping failures
    async fn collect_reviews(
        &self,
        question: &Question,
        answers: &[Answer],
        progress: &dyn ProgressNotifier,
    ) -> Vec<Review> {
        progress.on_stage_start(Stage::Reviews, self.members.len());

        let tasks: Vec<_> = self
            .members
            .iter()
            .map(|member| {
                let member = Arc::clone(member);
                let query = question.content().to_string();
                let answers = answers.to_vec();
                async move {
                    let result = member.get_review(&query, &answers).await;
                    (member.member().id.clone(), result)
                }
            })
            .collect();

        let mut reviews = Vec::new();
        for (member_id, result) in fan_out(tasks).await {
            match result {
                Ok(review) => {
                    debug!("Received review from {member_id}");
                    progress.on_task_complete(Stage::Reviews, &member_id, true);
                    reviews.push(review);
                }
                Err(e) => {
                    warn!("Member {member_id} failed to review: {e}");
                    progress.on_task_complete(Stage::Reviews, &member_id, false);
                }
            }
        }

        progress.on_stage_complete(Stage::Reviews);
        reviews
    }

    /// Stage 3: single chairman call; failure becomes data in the result
    async fn synthesize(
        &self,
        question: &Question,
        answers: &[Answer],
        reviews: &[Review],
        progress: &dyn ProgressNotifier,
    ) -> Synthesis {
        progress.on_stage_start(Stage::Synthesis, 1);

        let synthesis = match self
            .chairman
            .synthesize(question.content(), answers, reviews)
            .await
        {
            Ok(synthesis) => {
                info!("Synthesis complete");
                progress.on_task_complete(Stage::Synthesis, "chairman", true);
                synthesis
            }
            Err(e) => {
                warn!("Chairman synthesis failed: {e}");
                progress.on_task_complete(Stage::Synthesis, "chairman", false);
                Synthesis::failed(e.to_string())
            }
        };

        progress.on_stage_complete(Stage::Synthesis);
        synthesis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clients::BackendError;
    use async_trait::async_trait;
    use council_domain::{CouncilMember, HealthStatus};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct MockMember {
        member: CouncilMember,
        fail_answer: bool,
        fail_review: bool,
        answer_delay: Option<Duration>,
        answer_calls: AtomicUsize,
        review_calls: AtomicUsize,
        seen_answers: Mutex<Option<Vec<Answer>>>,
    }

    impl MockMember {
        fn new(id: &str) -> Arc<Self> {
            Arc::new(Self {
                member: CouncilMember::new(id, format!("http://{id}:11434"), "llama2:7b"),
                fail_answer: false,
                fail_review: false,
                answer_delay: None,
                answer_calls: AtomicUsize::new(0),
                review_calls: AtomicUsize::new(0),
                seen_answers: Mutex::new(None),
            })
        }

        fn failing_answer(id: &str) -> Arc<Self> {
            let mut mock = Self::new(id);
            Arc::get_mut(&mut mock).unwrap().fail_answer = true;
            mock
        }

        fn failing_review(id: &str) -> Arc<Self> {
            let mut mock = Self::new(id);
            Arc::get_mut(&mut mock).unwrap().fail_review = true;
            mock
        }

        fn slow(id: &str, delay: Duration) -> Arc<Self> {
            let mut mock = Self::new(id);
            Arc::get_mut(&mut mock).unwrap().answer_delay = Some(delay);
            mock
        }
    }

    #[async_trait]
    impl MemberClient for MockMember {
        fn member(&self) -> &CouncilMember {
            &self.member
        }

        async fn get_answer(&self, query: &str) -> Result<Answer, BackendError> {
            self.answer_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.answer_delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail_answer {
                return Err(BackendError::Unreachable("connection refused".to_string()));
            }
            Ok(Answer::new(
                &self.member.id,
                &self.member.model,
                format!("{} answering: {query}", self.member.id),
            ))
        }

        async fn get_review(&self, _query: &str, answers: &[Answer]) -> Result<Review, BackendError> {
            self.review_calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_answers.lock().unwrap() = Some(answers.to_vec());
            if self.fail_review {
                return Err(BackendError::Status {
                    status: 500,
                    detail: "Ollama API error".to_string(),
                });
            }
            Ok(Review::new(
                &self.member.id,
                vec!["Answer_1".to_string()],
                "Most accurate.",
                "RANKING: Answer_1\nREASONING: Most accurate.",
            ))
        }

        async fn check_health(&self) -> HealthStatus {
            HealthStatus::healthy(&self.member.id)
        }
    }

    struct MockChairman {
        fail: bool,
        synthesize_calls: AtomicUsize,
    }

    impl MockChairman {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                fail: false,
                synthesize_calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                fail: true,
                synthesize_calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ChairmanClient for MockChairman {
        async fn synthesize(
            &self,
            _query: &str,
            answers: &[Answer],
            _reviews: &[Review],
        ) -> Result<Synthesis, BackendError> {
            self.synthesize_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(BackendError::Status {
                    status: 500,
                    detail: "Chairman synthesis failed".to_string(),
                });
            }
            Ok(Synthesis::completed(
                "phi",
                format!("Synthesized from {} answers", answers.len()),
            ))
        }

        async fn check_health(&self) -> HealthStatus {
            HealthStatus::healthy("chairman")
        }
    }

    fn use_case(
        members: Vec<Arc<MockMember>>,
        chairman: Arc<MockChairman>,
    ) -> RunCouncilUseCase {
        let clients: Vec<Arc<dyn MemberClient>> = members
            .into_iter()
            .map(|m| m as Arc<dyn MemberClient>)
            .collect();
        RunCouncilUseCase::new(clients, chairman)
    }

    #[tokio::test]
    async fn test_full_run_collects_all_stages() {
        let members = vec![MockMember::new("member1"), MockMember::new("member2")];
        let result = use_case(members, MockChairman::new())
            .execute("What is Rust?")
            .await
            .unwrap();

        assert_eq!(result.answers.len(), 2);
        assert_eq!(result.reviews.len(), 2);
        assert!(result.synthesis.is_completed());
        assert_eq!(result.query, "What is Rust?");
    }

    #[tokio::test]
    async fn test_partial_answers_kept_in_member_order() {
        let members = vec![
            MockMember::new("member1"),
            MockMember::failing_answer("member2"),
            MockMember::new("member3"),
        ];
        let result = use_case(members, MockChairman::new())
            .execute("Q?")
            .await
            .unwrap();

        let ids: Vec<_> = result.answers.iter().map(|a| a.member_id.as_str()).collect();
        assert_eq!(ids, vec!["member1", "member3"]);
    }

    #[tokio::test]
    async fn test_no_answers_aborts_before_later_stages() {
        let members = vec![
            MockMember::failing_answer("member1"),
            MockMember::failing_answer("member2"),
        ];
        let chairman = MockChairman::new();
        let result = use_case(members.clone(), Arc::clone(&chairman))
            .execute("Q?")
            .await;

        assert!(matches!(result, Err(RunCouncilError::NoAnswers)));
        for member in &members {
            assert_eq!(member.answer_calls.load(Ordering::SeqCst), 1);
            assert_eq!(member.review_calls.load(Ordering::SeqCst), 0);
        }
        assert_eq!(chairman.synthesize_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_query_rejected_without_any_call() {
        let members = vec![MockMember::new("member1")];
        let chairman = MockChairman::new();
        let result = use_case(members.clone(), Arc::clone(&chairman))
            .execute("   ")
            .await;

        assert!(matches!(result, Err(RunCouncilError::EmptyQuery)));
        assert_eq!(members[0].answer_calls.load(Ordering::SeqCst), 0);
        assert_eq!(chairman.synthesize_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_review_failures_tolerated() {
        let members = vec![
            MockMember::new("member1"),
            MockMember::failing_review("member2"),
        ];
        let result = use_case(members, MockChairman::new())
            .execute("Q?")
            .await
            .unwrap();

        assert_eq!(result.answers.len(), 2);
        assert_eq!(result.reviews.len(), 1);
        assert_eq!(result.reviews[0].member_id, "member1");
        assert!(result.synthesis.is_completed());
    }

    #[tokio::test]
    async fn test_chairman_failure_still_returns_aggregate() {
        let members = vec![MockMember::new("member1"), MockMember::new("member2")];
        let result = use_case(members, MockChairman::failing())
            .execute("Q?")
            .await
            .unwrap();

        assert_eq!(result.answers.len(), 2);
        assert_eq!(result.reviews.len(), 2);
        match &result.synthesis {
            Synthesis::Failed { error } => {
                assert!(error.contains("Chairman synthesis failed"));
            }
            other => panic!("expected failed synthesis, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reviews_see_full_stage_one_output() {
        let members = vec![MockMember::new("member1"), MockMember::new("member2")];
        let reviewer = Arc::clone(&members[1]);
        use_case(members, MockChairman::new())
            .execute("Q?")
            .await
            .unwrap();

        let seen = reviewer.seen_answers.lock().unwrap().clone().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].member_id, "member1");
        assert_eq!(seen[1].member_id, "member2");
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_member_does_not_block_siblings() {
        // The paused clock only advances once every spawned task is idle,
        // so this completes quickly iff the fan-out is truly parallel.
        let members = vec![
            MockMember::slow("member1", Duration::from_secs(120)),
            MockMember::new("member2"),
        ];
        let result = use_case(members, MockChairman::new())
            .execute("Q?")
            .await
            .unwrap();

        assert_eq!(result.answers.len(), 2);
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let make = || {
            use_case(
                vec![MockMember::new("member1"), MockMember::new("member2")],
                MockChairman::new(),
            )
        };
        let first = make().execute("Q?").await.unwrap();
        let second = make().execute("Q?").await.unwrap();

        assert_eq!(first.answers, second.answers);
        assert_eq!(first.reviews, second.reviews);
        assert_eq!(first.synthesis, second.synthesis);
    }
}
