//! Council value objects - immutable result types for a council run.
//!
//! These types represent the outputs of each stage:
//! - [`Answer`] - Individual member's answer from stage 1
//! - [`Review`] - One member's ranking of its peers' answers from stage 2
//! - [`Synthesis`] - Final chairman output (or its recorded failure)
//! - [`CouncilResult`] - Complete aggregate returned to the caller
//!
//! Field names follow the original wire shapes (`member_id`, `answer`,
//! `ranking`, `reasoning`, `full_review`, `final_answer`) so serialized
//! results stay compatible with existing consumers.

use serde::{Deserialize, Serialize};

/// Answer from a single member in stage 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The member that produced this answer
    pub member_id: String,
    /// The model backing that member
    pub model: String,
    /// The answer text
    pub answer: String,
}

impl Answer {
    pub fn new(
        member_id: impl Into<String>,
        model: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            member_id: member_id.into(),
            model: model.into(),
            answer: answer.into(),
        }
    }
}

/// One member's review of its peers' anonymized answers
///
/// `ranking` holds anonymous labels ("Answer_1", "Answer_3", ...) exactly
/// as the model emitted them — resolving a label back to a member id is a
/// separate, explicit step (see [`crate::council::anonymize::resolve_label`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// The member that performed the review
    pub member_id: String,
    /// Anonymous answer labels, best first; empty when no RANKING line was found
    #[serde(default)]
    pub ranking: Vec<String>,
    /// Free-text justification; empty when no REASONING line was found
    #[serde(default)]
    pub reasoning: String,
    /// The raw model output the ranking was parsed from
    #[serde(default)]
    pub full_review: String,
}

impl Review {
    pub fn new(
        member_id: impl Into<String>,
        ranking: Vec<String>,
        reasoning: impl Into<String>,
        full_review: impl Into<String>,
    ) -> Self {
        Self {
            member_id: member_id.into(),
            ranking,
            reasoning: reasoning.into(),
            full_review: full_review.into(),
        }
    }
}

/// Final synthesis from the chairman, or its recorded failure
///
/// Chairman failure is data, not control flow: the orchestrator embeds it
/// here and still returns the rest of the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Synthesis {
    /// The chairman produced a final answer
    Completed {
        /// Model the chairman used
        model: String,
        /// The synthesized final answer
        final_answer: String,
    },
    /// The synthesis call failed; answers and reviews are still available
    Failed {
        /// Raw error detail from the failed call
        error: String,
    },
}

impl Synthesis {
    pub fn completed(model: impl Into<String>, final_answer: impl Into<String>) -> Self {
        Synthesis::Completed {
            model: model.into(),
            final_answer: final_answer.into(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Synthesis::Failed {
            error: error.into(),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Synthesis::Completed { .. })
    }
}

/// Per-stage elapsed times for one council run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTimings {
    /// Stage 1 wall time in milliseconds
    pub answers_ms: u64,
    /// Stage 2 wall time in milliseconds
    pub reviews_ms: u64,
    /// Stage 3 wall time in milliseconds
    pub synthesis_ms: u64,
}

impl StageTimings {
    pub fn total_ms(&self) -> u64 {
        self.answers_ms + self.reviews_ms + self.synthesis_ms
    }
}

/// Complete result of a council run
///
/// Answers and reviews are normalized to configured member order; both may
/// hold fewer entries than there are members (partial results tolerated),
/// but never a duplicate `member_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouncilResult {
    /// The original question
    pub query: String,
    /// Stage 1: answers from each responding member
    pub answers: Vec<Answer>,
    /// Stage 2: peer reviews from each responding member
    pub reviews: Vec<Review>,
    /// Stage 3: final synthesis or its recorded failure
    pub synthesis: Synthesis,
    /// Per-stage elapsed time
    pub timing: StageTimings,
}

impl CouncilResult {
    pub fn new(
        query: impl Into<String>,
        answers: Vec<Answer>,
        reviews: Vec<Review>,
        synthesis: Synthesis,
        timing: StageTimings,
    ) -> Self {
        Self {
            query: query.into(),
            answers,
            reviews,
            synthesis,
            timing,
        }
    }
}
