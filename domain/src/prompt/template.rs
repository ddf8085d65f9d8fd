//! Prompt templates for the council flow
//!
//! The literal wording is part of the system contract: the review template
//! instructs models to emit the `RANKING:` / `REASONING:` lines that
//! [`crate::council::parsing`] extracts.

use crate::council::anonymize::AnonymousAnswer;
use crate::council::value_objects::{Answer, Review};

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for stage 1 - a member answers the question
    pub fn answer_prompt(query: &str) -> String {
        format!("Answer the following question concisely and accurately:\n\n{query}")
    }

    /// Prompt for stage 2 - a member ranks its peers' anonymized answers
    pub fn review_prompt(query: &str, answers: &[AnonymousAnswer]) -> String {
        let answers_text = answers
            .iter()
            .map(|a| format!("{}:\n{}", a.label, a.text))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"Original Question: {query}

Below are multiple answers to this question. Evaluate each answer based on accuracy, insight, and completeness.

{answers_text}

Rank these answers from best to worst. Provide your ranking as a comma-separated list of IDs (e.g., "Answer_2, Answer_1, Answer_3").
Then briefly explain your reasoning for the top-ranked answer.

Format your response as:
RANKING: [your ranking]
REASONING: [your explanation]"#
        )
    }

    /// Prompt for stage 3 - the chairman synthesizes answers and reviews
    pub fn synthesis_prompt(query: &str, answers: &[Answer], reviews: &[Review]) -> String {
        let answers_text = answers
            .iter()
            .map(|a| {
                format!(
                    "Response from {} (Model: {}):\n{}",
                    a.member_id, a.model, a.answer
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        let reviews_text = reviews
            .iter()
            .map(|r| {
                format!(
                    "Review by {}:\nRanking: {}\nReasoning: {}",
                    r.member_id,
                    r.ranking.join(", "),
                    r.reasoning
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"You are the Chairman of an LLM Council.
ORIGINAL QUESTION: {query}

COUNCIL RESPONSES:
{answers_text}

PEER REVIEWS:
{reviews_text}

Based on these responses and reviews, provide a final, synthesized answer that represents the best collective wisdom.
Your final answer:"#
        )
    }
}
