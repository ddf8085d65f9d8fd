//! Review response parsing.
//!
//! Extracts a ranking and a reasoning string from free-form LLM review
//! output. This is pure domain logic — no I/O, no session management,
//! just a small, stable micro-grammar:
//!
//! - a line containing `RANKING:` (case-insensitive) — everything after
//!   the first colon, split on commas, trimmed, becomes the ranking;
//!   empty entries from the split are kept
//! - a line containing `REASONING:` (case-insensitive) — everything after
//!   the first colon becomes the reasoning
//!
//! Tolerant by design: a missing marker yields an empty ranking or empty
//! reasoning, never an error. When a marker appears on several lines the
//! last one wins.

/// Structured fields extracted from a raw review response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReview {
    /// Anonymous answer labels, best first
    pub ranking: Vec<String>,
    /// The model's justification for its top pick
    pub reasoning: String,
}

/// Parse a raw review response into ranking and reasoning.
pub fn parse_review_text(response: &str) -> ParsedReview {
    let mut parsed = ParsedReview::default();

    for line in response.lines() {
        let upper = line.to_uppercase();
        if upper.contains("RANKING:") {
            if let Some(rest) = after_first_colon(line) {
                parsed.ranking = rest
                    .split(',')
                    .map(|entry| entry.trim().to_string())
                    .collect();
            }
        } else if upper.contains("REASONING:") {
            if let Some(rest) = after_first_colon(line) {
                parsed.reasoning = rest.trim().to_string();
            }
        }
    }

    parsed
}

fn after_first_colon(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, rest)| rest)
}
