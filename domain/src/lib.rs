//! Domain layer for llm-council
//!
//! This crate contains the core business logic, entities, and value objects
//! of the council workflow. It has no dependencies on infrastructure or
//! presentation concerns — no I/O, no HTTP, no clocks.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A council is a fixed set of independent LLM-backed members plus one
//! chairman. A query runs through three stages:
//!
//! - **Answers**: every member answers the question independently
//! - **Reviews**: every member ranks the anonymized answers of its peers
//! - **Synthesis**: the chairman combines answers and reviews into one
//!   final response

pub mod core;
pub mod council;
pub mod prompt;

// Re-export commonly used types
pub use core::{error::DomainError, question::Question};
pub use council::{
    anonymize::{AnonymousAnswer, anonymize_answers, resolve_label},
    health::{HealthReport, HealthState, HealthStatus},
    member::{CouncilMember, CouncilRegistry},
    parsing::{ParsedReview, parse_review_text},
    stage::Stage,
    value_objects::{Answer, CouncilResult, Review, StageTimings, Synthesis},
};
pub use prompt::PromptTemplate;
