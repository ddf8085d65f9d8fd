//! Use cases - the orchestrated workflows of llm-council.

pub mod check_health;
pub mod run_council;
