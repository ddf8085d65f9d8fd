//! Application layer for llm-council
//!
//! Use cases orchestrate the council workflow through ports; the ports are
//! implemented by adapters in the infrastructure layer. This crate never
//! talks to a network itself.

pub mod fan_out;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use fan_out::fan_out;
pub use ports::{
    clients::{BackendError, ChairmanClient, MemberClient},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::{
    check_health::CheckHealthUseCase,
    run_council::{RunCouncilError, RunCouncilUseCase},
};
