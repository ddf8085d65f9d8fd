//! Infrastructure layer for llm-council
//!
//! Adapters for the outside world: reqwest-based clients for the
//! Ollama-style generation backends, and TOML configuration loading.

pub mod config;
pub mod ollama;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileChairmanConfig, FileConfig, FileMemberConfig,
    FileTimeoutsConfig, Timeouts,
};
pub use ollama::{HttpChairmanClient, HttpMemberClient};
