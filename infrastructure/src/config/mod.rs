//! Configuration loading for llm-council.
//!
//! The raw TOML structure lives in [`file_config`]; [`loader`] merges the
//! file sources (explicit path over project file over global file over
//! built-in defaults) with figment.

mod file_config;
mod loader;

pub use file_config::{
    ConfigError, FileChairmanConfig, FileConfig, FileMemberConfig, FileTimeoutsConfig, Timeouts,
};
pub use loader::ConfigLoader;
