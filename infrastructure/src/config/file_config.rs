//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Example:
//!
//! ```toml
//! [[members]]
//! id = "member1"
//! endpoint = "http://10.15.57.177:11434"
//! model = "llama2:7b"
//!
//! [[members]]
//! id = "member2"
//! endpoint = "http://10.15.57.142:11434"
//! model = "mistral:7b"
//!
//! [chairman]
//! endpoint = "http://10.15.57.84:11434"
//! model = "phi"
//!
//! [timeouts]
//! answer_secs = 120
//! synthesis_secs = 300
//! ```

use council_domain::{CouncilMember, CouncilRegistry, DomainError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// One `[[members]]` entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMemberConfig {
    pub id: String,
    pub endpoint: String,
    pub model: String,
}

/// The `[chairman]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChairmanConfig {
    pub endpoint: String,
    pub model: String,
}

impl Default for FileChairmanConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".to_string(),
            model: "phi".to_string(),
        }
    }
}

/// The `[timeouts]` section, in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTimeoutsConfig {
    /// Per-member answer call (stage 1)
    pub answer_secs: u64,
    /// Per-member review call (stage 2)
    pub review_secs: u64,
    /// Single chairman call (stage 3) - must exceed the per-member bounds
    pub synthesis_secs: u64,
    /// Liveness probes
    pub health_secs: u64,
}

impl Default for FileTimeoutsConfig {
    fn default() -> Self {
        Self {
            answer_secs: 120,
            review_secs: 120,
            synthesis_secs: 300,
            health_secs: 5,
        }
    }
}

/// Resolved per-call timeouts handed to the HTTP clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub answer: Duration,
    pub review: Duration,
    pub synthesis: Duration,
    pub health: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        FileTimeoutsConfig::default().to_timeouts()
    }
}

impl FileTimeoutsConfig {
    pub fn to_timeouts(self) -> Timeouts {
        Timeouts {
            answer: Duration::from_secs(self.answer_secs),
            review: Duration::from_secs(self.review_secs),
            synthesis: Duration::from_secs(self.synthesis_secs),
            health: Duration::from_secs(self.health_secs),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Ordered council members - the configured order is canonical
    pub members: Vec<FileMemberConfig>,
    /// Chairman backend
    pub chairman: FileChairmanConfig,
    /// Per-call timeouts
    pub timeouts: FileTimeoutsConfig,
}

impl FileConfig {
    /// Validate and convert the member list into the immutable registry.
    ///
    /// The registry enforces non-empty membership and unique ids; this
    /// additionally rejects blank endpoints and models.
    pub fn registry(&self) -> Result<CouncilRegistry, ConfigError> {
        for member in &self.members {
            if member.endpoint.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "member {} has an empty endpoint",
                    member.id
                )));
            }
            if member.model.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "member {} has an empty model",
                    member.id
                )));
            }
        }

        let members = self
            .members
            .iter()
            .map(|m| CouncilMember::new(&m.id, &m.endpoint, &m.model))
            .collect();
        Ok(CouncilRegistry::new(members)?)
    }

    /// Validate the chairman section
    pub fn validate_chairman(&self) -> Result<(), ConfigError> {
        if self.chairman.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "chairman endpoint cannot be empty".to_string(),
            ));
        }
        if self.chairman.model.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "chairman model cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
