//! Council member entity and registry

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One independent LLM-backed council member (Entity)
///
/// Identity is the stable `id`; `endpoint` and `model` describe the
/// backend that serves this member. Members are configured once at
/// process start and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouncilMember {
    /// Unique, stable identifier (e.g. "member1")
    pub id: String,
    /// Base URL of the member's generation backend
    pub endpoint: String,
    /// Model served by this member (e.g. "llama2:7b")
    pub model: String,
}

impl CouncilMember {
    pub fn new(
        id: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }
}

impl std::fmt::Display for CouncilMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.model)
    }
}

/// Immutable, ordered registry of council members
///
/// The configured order is the canonical order: every stage's output is
/// normalized to it, so repeated runs against the same backend state are
/// reproducible regardless of network jitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouncilRegistry {
    members: Vec<CouncilMember>,
}

impl CouncilRegistry {
    /// Build a registry, rejecting empty member lists and duplicate ids
    pub fn new(members: Vec<CouncilMember>) -> Result<Self, DomainError> {
        if members.is_empty() {
            return Err(DomainError::NoMembers);
        }
        let mut seen = HashSet::new();
        for member in &members {
            if member.id.trim().is_empty() {
                return Err(DomainError::InvalidMember(
                    "member id cannot be empty".to_string(),
                ));
            }
            if !seen.insert(member.id.as_str()) {
                return Err(DomainError::DuplicateMemberId(member.id.clone()));
            }
        }
        Ok(Self { members })
    }

    /// Members in configured order
    pub fn members(&self) -> &[CouncilMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up a member by id
    pub fn get(&self, id: &str) -> Option<&CouncilMember> {
        self.members.iter().find(|m| m.id == id)
    }
}
