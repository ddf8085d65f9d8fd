//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("No council members configured")]
    NoMembers,

    #[error("Duplicate council member id: {0}")]
    DuplicateMemberId(String),

    #[error("Invalid council member: {0}")]
    InvalidMember(String),
}
