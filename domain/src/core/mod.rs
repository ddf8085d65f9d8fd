//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — validated query value object
//! - [`error::DomainError`] — domain-level error taxonomy

pub mod error;
pub mod question;
