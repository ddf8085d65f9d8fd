//! Ports - interfaces the application layer depends on.
//!
//! Implementations (adapters) live in the infrastructure and cli layers.

pub mod clients;
pub mod progress;
