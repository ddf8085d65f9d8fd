//! Council subdomain — members, stage outputs, anonymization, and the
//! review micro-grammar.
//!
//! Everything here is pure: the orchestration and transport concerns live
//! in the application and infrastructure layers.

pub mod anonymize;
pub mod health;
pub mod member;
pub mod parsing;
pub mod stage;
pub mod value_objects;
