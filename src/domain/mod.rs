//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors, events)
//! - `user` - Learner profile aggregate, roles, statistics, preferences

pub mod foundation;
pub mod user;
