//! Learner Profile - User accounts for the air traffic control trainer
//!
//! This crate models the trainee profile: role membership, challenge-mode
//! statistics and per-user preferences, plus the handlers that change them
//! and the events they publish.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
