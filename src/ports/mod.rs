//! Ports - Interfaces for external dependencies.
//!
//! The user domain talks to persistence and event delivery only through
//! these traits. Adapters implement them.

mod event_publisher;
mod user_repository;

pub use event_publisher::EventPublisher;
pub use user_repository::UserRepository;
