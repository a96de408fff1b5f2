//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, error types, event plumbing and authorization
//! results used across the learner-profile domain.

mod authorization;
mod command;
mod errors;
mod events;
mod ids;
mod timestamp;

pub use authorization::{AuthorizationContext, AuthorizationResult};
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::UserId;
pub use timestamp::Timestamp;
