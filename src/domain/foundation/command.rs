//! Command context shared by all application handlers.
//!
//! Handlers take a single `CommandMetadata` instead of separate
//! `acting_user`, `correlation_id`, `trace_id` parameters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Metadata context for command handlers.
///
/// `user_id` is the *acting* user (the administrator granting a role, the
/// trainee changing their settings). It is propagated to emitted events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    pub user_id: UserId,

    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,

    /// Origin of the command, e.g. "challenge_mode", "settings", "admin".
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: None,
            trace_id: None,
            source: None,
        }
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    ///
    /// A generated ID is not stored; call once per command.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    pub fn correlation_id_opt(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acting_user() -> UserId {
        UserId::new("admin-7").unwrap()
    }

    #[test]
    fn new_only_sets_user_id() {
        let metadata = CommandMetadata::new(acting_user());

        assert_eq!(metadata.user_id, acting_user());
        assert!(metadata.correlation_id_opt().is_none());
        assert!(metadata.trace_id().is_none());
        assert!(metadata.source().is_none());
    }

    #[test]
    fn builder_chain_sets_all_fields() {
        let metadata = CommandMetadata::new(acting_user())
            .with_correlation_id("corr-123")
            .with_trace_id("trace-456")
            .with_source("challenge_mode");

        assert_eq!(metadata.correlation_id(), "corr-123");
        assert_eq!(metadata.trace_id(), Some("trace-456"));
        assert_eq!(metadata.source(), Some("challenge_mode"));
    }

    #[test]
    fn correlation_id_generates_if_missing() {
        let metadata = CommandMetadata::new(acting_user());
        assert!(!metadata.correlation_id().is_empty());
    }

    #[test]
    fn serialization_skips_none_fields() {
        let json = serde_json::to_string(&CommandMetadata::new(acting_user())).unwrap();

        assert!(json.contains("user_id"));
        assert!(!json.contains("correlation_id"));
        assert!(!json.contains("source"));
    }
}
