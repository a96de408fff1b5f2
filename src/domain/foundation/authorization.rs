//! Authorization result types.
//!
//! Role-based checks against a `User` live in `domain::user::authorization`;
//! this module only carries the "who, what, outcome" of a decision so that
//! every check is logged and converted to an error the same way.

use super::{DomainError, ErrorCode, UserId};

/// Outcome of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationResult {
    pub granted: bool,

    /// What was being accessed (e.g. "RoleAssignment", "ScenarioLeaderboard").
    pub resource_type: &'static str,

    pub resource_id: String,

    pub user_id: String,

    pub denial_reason: Option<String>,
}

impl AuthorizationResult {
    pub fn granted(
        resource_type: &'static str,
        resource_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            granted: true,
            resource_type,
            resource_id: resource_id.into(),
            user_id: user_id.into(),
            denial_reason: None,
        }
    }

    pub fn denied(
        resource_type: &'static str,
        resource_id: impl Into<String>,
        user_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            granted: false,
            resource_type,
            resource_id: resource_id.into(),
            user_id: user_id.into(),
            denial_reason: Some(reason.into()),
        }
    }

    /// Converts to `Ok(())` if granted, `Err(Forbidden)` otherwise.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.granted {
            return Ok(());
        }
        Err(DomainError::new(
            ErrorCode::Forbidden,
            self.denial_reason
                .unwrap_or_else(|| "Access denied".to_string()),
        )
        .with_detail("resource_type", self.resource_type)
        .with_detail("resource_id", self.resource_id)
        .with_detail("user_id", self.user_id))
    }

    pub fn is_granted(&self) -> bool {
        self.granted
    }

    pub fn is_denied(&self) -> bool {
        !self.granted
    }
}

/// Context for an authorization decision.
#[derive(Debug, Clone)]
pub struct AuthorizationContext {
    /// The user requesting access.
    pub user_id: UserId,

    /// The action being performed (e.g. "grant_role", "view_statistics").
    pub action: String,

    pub resource_type: &'static str,

    pub resource_id: String,

    pub correlation_id: Option<String>,
}

impl AuthorizationContext {
    pub fn new(
        user_id: UserId,
        action: impl Into<String>,
        resource_type: &'static str,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            action: action.into(),
            resource_type,
            resource_id: resource_id.into(),
            correlation_id: None,
        }
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    pub fn grant(&self) -> AuthorizationResult {
        AuthorizationResult::granted(
            self.resource_type,
            &self.resource_id,
            self.user_id.to_string(),
        )
    }

    pub fn deny(&self, reason: impl Into<String>) -> AuthorizationResult {
        AuthorizationResult::denied(
            self.resource_type,
            &self.resource_id,
            self.user_id.to_string(),
            reason,
        )
    }
}
