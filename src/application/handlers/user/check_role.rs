//! CheckRoleHandler - Query evaluating role predicates for a user.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{Role, UserError};
use crate::ports::UserRepository;

/// Which predicate to evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRequirement {
    Role(Role),
    /// Satisfied by any listed role; an empty list is never satisfied.
    AnyOf(Vec<Role>),
    Admin,
    Moderator,
}

#[derive(Debug, Clone)]
pub struct CheckRoleQuery {
    pub user_id: UserId,
    pub requirement: RoleRequirement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRoleResult {
    /// Role membership alone, regardless of activity.
    pub satisfied: bool,
    pub is_active: bool,
}

impl CheckRoleResult {
    /// Membership and an active account.
    pub fn allows(&self) -> bool {
        self.satisfied && self.is_active
    }
}

pub struct CheckRoleHandler {
    repository: Arc<dyn UserRepository>,
}

impl CheckRoleHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: CheckRoleQuery) -> Result<CheckRoleResult, UserError> {
        let user = self
            .repository
            .find_by_id(&query.user_id)
            .await?
            .ok_or_else(|| UserError::not_found(query.user_id.clone()))?;

        let satisfied = match &query.requirement {
            RoleRequirement::Role(role) => user.has_role(*role),
            RoleRequirement::AnyOf(roles) => user.has_any_role(roles),
            RoleRequirement::Admin => user.is_admin(),
            RoleRequirement::Moderator => user.is_moderator(),
        };

        Ok(CheckRoleResult {
            satisfied,
            is_active: user.is_active(),
        })
    }
}
