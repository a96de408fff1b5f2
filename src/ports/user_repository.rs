//! UserRepository port for persisting learner profiles.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Repository for `User` aggregates.
///
/// Implementations must store the whole graph (roles, flags, last login,
/// statistics, preferences) without loss. Serializing concurrent writes to the
/// same user is the implementation's responsibility.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. Fails with `UserAlreadyExists` if the id is taken.
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Replace a stored user. Fails with `UserNotFound` if absent.
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Case-insensitive lookup by email, ignoring surrounding whitespace.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Remove a user. Fails with `UserNotFound` if absent.
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;

    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn UserRepository) {}
}
