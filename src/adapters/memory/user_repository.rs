//! In-memory `UserRepository`.
//!
//! Users are stored by value behind a single `RwLock`, so each `update`
//! replaces the whole aggregate atomically.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store, replacing users with the same id.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|u| (u.id().clone(), u))
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn not_found(id: &UserId) -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, "User not found").with_detail("user_id", id.as_str())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.id()) {
            return Err(
                DomainError::new(ErrorCode::UserAlreadyExists, "User already exists")
                    .with_detail("user_id", user.id().as_str()),
            );
        }
        users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(not_found(user.id())),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = email.trim();
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email().trim().eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        match self.users.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }

    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        Ok(self.users.read().await.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Role;

    fn user(id: &str, email: &str) -> User {
        User::new(UserId::new(id).unwrap(), email)
    }

    #[tokio::test]
    async fn save_then_find_returns_copy() {
        let repo = InMemoryUserRepository::new();
        let alice = user("alice", "alice@example.com");

        repo.save(&alice).await.unwrap();

        let found = repo.find_by_id(alice.id()).await.unwrap();
        assert_eq!(found, Some(alice));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn save_rejects_duplicate_id() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("alice", "alice@example.com")).await.unwrap();

        let err = repo
            .save(&user("alice", "other@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::UserAlreadyExists);
    }

    #[tokio::test]
    async fn update_replaces_stored_user() {
        let mut alice = user("alice", "alice@example.com");
        let repo = InMemoryUserRepository::with_users([alice.clone()]);

        alice.grant_role(Role::Premium);
        alice.statistics_mut().scenarios_completed = 4;
        repo.update(&alice).await.unwrap();

        let stored = repo.find_by_id(alice.id()).await.unwrap().unwrap();
        assert!(stored.has_role(Role::Premium));
        assert_eq!(stored.statistics().scenarios_completed, 4);
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let repo = InMemoryUserRepository::new();

        let err = repo.update(&user("ghost", "g@example.com")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::UserNotFound);
    }

    #[tokio::test]
    async fn find_by_email_ignores_case() {
        let repo = InMemoryUserRepository::with_users([user("bob", "Bob@Example.com")]);

        let found = repo.find_by_email("bob@example.com").await.unwrap();

        assert_eq!(found.map(|u| u.id().to_string()), Some("bob".to_string()));
    }

    #[tokio::test]
    async fn find_by_email_ignores_surrounding_whitespace() {
        let repo = InMemoryUserRepository::with_users([user("bob", "bob@example.com ")]);

        let found = repo.find_by_email(" bob@example.com").await.unwrap();

        assert!(found.is_some());
    }

    #[tokio::test]
    async fn delete_removes_user() {
        let bob = user("bob", "bob@example.com");
        let repo = InMemoryUserRepository::with_users([bob.clone()]);

        repo.delete(bob.id()).await.unwrap();

        assert!(!repo.exists(bob.id()).await.unwrap());
        assert!(repo.is_empty().await);
        assert_eq!(
            repo.delete(bob.id()).await.unwrap_err().code,
            ErrorCode::UserNotFound
        );
    }
}
