//! GetUserSummaryHandler - Query returning a read model of a user.
//!
//! Statistics are shown to other users only when the owner has
//! `public_statistics` enabled. Email and preferences are visible to the
//! owner only.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::user::{RoleSet, User, UserError, UserPreferences, UserStatistics};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct GetUserSummaryQuery {
    pub user_id: UserId,
    pub requested_by: UserId,
}

/// Statistics with the derived figures precomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSummary {
    pub scenarios_completed: u32,
    pub highest_score: u32,
    pub perfect_scenarios: u32,
    pub average_score: f64,
    pub success_rate: f64,
}

impl From<&UserStatistics> for StatisticsSummary {
    fn from(stats: &UserStatistics) -> Self {
        Self {
            scenarios_completed: stats.scenarios_completed,
            highest_score: stats.highest_score,
            perfect_scenarios: stats.perfect_scenarios,
            average_score: stats.average_score(),
            success_rate: stats.success_rate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub user_id: UserId,
    pub email: Option<String>,
    pub roles: RoleSet,
    pub is_active: bool,
    pub email_verified: bool,
    pub created_at: Timestamp,
    pub last_login_at: Option<Timestamp>,
    pub statistics: Option<StatisticsSummary>,
    pub preferences: Option<UserPreferences>,
}

impl UserSummary {
    fn build(user: &User, requested_by: &UserId) -> Self {
        let is_self = user.id() == requested_by;
        let statistics = (is_self || user.preferences().public_statistics)
            .then(|| StatisticsSummary::from(user.statistics()));
        let email = is_self.then(|| user.email().to_string());
        let preferences = is_self.then(|| user.preferences().clone());

        Self {
            user_id: user.id().clone(),
            email,
            roles: user.roles().clone(),
            is_active: user.is_active(),
            email_verified: user.email_verified(),
            created_at: user.created_at(),
            last_login_at: user.last_login_at(),
            statistics,
            preferences,
        }
    }
}

pub struct GetUserSummaryHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserSummaryHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetUserSummaryQuery) -> Result<UserSummary, UserError> {
        let user = self
            .repository
            .find_by_id(&query.user_id)
            .await?
            .ok_or_else(|| UserError::not_found(query.user_id.clone()))?;

        Ok(UserSummary::build(&user, &query.requested_by))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryUserRepository;

    fn owner_id() -> UserId {
        UserId::new("trainee-1").unwrap()
    }

    fn other_id() -> UserId {
        UserId::new("trainee-2").unwrap()
    }

    fn handler_with(user: User) -> GetUserSummaryHandler {
        GetUserSummaryHandler::new(Arc::new(InMemoryUserRepository::with_users([user])))
    }

    fn trained_user() -> User {
        let mut user = User::new(owner_id(), "t1@example.com");
        *user.statistics_mut() = UserStatistics::new(4, 1000, 1);
        user
    }

    #[tokio::test]
    async fn owner_sees_everything() {
        let handler = handler_with(trained_user());

        let summary = handler
            .handle(GetUserSummaryQuery {
                user_id: owner_id(),
                requested_by: owner_id(),
            })
            .await
            .unwrap();

        let stats = summary.statistics.unwrap();
        assert_eq!(stats.average_score, 250.0);
        assert_eq!(stats.success_rate, 0.25);
        assert_eq!(summary.email.as_deref(), Some("t1@example.com"));
        assert!(summary.preferences.is_some());
    }

    #[tokio::test]
    async fn others_see_public_statistics_but_not_preferences() {
        let handler = handler_with(trained_user());

        let summary = handler
            .handle(GetUserSummaryQuery {
                user_id: owner_id(),
                requested_by: other_id(),
            })
            .await
            .unwrap();

        assert!(summary.statistics.is_some());
        assert!(summary.email.is_none());
        assert!(summary.preferences.is_none());
    }

    #[tokio::test]
    async fn private_statistics_hidden_from_others() {
        let mut user = trained_user();
        user.preferences_mut().public_statistics = false;
        let handler = handler_with(user);

        let summary = handler
            .handle(GetUserSummaryQuery {
                user_id: owner_id(),
                requested_by: other_id(),
            })
            .await
            .unwrap();

        assert!(summary.statistics.is_none());
    }

    #[tokio::test]
    async fn fresh_user_has_zero_derived_figures() {
        let handler = handler_with(User::new(owner_id(), "t1@example.com"));

        let summary = handler
            .handle(GetUserSummaryQuery {
                user_id: owner_id(),
                requested_by: owner_id(),
            })
            .await
            .unwrap();

        let stats = summary.statistics.unwrap();
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.success_rate, 0.0);
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let handler = handler_with(trained_user());

        let err = handler
            .handle(GetUserSummaryQuery {
                user_id: other_id(),
                requested_by: owner_id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, UserError::not_found(other_id()));
    }
}
