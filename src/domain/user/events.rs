//! User domain events.
//!
//! - `UserRegistered` - Profile created with registration defaults
//! - `UserLoggedIn` - Login timestamp recorded
//! - `RoleGranted` / `RoleRevoked` - Role membership changed
//! - `ScenarioCompletionRecorded` - Challenge-mode result folded into statistics
//! - `PreferencesUpdated` - Settings changed

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, Timestamp, UserId};

use super::{Role, UserPreferences, UserStatistics};

// ════════════════════════════════════════════════════════════════════════════
// UserRegistered
// ════════════════════════════════════════════════════════════════════════════

/// Published when a new profile is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRegistered {
    pub event_id: EventId,
    pub user_id: UserId,
    pub email: String,
    /// Roles held right after registration (configured defaults).
    pub roles: Vec<Role>,
    pub registered_at: Timestamp,
}

domain_event!(
    UserRegistered,
    event_type = "user.registered.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = registered_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// UserLoggedIn
// ════════════════════════════════════════════════════════════════════════════

/// Published when a login is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLoggedIn {
    pub event_id: EventId,
    pub user_id: UserId,
    /// Login before this one, if any.
    pub previous_login_at: Option<Timestamp>,
    pub logged_in_at: Timestamp,
}

domain_event!(
    UserLoggedIn,
    event_type = "user.logged_in.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = logged_in_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// RoleGranted / RoleRevoked
// ════════════════════════════════════════════════════════════════════════════

/// Published when a role is added to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleGranted {
    pub event_id: EventId,
    pub user_id: UserId,
    pub role: Role,
    /// Administrator who performed the change.
    pub granted_by: UserId,
    pub granted_at: Timestamp,
}

domain_event!(
    RoleGranted,
    event_type = "user.role_granted.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = granted_at,
    event_id = event_id
);

/// Published when a role is removed from a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRevoked {
    pub event_id: EventId,
    pub user_id: UserId,
    pub role: Role,
    pub revoked_by: UserId,
    pub revoked_at: Timestamp,
}

domain_event!(
    RoleRevoked,
    event_type = "user.role_revoked.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = revoked_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ScenarioCompletionRecorded
// ════════════════════════════════════════════════════════════════════════════

/// Published after a scenario result updates the statistics counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCompletionRecorded {
    pub event_id: EventId,
    pub user_id: UserId,
    /// Identifier of the scenario as known to challenge mode.
    pub scenario: String,
    pub score: u32,
    pub perfect: bool,
    /// Counters after the update.
    pub statistics: UserStatistics,
    pub new_highest_score: bool,
    pub recorded_at: Timestamp,
}

domain_event!(
    ScenarioCompletionRecorded,
    event_type = "user.scenario_completed.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = recorded_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// PreferencesUpdated
// ════════════════════════════════════════════════════════════════════════════

/// Published when settings change. Carries the full before/after values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferencesUpdated {
    pub event_id: EventId,
    pub user_id: UserId,
    pub old_preferences: UserPreferences,
    pub new_preferences: UserPreferences,
    pub updated_at: Timestamp,
}

domain_event!(
    PreferencesUpdated,
    event_type = "user.preferences_updated.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "User",
    occurred_at = updated_at,
    event_id = event_id
);
