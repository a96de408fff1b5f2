//! User aggregate root.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

use super::{Role, RoleSet, UserPreferences, UserStatistics};

/// A trainee's profile: identity, roles, performance and settings.
///
/// Statistics and preferences are owned values, never optional, so every
/// `User` carries both from construction onward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    // Identity
    id: UserId,
    email: String,
    created_at: Timestamp,

    // Access
    roles: RoleSet,
    is_active: bool,
    email_verified: bool,
    last_login_at: Option<Timestamp>,

    // Owned value objects
    statistics: UserStatistics,
    preferences: UserPreferences,
}

impl User {
    /// Creates a freshly registered user: no roles, active, unverified email,
    /// never logged in, default statistics and preferences.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self::new_at(id, email, Timestamp::now())
    }

    /// Same as [`User::new`] with an explicit creation time.
    pub fn new_at(id: UserId, email: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id,
            email: email.into(),
            created_at,
            roles: RoleSet::new(),
            is_active: true,
            email_verified: false,
            last_login_at: None,
            statistics: UserStatistics::default(),
            preferences: UserPreferences::default(),
        }
    }

    // Getters
    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn roles(&self) -> &RoleSet {
        &self.roles
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn email_verified(&self) -> bool {
        self.email_verified
    }

    pub fn last_login_at(&self) -> Option<Timestamp> {
        self.last_login_at
    }

    pub fn statistics(&self) -> &UserStatistics {
        &self.statistics
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    // Field-level mutation for identity, challenge-mode and settings collaborators
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn roles_mut(&mut self) -> &mut RoleSet {
        &mut self.roles
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    pub fn set_email_verified(&mut self, verified: bool) {
        self.email_verified = verified;
    }

    pub fn set_last_login_at(&mut self, at: Option<Timestamp>) {
        self.last_login_at = at;
    }

    pub fn statistics_mut(&mut self) -> &mut UserStatistics {
        &mut self.statistics
    }

    pub fn preferences_mut(&mut self) -> &mut UserPreferences {
        &mut self.preferences
    }

    // Role predicates

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(role)
    }

    /// True iff any of `roles` is held. Empty on either side yields `false`.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.roles.intersects(roles)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Administrator)
    }

    /// Strictly the `Moderator` tag; `Administrator` does not imply it.
    pub fn is_moderator(&self) -> bool {
        self.has_role(Role::Moderator)
    }

    /// Returns `true` if the role was newly granted.
    pub fn grant_role(&mut self, role: Role) -> bool {
        self.roles.insert(role)
    }

    /// Returns `true` if the role was held and is now removed.
    pub fn revoke_role(&mut self, role: Role) -> bool {
        self.roles.remove(role)
    }

    // Session

    /// Stamps `last_login_at` with the current wall-clock time.
    pub fn record_login(&mut self) {
        self.record_login_at(Timestamp::now());
    }

    /// Stamps `last_login_at` with `at`.
    ///
    /// Ordering against earlier logins is not checked; callers supply
    /// non-decreasing times.
    pub fn record_login_at(&mut self, at: Timestamp) {
        self.last_login_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_user_id() -> UserId {
        UserId::new("trainee-001").unwrap()
    }

    fn test_user() -> User {
        User::new(test_user_id(), "trainee@example.com")
    }

    fn user_with_roles(roles: &[Role]) -> User {
        let mut user = test_user();
        for role in roles {
            user.grant_role(*role);
        }
        user
    }

    #[test]
    fn new_user_has_registration_defaults() {
        let user = test_user();

        assert_eq!(user.id(), &test_user_id());
        assert_eq!(user.email(), "trainee@example.com");
        assert!(user.roles().is_empty());
        assert!(user.is_active());
        assert!(!user.email_verified());
        assert!(user.last_login_at().is_none());
        assert_eq!(user.statistics(), &UserStatistics::default());
        assert_eq!(user.preferences(), &UserPreferences::default());
    }

    #[test]
    fn new_at_uses_given_creation_time() {
        let ts = Timestamp::from_unix_secs(1_704_326_400).unwrap();
        let user = User::new_at(test_user_id(), "a@b.c", ts);
        assert_eq!(user.created_at(), ts);
    }

    #[test]
    fn has_role_reflects_granted_roles() {
        let user = user_with_roles(&[Role::Premium]);

        assert!(user.has_role(Role::Premium));
        assert!(!user.has_role(Role::User));
    }

    #[test]
    fn has_any_role_is_false_for_empty_query() {
        let user = user_with_roles(&Role::ALL);
        assert!(!user.has_any_role(&[]));
    }

    #[test]
    fn has_any_role_is_false_without_roles() {
        let user = test_user();
        assert!(!user.has_any_role(&[Role::User, Role::Administrator]));
    }

    #[test]
    fn has_any_role_detects_single_overlap() {
        let user = user_with_roles(&[Role::Moderator]);
        assert!(user.has_any_role(&[Role::Administrator, Role::Moderator]));
    }

    #[test]
    fn is_admin_requires_administrator_tag() {
        assert!(user_with_roles(&[Role::Administrator]).is_admin());
        assert!(!user_with_roles(&[Role::Moderator, Role::Premium]).is_admin());
    }

    #[test]
    fn administrator_is_not_implicitly_moderator() {
        let user = user_with_roles(&[Role::Administrator]);

        assert!(user.is_admin());
        assert!(!user.is_moderator());
    }

    #[test]
    fn moderator_is_not_implicitly_admin() {
        let user = user_with_roles(&[Role::Moderator]);

        assert!(user.is_moderator());
        assert!(!user.is_admin());
    }

    #[test]
    fn grant_and_revoke_report_changes() {
        let mut user = test_user();

        assert!(user.grant_role(Role::User));
        assert!(!user.grant_role(Role::User));
        assert_eq!(user.roles().len(), 1);

        assert!(user.revoke_role(Role::User));
        assert!(!user.revoke_role(Role::User));
        assert!(user.roles().is_empty());
    }

    #[test]
    fn record_login_stamps_current_time() {
        let mut user = test_user();
        assert!(user.last_login_at().is_none());

        let before = Timestamp::now();
        user.record_login();
        let after = Timestamp::now();

        let stamped = user.last_login_at().unwrap();
        assert!(stamped >= before);
        assert!(stamped <= after);
    }

    #[test]
    fn repeated_logins_advance_timestamp() {
        let mut user = test_user();

        user.record_login();
        let first = user.last_login_at().unwrap();
        user.record_login();
        let second = user.last_login_at().unwrap();

        assert!(second >= first);
    }

    #[test]
    fn record_login_at_stores_given_time() {
        let mut user = test_user();
        let ts = Timestamp::from_unix_secs(1_704_412_800).unwrap();

        user.record_login_at(ts);

        assert_eq!(user.last_login_at(), Some(ts));
    }

    #[test]
    fn nested_values_are_mutable_in_place() {
        let mut user = test_user();

        user.statistics_mut().scenarios_completed = 5;
        user.statistics_mut().highest_score = 1000;
        user.preferences_mut().theme = "light".to_string();
        user.set_email_verified(true);
        user.set_active(false);

        assert_eq!(user.statistics().average_score(), 200.0);
        assert_eq!(user.preferences().theme, "light");
        assert!(user.email_verified());
        assert!(!user.is_active());
    }

    #[test]
    fn roles_mut_exposes_set_operations() {
        let mut user = test_user();
        user.roles_mut().insert(Role::Premium);
        assert!(user.has_role(Role::Premium));
    }

    #[test]
    fn serialization_preserves_every_field() {
        let mut user = user_with_roles(&[Role::User, Role::Premium]);
        user.record_login_at(Timestamp::from_unix_secs(1_704_412_800).unwrap());
        user.statistics_mut().scenarios_completed = 10;
        user.statistics_mut().perfect_scenarios = 7;
        user.preferences_mut().master_volume = 55;

        let json = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, user);
    }

    fn any_roles() -> impl Strategy<Value = Vec<Role>> {
        prop::collection::vec(prop::sample::select(Role::ALL.to_vec()), 0..6)
    }

    proptest! {
        #[test]
        fn has_role_iff_member(held in any_roles(), probe in prop::sample::select(Role::ALL.to_vec())) {
            let user = user_with_roles(&held);
            prop_assert_eq!(user.has_role(probe), held.contains(&probe));
        }

        #[test]
        fn has_any_role_iff_intersection(held in any_roles(), query in any_roles()) {
            let user = user_with_roles(&held);
            let expected = query.iter().any(|r| held.contains(r));
            prop_assert_eq!(user.has_any_role(&query), expected);
        }

        #[test]
        fn admin_and_moderator_track_their_own_tags(held in any_roles()) {
            let user = user_with_roles(&held);
            prop_assert_eq!(user.is_admin(), held.contains(&Role::Administrator));
            prop_assert_eq!(user.is_moderator(), held.contains(&Role::Moderator));
        }
    }
}
