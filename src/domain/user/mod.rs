//! User module - the learner profile aggregate.
//!
//! A `User` owns:
//!
//! - **Roles** - a flat set of authorization tags (`RoleSet`)
//! - **Statistics** - scenario counters and derived ratios (`UserStatistics`)
//! - **Preferences** - settings with fixed defaults (`UserPreferences`)
//!
//! # Domain Invariants
//!
//! 1. Roles never contain duplicates
//! 2. Statistics and preferences exist for the lifetime of a user
//! 3. No role implies another (Administrator is not Moderator)
//! 4. Derived statistics return 0 when no scenario has been completed

pub mod aggregate;
pub mod authorization;
pub mod errors;
pub mod events;
pub mod preferences;
pub mod role;
pub mod statistics;

pub use aggregate::User;
pub use authorization::{check_any_role, check_role};
pub use errors::UserError;
pub use events::{
    PreferencesUpdated, RoleGranted, RoleRevoked, ScenarioCompletionRecorded, UserLoggedIn,
    UserRegistered,
};
pub use preferences::{
    UserPreferences, DEFAULT_DIFFICULTY, DEFAULT_MASTER_VOLUME, DEFAULT_THEME,
};
pub use role::{Role, RoleSet};
pub use statistics::UserStatistics;
