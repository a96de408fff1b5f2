//! User application handlers.
//!
//! Command handlers change a profile and publish one event per effective
//! change. Query handlers read only.

mod assign_role;
mod check_role;
mod get_user_summary;
mod record_login;
mod record_scenario_completion;
mod register_user;
mod update_preferences;

pub use assign_role::{AssignRoleCommand, AssignRoleHandler, AssignRoleResult, RoleChange};
pub use check_role::{CheckRoleHandler, CheckRoleQuery, CheckRoleResult, RoleRequirement};
pub use get_user_summary::{
    GetUserSummaryHandler, GetUserSummaryQuery, StatisticsSummary, UserSummary,
};
pub use record_login::{RecordLoginCommand, RecordLoginHandler, RecordLoginResult};
pub use record_scenario_completion::{
    RecordScenarioCompletionCommand, RecordScenarioCompletionHandler,
    RecordScenarioCompletionResult,
};
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};
pub use update_preferences::{
    PreferencesPatch, UpdatePreferencesCommand, UpdatePreferencesHandler,
    UpdatePreferencesResult,
};
