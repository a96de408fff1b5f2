//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod user;

pub use user::{
    // Commands
    AssignRoleCommand, AssignRoleHandler, AssignRoleResult, RoleChange,
    RecordLoginCommand, RecordLoginHandler, RecordLoginResult,
    RecordScenarioCompletionCommand, RecordScenarioCompletionHandler,
    RecordScenarioCompletionResult,
    RegisterUserCommand, RegisterUserHandler, RegisterUserResult,
    PreferencesPatch, UpdatePreferencesCommand, UpdatePreferencesHandler,
    UpdatePreferencesResult,
    // Queries
    CheckRoleHandler, CheckRoleQuery, CheckRoleResult, RoleRequirement,
    GetUserSummaryHandler, GetUserSummaryQuery, StatisticsSummary, UserSummary,
};
