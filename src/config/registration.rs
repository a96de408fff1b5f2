//! Registration configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::user::{Role, RoleSet};

/// Settings applied when a new profile is registered
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationConfig {
    /// Comma-separated role names granted at registration (e.g. "User").
    /// Empty means new users start without roles.
    #[serde(default)]
    pub default_roles: Option<String>,
}

impl RegistrationConfig {
    /// Parse `default_roles` into a role set
    pub fn default_role_set(&self) -> Result<RoleSet, ValidationError> {
        let Some(raw) = self.default_roles.as_deref() else {
            return Ok(RoleSet::new());
        };

        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| {
                name.parse::<Role>()
                    .map_err(|_| ValidationError::UnknownRole(name.to_string()))
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.default_role_set().map(|_| ())
    }
}
