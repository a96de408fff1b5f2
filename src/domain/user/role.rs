//! Role tags and the set container that holds them.
//!
//! Roles are flat: no tag implies another. In particular `Administrator`
//! does not satisfy a `Moderator` check.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Authorization tag granted to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Regular trainee.
    User,
    /// Paid access to premium scenarios.
    Premium,
    Administrator,
    Moderator,
}

impl Role {
    /// Every role tag, in declaration order.
    pub const ALL: [Role; 4] = [Role::User, Role::Premium, Role::Administrator, Role::Moderator];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Premium => "Premium",
            Role::Administrator => "Administrator",
            Role::Moderator => "Moderator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    /// Parses a role name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ValidationError::invalid_format("role", format!("unknown role '{}'", name)))
    }
}

/// Set of roles held by a user. Duplicates are impossible by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds a role. Returns `false` if it was already present.
    pub fn insert(&mut self, role: Role) -> bool {
        self.0.insert(role)
    }

    /// Removes a role. Returns `false` if it was not present.
    pub fn remove(&mut self, role: Role) -> bool {
        self.0.remove(&role)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// True iff at least one of `roles` is in this set.
    ///
    /// An empty query never intersects.
    pub fn intersects<'a, I>(&self, roles: I) -> bool
    where
        I: IntoIterator<Item = &'a Role>,
    {
        roles.into_iter().any(|role| self.0.contains(role))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RoleSet {
    type Item = &'a Role;
    type IntoIter = std::collections::btree_set::Iter<'a, Role>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Role::as_str).collect();
        write!(f, "{}", names.join(","))
    }
}
