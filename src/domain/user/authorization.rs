//! Role-based authorization checks against a `User`.
//!
//! These wrap the flat role predicates in `AuthorizationResult` so callers
//! get a consistent denial reason and `Forbidden` error.

use crate::domain::foundation::{AuthorizationContext, AuthorizationResult};

use super::{Role, User};

/// Grants access iff the user is active and holds `role`.
pub fn check_role(user: &User, role: Role, ctx: &AuthorizationContext) -> AuthorizationResult {
    if !user.is_active() {
        return ctx.deny(format!("User {} is inactive", user.id()));
    }
    if user.has_role(role) {
        ctx.grant()
    } else {
        ctx.deny(format!("{} role required to {}", role, ctx.action))
    }
}

/// Grants access iff the user is active and holds any of `roles`.
pub fn check_any_role(user: &User, roles: &[Role], ctx: &AuthorizationContext) -> AuthorizationResult {
    if !user.is_active() {
        return ctx.deny(format!("User {} is inactive", user.id()));
    }
    if user.has_any_role(roles) {
        ctx.grant()
    } else {
        let names: Vec<&str> = roles.iter().map(Role::as_str).collect();
        ctx.deny(format!(
            "One of [{}] required to {}",
            names.join(", "),
            ctx.action
        ))
    }
}
