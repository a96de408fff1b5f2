//! AssignRoleHandler - Command handler for granting and revoking roles.
//!
//! Only active administrators may change roles. Roles are flat, so
//! granting `Administrator` does not add `Moderator` or any other tag.

use std::sync::Arc;

use crate::domain::foundation::{
    AuthorizationContext, CommandMetadata, EventEnvelope, EventId, SerializableDomainEvent,
    Timestamp, UserId,
};
use crate::domain::user::{check_role, Role, RoleGranted, RoleRevoked, RoleSet, UserError};
use crate::ports::{EventPublisher, UserRepository};

/// Direction of a role change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChange {
    Grant,
    Revoke,
}

/// Command to grant or revoke a single role.
///
/// The acting administrator is taken from `CommandMetadata::user_id`.
#[derive(Debug, Clone)]
pub struct AssignRoleCommand {
    pub user_id: UserId,
    pub role: Role,
    pub change: RoleChange,
}

#[derive(Debug, Clone)]
pub struct AssignRoleResult {
    /// False when the user already had (or already lacked) the role.
    pub changed: bool,
    pub roles: RoleSet,
    /// Shared by the authorization decision and the published event.
    pub correlation_id: String,
}

pub struct AssignRoleHandler {
    repository: Arc<dyn UserRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl AssignRoleHandler {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: AssignRoleCommand,
        metadata: CommandMetadata,
    ) -> Result<AssignRoleResult, UserError> {
        let correlation_id = metadata.correlation_id();

        // 1. Authorize the actor
        let actor = self
            .repository
            .find_by_id(&metadata.user_id)
            .await?
            .ok_or_else(|| UserError::forbidden(format!("Unknown actor {}", metadata.user_id)))?;

        let action = match cmd.change {
            RoleChange::Grant => "grant_role",
            RoleChange::Revoke => "revoke_role",
        };
        let ctx = AuthorizationContext::new(
            metadata.user_id.clone(),
            action,
            "RoleAssignment",
            cmd.user_id.to_string(),
        )
        .with_correlation_id(correlation_id.clone());

        let decision = check_role(&actor, Role::Administrator, &ctx);
        if decision.is_denied() {
            tracing::warn!(
                actor = %metadata.user_id,
                target = %cmd.user_id,
                role = %cmd.role,
                reason = ?decision.denial_reason,
                correlation_id = %correlation_id,
                "Role change denied"
            );
        }
        decision.into_result()?;

        // 2. Load the target and apply the change
        let mut user = self
            .repository
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| UserError::not_found(cmd.user_id.clone()))?;

        let changed = match cmd.change {
            RoleChange::Grant => user.grant_role(cmd.role),
            RoleChange::Revoke => user.revoke_role(cmd.role),
        };

        if !changed {
            return Ok(AssignRoleResult {
                changed,
                roles: user.roles().clone(),
                correlation_id,
            });
        }

        // 3. Persist and publish
        self.repository.update(&user).await?;

        let now = Timestamp::now();
        let envelope = match cmd.change {
            RoleChange::Grant => RoleGranted {
                event_id: EventId::new(),
                user_id: cmd.user_id.clone(),
                role: cmd.role,
                granted_by: metadata.user_id.clone(),
                granted_at: now,
            }
            .to_envelope()?,
            RoleChange::Revoke => RoleRevoked {
                event_id: EventId::new(),
                user_id: cmd.user_id.clone(),
                role: cmd.role,
                revoked_by: metadata.user_id.clone(),
                revoked_at: now,
            }
            .to_envelope()?,
        };
        self.publish(envelope, &correlation_id, &metadata.user_id).await?;

        tracing::info!(
            actor = %metadata.user_id,
            target = %cmd.user_id,
            role = %cmd.role,
            change = ?cmd.change,
            correlation_id = %correlation_id,
            "Role changed"
        );

        Ok(AssignRoleResult {
            changed,
            roles: user.roles().clone(),
            correlation_id,
        })
    }

    async fn publish(
        &self,
        envelope: EventEnvelope,
        correlation_id: &str,
        actor: &UserId,
    ) -> Result<(), UserError> {
        let envelope = envelope
            .with_correlation_id(correlation_id)
            .with_user_id(actor.to_string());
        self.event_publisher.publish(envelope).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryEventBus, InMemoryUserRepository};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::user::User;

    fn admin_id() -> UserId {
        UserId::new("instructor-1").unwrap()
    }

    fn trainee_id() -> UserId {
        UserId::new("trainee-1").unwrap()
    }

    fn admin() -> User {
        let mut user = User::new(admin_id(), "instructor@example.com");
        user.grant_role(Role::Administrator);
        user
    }

    fn trainee() -> User {
        let mut user = User::new(trainee_id(), "trainee@example.com");
        user.grant_role(Role::User);
        user
    }

    fn setup(
        users: Vec<User>,
    ) -> (Arc<InMemoryUserRepository>, Arc<InMemoryEventBus>, AssignRoleHandler) {
        let repo = Arc::new(InMemoryUserRepository::with_users(users));
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = AssignRoleHandler::new(repo.clone(), bus.clone());
        (repo, bus, handler)
    }

    fn grant(role: Role) -> AssignRoleCommand {
        AssignRoleCommand {
            user_id: trainee_id(),
            role,
            change: RoleChange::Grant,
        }
    }

    #[tokio::test]
    async fn admin_grants_role() {
        let (repo, bus, handler) = setup(vec![admin(), trainee()]);

        let result = handler
            .handle(grant(Role::Premium), CommandMetadata::new(admin_id()))
            .await
            .unwrap();

        assert!(result.changed);
        assert!(result.roles.contains(Role::Premium));
        let stored = repo.find_by_id(&trainee_id()).await.unwrap().unwrap();
        assert!(stored.has_role(Role::Premium));

        let events = bus.events_of_type("user.role_granted.v1").await;
        assert_eq!(events.len(), 1);
        let payload: RoleGranted = events[0].payload_as().unwrap();
        assert_eq!(payload.role, Role::Premium);
        assert_eq!(payload.granted_by, admin_id());
    }

    #[tokio::test]
    async fn granting_administrator_does_not_imply_moderator() {
        let (repo, _bus, handler) = setup(vec![admin(), trainee()]);

        handler
            .handle(grant(Role::Administrator), CommandMetadata::new(admin_id()))
            .await
            .unwrap();

        let stored = repo.find_by_id(&trainee_id()).await.unwrap().unwrap();
        assert!(stored.is_admin());
        assert!(!stored.is_moderator());
    }

    #[tokio::test]
    async fn admin_revokes_role() {
        let (_repo, bus, handler) = setup(vec![admin(), trainee()]);

        let result = handler
            .handle(
                AssignRoleCommand {
                    user_id: trainee_id(),
                    role: Role::User,
                    change: RoleChange::Revoke,
                },
                CommandMetadata::new(admin_id()),
            )
            .await
            .unwrap();

        assert!(result.changed);
        assert!(result.roles.is_empty());
        assert!(bus.has_event("user.role_revoked.v1").await);
    }

    #[tokio::test]
    async fn generated_correlation_id_is_reused_for_event() {
        let (_repo, bus, handler) = setup(vec![admin(), trainee()]);

        let result = handler
            .handle(grant(Role::Premium), CommandMetadata::new(admin_id()))
            .await
            .unwrap();

        let events = bus.events_of_type("user.role_granted.v1").await;
        assert!(!result.correlation_id.is_empty());
        assert_eq!(
            events[0].metadata.correlation_id.as_deref(),
            Some(result.correlation_id.as_str())
        );
    }

    #[tokio::test]
    async fn supplied_correlation_id_is_kept() {
        let (_repo, bus, handler) = setup(vec![admin(), trainee()]);

        let result = handler
            .handle(
                grant(Role::Premium),
                CommandMetadata::new(admin_id()).with_correlation_id("audit-7"),
            )
            .await
            .unwrap();

        assert_eq!(result.correlation_id, "audit-7");
        let events = bus.published_events().await;
        assert_eq!(events[0].metadata.correlation_id.as_deref(), Some("audit-7"));
    }

    #[tokio::test]
    async fn repeated_grant_is_noop_without_event() {
        let (_repo, bus, handler) = setup(vec![admin(), trainee()]);

        let result = handler
            .handle(grant(Role::User), CommandMetadata::new(admin_id()))
            .await
            .unwrap();

        assert!(!result.changed);
        assert_eq!(result.roles.len(), 1);
        assert_eq!(bus.event_count().await, 0);
    }

    #[tokio::test]
    async fn non_admin_is_forbidden() {
        let mut moderator = User::new(UserId::new("mod-1").unwrap(), "mod@example.com");
        moderator.grant_role(Role::Moderator);
        let (repo, _bus, handler) = setup(vec![moderator, trainee()]);

        let err = handler
            .handle(
                grant(Role::Premium),
                CommandMetadata::new(UserId::new("mod-1").unwrap()),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
        let stored = repo.find_by_id(&trainee_id()).await.unwrap().unwrap();
        assert!(!stored.has_role(Role::Premium));
    }

    #[tokio::test]
    async fn inactive_admin_is_forbidden() {
        let mut admin = admin();
        admin.set_active(false);
        let (_repo, _bus, handler) = setup(vec![admin, trainee()]);

        let err = handler
            .handle(grant(Role::Premium), CommandMetadata::new(admin_id()))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::Forbidden(ref reason) if reason.contains("inactive")));
    }

    #[tokio::test]
    async fn unknown_target_is_not_found() {
        let (_repo, _bus, handler) = setup(vec![admin()]);

        let err = handler
            .handle(grant(Role::Premium), CommandMetadata::new(admin_id()))
            .await
            .unwrap_err();

        assert_eq!(err, UserError::not_found(trainee_id()));
    }
}
