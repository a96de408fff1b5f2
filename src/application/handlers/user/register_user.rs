//! RegisterUserHandler - Command handler for creating learner profiles.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, UserId};
use crate::domain::user::{RoleSet, User, UserError, UserRegistered};
use crate::ports::{EventPublisher, UserRepository};

/// Command to register a new user profile.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    /// Identifier issued by the identity provider.
    pub user_id: UserId,
    pub email: String,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user: User,
    pub event: UserRegistered,
}

/// Handler for registering users.
///
/// New users get the domain defaults plus any configured default roles.
pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    default_roles: RoleSet,
}

impl RegisterUserHandler {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            default_roles: RoleSet::new(),
        }
    }

    /// Roles granted to every newly registered user.
    pub fn with_default_roles(mut self, roles: RoleSet) -> Self {
        self.default_roles = roles;
        self
    }

    pub async fn handle(
        &self,
        cmd: RegisterUserCommand,
        metadata: CommandMetadata,
    ) -> Result<RegisterUserResult, UserError> {
        // 1. Reject duplicates by id and by email
        let email = cmd.email.trim();
        if self.repository.exists(&cmd.user_id).await? {
            return Err(UserError::already_exists(cmd.user_id.to_string()));
        }
        if self.repository.find_by_email(email).await?.is_some() {
            return Err(UserError::already_exists(email));
        }

        // 2. Build the default-initialized aggregate
        let mut user = User::new(cmd.user_id, email);
        for role in self.default_roles.iter() {
            user.grant_role(role);
        }

        // 3. Persist
        self.repository.save(&user).await?;

        // 4. Publish
        let event = UserRegistered {
            event_id: EventId::new(),
            user_id: user.id().clone(),
            email: user.email().to_string(),
            roles: user.roles().iter().collect(),
            registered_at: user.created_at(),
        };
        let envelope = event
            .to_envelope()?
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        tracing::info!(
            user_id = %user.id(),
            roles = %user.roles(),
            "User registered"
        );

        Ok(RegisterUserResult { user, event })
    }
}
