//! RecordLoginHandler - Command handler stamping a user's last login.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, Timestamp, UserId};
use crate::domain::user::{UserError, UserLoggedIn};
use crate::ports::{EventPublisher, UserRepository};

/// Command to record a successful login.
///
/// Authentication already happened upstream; this only updates the profile.
#[derive(Debug, Clone)]
pub struct RecordLoginCommand {
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct RecordLoginResult {
    pub logged_in_at: Timestamp,
    pub previous_login_at: Option<Timestamp>,
}

pub struct RecordLoginHandler {
    repository: Arc<dyn UserRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RecordLoginHandler {
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
        cmd: RecordLoginCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordLoginResult, UserError> {
        let mut user = self
            .repository
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| UserError::not_found(cmd.user_id.clone()))?;

        if !user.is_active() {
            tracing::warn!(user_id = %cmd.user_id, "Login recorded for inactive user rejected");
            return Err(UserError::inactive(cmd.user_id));
        }

        let previous_login_at = user.last_login_at();
        let logged_in_at = Timestamp::now();
        user.record_login_at(logged_in_at);

        self.repository.update(&user).await?;

        let event = UserLoggedIn {
            event_id: EventId::new(),
            user_id: cmd.user_id.clone(),
            previous_login_at,
            logged_in_at,
        };
        let envelope = event
            .to_envelope()?
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        tracing::debug!(user_id = %cmd.user_id, "Login recorded");

        Ok(RecordLoginResult {
            logged_in_at,
            previous_login_at,
        })
    }
}
