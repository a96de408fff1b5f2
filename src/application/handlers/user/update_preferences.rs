//! UpdatePreferencesHandler - Partial update of a user's settings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, Timestamp, UserId};
use crate::domain::user::{PreferencesUpdated, UserError, UserPreferences};
use crate::ports::{EventPublisher, UserRepository};

/// Fields to change; `None` leaves the current value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesPatch {
    pub theme: Option<String>,
    pub voice_commands_enabled: Option<bool>,
    pub text_to_speech_enabled: Option<bool>,
    pub master_volume: Option<i32>,
    pub preferred_difficulty: Option<String>,
    pub show_tutorials: Option<bool>,
    pub public_statistics: Option<bool>,
    pub email_notifications: Option<bool>,
}

impl PreferencesPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the patch in place. Returns `true` if any value changed.
    pub fn apply(self, prefs: &mut UserPreferences) -> bool {
        let before = prefs.clone();

        if let Some(theme) = self.theme {
            prefs.theme = theme;
        }
        if let Some(v) = self.voice_commands_enabled {
            prefs.voice_commands_enabled = v;
        }
        if let Some(v) = self.text_to_speech_enabled {
            prefs.text_to_speech_enabled = v;
        }
        if let Some(volume) = self.master_volume {
            prefs.master_volume = volume;
        }
        if let Some(difficulty) = self.preferred_difficulty {
            prefs.preferred_difficulty = difficulty;
        }
        if let Some(v) = self.show_tutorials {
            prefs.show_tutorials = v;
        }
        if let Some(v) = self.public_statistics {
            prefs.public_statistics = v;
        }
        if let Some(v) = self.email_notifications {
            prefs.email_notifications = v;
        }

        *prefs != before
    }
}

/// Command to update the caller's own preferences.
#[derive(Debug, Clone)]
pub struct UpdatePreferencesCommand {
    pub user_id: UserId,
    pub patch: PreferencesPatch,
}

#[derive(Debug, Clone)]
pub struct UpdatePreferencesResult {
    pub preferences: UserPreferences,
    pub changed: bool,
}

pub struct UpdatePreferencesHandler {
    repository: Arc<dyn UserRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdatePreferencesHandler {
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
        cmd: UpdatePreferencesCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdatePreferencesResult, UserError> {
        if metadata.user_id != cmd.user_id {
            return Err(UserError::forbidden(format!(
                "User {} cannot change preferences of {}",
                metadata.user_id, cmd.user_id
            )));
        }

        let mut user = self
            .repository
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| UserError::not_found(cmd.user_id.clone()))?;

        let old_preferences = user.preferences().clone();
        let changed = cmd.patch.apply(user.preferences_mut());
        if !changed {
            return Ok(UpdatePreferencesResult {
                preferences: old_preferences,
                changed,
            });
        }

        self.repository.update(&user).await?;

        let event = PreferencesUpdated {
            event_id: EventId::new(),
            user_id: cmd.user_id.clone(),
            old_preferences,
            new_preferences: user.preferences().clone(),
            updated_at: Timestamp::now(),
        };
        let envelope = event
            .to_envelope()?
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        tracing::debug!(user_id = %cmd.user_id, "Preferences updated");

        Ok(UpdatePreferencesResult {
            preferences: event.new_preferences,
            changed,
        })
    }
}
