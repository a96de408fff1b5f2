//! RecordScenarioCompletionHandler - Folds a challenge-mode result into a
//! user's statistics.

use std::sync::Arc;

use crate::domain::foundation::{
    CommandMetadata, EventId, SerializableDomainEvent, Timestamp, UserId,
};
use crate::domain::user::{ScenarioCompletionRecorded, UserError, UserStatistics};
use crate::ports::{EventPublisher, UserRepository};

/// Command recording one completed scenario.
#[derive(Debug, Clone)]
pub struct RecordScenarioCompletionCommand {
    pub user_id: UserId,
    /// Scenario identifier as known to challenge mode.
    pub scenario: String,
    pub score: u32,
    /// Whether the run finished without any violation.
    pub perfect: bool,
}

#[derive(Debug, Clone)]
pub struct RecordScenarioCompletionResult {
    pub statistics: UserStatistics,
    pub new_highest_score: bool,
}

pub struct RecordScenarioCompletionHandler {
    repository: Arc<dyn UserRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RecordScenarioCompletionHandler {
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
        cmd: RecordScenarioCompletionCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordScenarioCompletionResult, UserError> {
        if cmd.scenario.trim().is_empty() {
            return Err(UserError::validation("scenario", "Scenario cannot be empty"));
        }

        let mut user = self
            .repository
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| UserError::not_found(cmd.user_id.clone()))?;

        if !user.is_active() {
            return Err(UserError::inactive(cmd.user_id));
        }

        let stats = user.statistics_mut();
        stats.scenarios_completed = stats.scenarios_completed.saturating_add(1);
        let new_highest_score = cmd.score > stats.highest_score;
        if new_highest_score {
            stats.highest_score = cmd.score;
        }
        if cmd.perfect {
            stats.perfect_scenarios = stats.perfect_scenarios.saturating_add(1);
        }
        let statistics = *stats;

        self.repository.update(&user).await?;

        let event = ScenarioCompletionRecorded {
            event_id: EventId::new(),
            user_id: cmd.user_id.clone(),
            scenario: cmd.scenario,
            score: cmd.score,
            perfect: cmd.perfect,
            statistics,
            new_highest_score,
            recorded_at: Timestamp::now(),
        };
        let envelope = event
            .to_envelope()?
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        tracing::info!(
            user_id = %cmd.user_id,
            scenario = %event.scenario,
            score = cmd.score,
            perfect = cmd.perfect,
            new_highest_score,
            "Scenario completion recorded"
        );

        Ok(RecordScenarioCompletionResult {
            statistics,
            new_highest_score,
        })
    }
}
