//! In-memory event bus.
//!
//! Captures every published envelope for inspection. Used by tests and by
//! embedders that have no broker.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus that records published events in order.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
///
/// assert_eq!(bus.event_count().await, 1);
/// assert!(bus.has_event("user.logged_in.v1").await);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn published_events(&self) -> Vec<EventEnvelope> {
        self.published.read().await.clone()
    }

    pub async fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published
            .read()
            .await
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    pub async fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published
            .read()
            .await
            .iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .cloned()
            .collect()
    }

    pub async fn event_count(&self) -> usize {
        self.published.read().await.len()
    }

    pub async fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .await
            .iter()
            .any(|e| e.event_type == event_type)
    }

    pub async fn clear(&self) {
        self.published.write().await.clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::debug!(
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            "Event published"
        );
        self.published.write().await.push(event);
        Ok(())
    }
}
