use super::entity::Webhook;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

/// Durable storage for webhook subscriptions.
#[async_trait]
pub trait WebhookRepository: Send + Sync {
    async fn create(&self, city_id: i64, callback_url: &str) -> Result<Webhook, DomainError>;
    /// Deletes the subscription and returns it, or `NotFound` when absent.
    async fn delete(&self, id: i64) -> Result<Webhook, DomainError>;
    /// Every persisted subscription in storage order (ascending id).
    async fn find_all(&self) -> Result<Vec<Webhook>, DomainError>;
}
