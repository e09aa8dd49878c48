use super::dto::CreateWebhookRequest;
use crate::domain::{
    shared::errors::DomainError,
    webhook::{entity::Webhook, errors::WebhookError, repository::WebhookRepository},
};
use crate::workers::webhook_actor::{WebhookAction, WebhookActorHandle};
use std::sync::Arc;
use validator::Validate;

/// Persists subscription changes, then forwards them to the webhook actor.
///
/// Storage is written first so a registration that fails to persist never
/// reaches the in-memory registry.
pub struct ManageWebhooksUseCase {
    repository: Arc<dyn WebhookRepository>,
    actor: WebhookActorHandle,
}

#[derive(Debug, thiserror::Error)]
pub enum ManageWebhooksError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

impl ManageWebhooksUseCase {
    pub fn new(repository: Arc<dyn WebhookRepository>, actor: WebhookActorHandle) -> Self {
        Self { repository, actor }
    }

    pub async fn create(&self, request: CreateWebhookRequest) -> Result<Webhook, ManageWebhooksError> {
        request.validate().map_err(DomainError::from)?;

        let webhook = self
            .repository
            .create(request.city_id, &request.callback_url)
            .await?;
        self.actor.submit(WebhookAction::Add(webhook.clone())).await?;

        tracing::info!(webhook_id = webhook.id, city_id = webhook.city_id, "Webhook created");
        Ok(webhook)
    }

    pub async fn delete(&self, id: i64) -> Result<Webhook, ManageWebhooksError> {
        let webhook = self.repository.delete(id).await?;
        self.actor.submit(WebhookAction::Remove(webhook.clone())).await?;

        tracing::info!(webhook_id = webhook.id, "Webhook deleted");
        Ok(webhook)
    }
}
