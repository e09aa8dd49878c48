use crate::domain::webhook::{errors::WebhookError, repository::WebhookRepository};
use crate::workers::webhook_actor::{WebhookAction, WebhookActorHandle};
use std::sync::Arc;

/// Rebuilds the in-memory registry from durable storage at boot.
///
/// Persisted rows are replayed as `Add` actions so they pass through the same
/// validation and ordering as live registrations.
pub struct WebhookRestorer {
    repository: Arc<dyn WebhookRepository>,
    actor: WebhookActorHandle,
}

impl WebhookRestorer {
    pub fn new(repository: Arc<dyn WebhookRepository>, actor: WebhookActorHandle) -> Self {
        Self { repository, actor }
    }

    /// Returns the number of webhooks enqueued. A storage failure leaves the
    /// registry empty and is logged rather than returned.
    pub async fn restore(&self) -> usize {
        let webhooks = match self.repository.find_all().await {
            Ok(webhooks) => webhooks,
            Err(e) => {
                let err = WebhookError::StorageUnavailable(e.to_string());
                tracing::error!(target: "webhook_registry", error = %err, "Webhook restore skipped");
                return 0;
            }
        };

        let mut restored = 0;
        for webhook in webhooks {
            if let Err(e) = self.actor.submit(WebhookAction::Add(webhook)).await {
                tracing::error!(target: "webhook_registry", error = %e, "Webhook restore aborted");
                break;
            }
            restored += 1;
        }

        tracing::info!(target: "webhook_registry", restored, "Webhooks restored from storage");
        restored
    }
}
