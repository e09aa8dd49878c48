//! Single-writer actor owning every mutation of the [`WebhookStore`].
//!
//! HTTP handlers and the startup restorer never touch the store directly;
//! they enqueue a [`WebhookAction`] through a [`WebhookActorHandle`] and the
//! actor applies actions one at a time, in the order they were enqueued.

use crate::domain::webhook::{entity::Webhook, errors::WebhookError};
use crate::infrastructure::webhooks::store::WebhookStore;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookAction {
    Add(Webhook),
    Remove(Webhook),
}

/// Cloneable producer side of the actor queue.
#[derive(Clone)]
pub struct WebhookActorHandle {
    tx: mpsc::Sender<WebhookAction>,
}

impl WebhookActorHandle {
    /// Hands an action to the actor, waiting while the queue is full.
    pub async fn submit(&self, action: WebhookAction) -> Result<(), WebhookError> {
        self.tx
            .send(action)
            .await
            .map_err(|_| WebhookError::QueueClosed("webhook"))
    }
}

pub struct WebhookActor {
    store: Arc<WebhookStore>,
    rx: mpsc::Receiver<WebhookAction>,
}

impl WebhookActor {
    pub fn new(store: Arc<WebhookStore>, capacity: usize) -> (Self, WebhookActorHandle) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { store, rx }, WebhookActorHandle { tx })
    }

    /// Runs until every handle has been dropped. Bad actions are logged and skipped.
    pub async fn start(mut self) {
        tracing::info!(target: "webhook_registry", "Webhook actor started");
        while let Some(action) = self.rx.recv().await {
            if let Err(e) = self.apply(&action) {
                tracing::warn!(
                    target: "webhook_registry",
                    action = ?action,
                    error = %e,
                    "Webhook mutation rejected"
                );
            }
        }
        tracing::info!(target: "webhook_registry", "Webhook actor stopped");
    }

    fn apply(&self, action: &WebhookAction) -> Result<(), WebhookError> {
        match action {
            WebhookAction::Add(webhook) => {
                self.store.add(webhook.clone())?;
                tracing::debug!(
                    target: "webhook_registry",
                    webhook_id = webhook.id,
                    city_id = webhook.city_id,
                    "Webhook registered"
                );
            }
            WebhookAction::Remove(webhook) => {
                self.store.remove(webhook.id)?;
                tracing::debug!(
                    target: "webhook_registry",
                    webhook_id = webhook.id,
                    "Webhook unregistered"
                );
            }
        }
        Ok(())
    }
}
