//! Fan-out of new temperature readings to subscribed callback URLs.
//!
//! Delivery is a single attempt per subscriber, performed sequentially in
//! registration order. The first transport failure ends the dispatch and
//! remaining subscribers for that event are skipped.

use crate::domain::{temperature::events::TemperatureEvent, webhook::errors::WebhookError};
use crate::infrastructure::webhooks::{store::WebhookStore, transport::WebhookTransport};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct Notifier {
    store: Arc<WebhookStore>,
    transport: Arc<dyn WebhookTransport>,
}

impl Notifier {
    pub fn new(store: Arc<WebhookStore>, transport: Arc<dyn WebhookTransport>) -> Self {
        Self { store, transport }
    }

    /// Delivers `event` to every subscriber of its city and returns how many were reached.
    pub async fn dispatch(&self, event: &TemperatureEvent) -> Result<usize, WebhookError> {
        event.validate()?;

        let urls = self.store.lookup(event.city_id);
        if urls.is_empty() {
            tracing::debug!(
                target: "webhook_delivery",
                city_id = event.city_id,
                "No webhooks registered for city"
            );
            return Ok(0);
        }

        let body = serde_json::to_vec(event).map_err(|e| WebhookError::DeliveryFailed {
            url: String::new(),
            reason: format!("payload serialization failed: {e}"),
        })?;

        tracing::info!(
            target: "webhook_delivery",
            city_id = event.city_id,
            subscriber_count = urls.len(),
            "Delivering temperature event"
        );

        for url in &urls {
            match self.transport.post(url, &body).await {
                Ok(status) => {
                    tracing::debug!(
                        target: "webhook_delivery",
                        url = %url,
                        status,
                        "Webhook delivered"
                    );
                }
                Err(e) => {
                    return Err(WebhookError::DeliveryFailed {
                        url: url.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(urls.len())
    }
}

/// Cloneable producer side of the notification queue.
#[derive(Clone)]
pub struct NotifierHandle {
    tx: mpsc::Sender<TemperatureEvent>,
}

impl NotifierHandle {
    pub async fn submit(&self, event: TemperatureEvent) -> Result<(), WebhookError> {
        self.tx
            .send(event)
            .await
            .map_err(|_| WebhookError::QueueClosed("temperature"))
    }
}

pub struct NotifierWorker {
    notifier: Notifier,
    rx: mpsc::Receiver<TemperatureEvent>,
}

impl NotifierWorker {
    pub fn new(notifier: Notifier, capacity: usize) -> (Self, NotifierHandle) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { notifier, rx }, NotifierHandle { tx })
    }

    pub async fn start(mut self) {
        tracing::info!(target: "webhook_delivery", "Notifier started");
        while let Some(event) = self.rx.recv().await {
            if let Err(e) = self.notifier.dispatch(&event).await {
                tracing::warn!(
                    target: "webhook_delivery",
                    city_id = event.city_id,
                    error = %e,
                    "Temperature event dispatch failed"
                );
            }
        }
        tracing::info!(target: "webhook_delivery", "Notifier stopped");
    }
}
