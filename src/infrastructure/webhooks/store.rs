//! In-memory registry of live webhook subscriptions.
//!
//! The store is the single source of truth for "who is subscribed to city X".
//! Mutations are crate-private: only the webhook actor applies them, which keeps
//! every add/remove serialized through one queue. Reads are open to anyone and
//! hold the lock only long enough to copy matching entries out.

use crate::domain::webhook::{entity::Webhook, errors::WebhookError};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct WebhookStore {
    webhooks: Mutex<Vec<Webhook>>,
}

impl WebhookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subscription. Duplicate ids are accepted as-is.
    pub(crate) fn add(&self, webhook: Webhook) -> Result<(), WebhookError> {
        if !webhook.is_complete() {
            return Err(WebhookError::InvalidWebhook);
        }
        self.lock().push(webhook);
        Ok(())
    }

    /// Removes a single entry with the given id.
    ///
    /// When the id appears more than once, the last occurrence is the one removed.
    pub(crate) fn remove(&self, id: i64) -> Result<Webhook, WebhookError> {
        let mut webhooks = self.lock();
        let index = webhooks
            .iter()
            .rposition(|hook| hook.id == id)
            .ok_or(WebhookError::NotFound(id))?;
        Ok(webhooks.remove(index))
    }

    /// Callback URLs subscribed to `city_id`, in insertion order.
    pub fn lookup(&self, city_id: i64) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|hook| hook.city_id == city_id)
            .map(|hook| hook.callback_url.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn snapshot(&self) -> Vec<Webhook> {
        self.lock().clone()
    }

    // A panic while holding the guard cannot leave the Vec half-updated,
    // so a poisoned lock is still safe to read through.
    fn lock(&self) -> MutexGuard<'_, Vec<Webhook>> {
        self.webhooks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
