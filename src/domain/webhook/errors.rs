use thiserror::Error;

/// Failures of the webhook registry and notification pipeline.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Invalid webhook")]
    InvalidWebhook,

    #[error("Webhook {0} not found")]
    NotFound(i64),

    #[error("Missing fields in temperature event")]
    InvalidTemperatureEvent,

    #[error("Delivery to {url} failed: {reason}")]
    DeliveryFailed { url: String, reason: String },

    #[error("Webhook storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("{0} queue is closed")]
    QueueClosed(&'static str),
}
