use super::entity::Temperature;
use crate::domain::webhook::errors::WebhookError;
use serde::{Deserialize, Serialize};

/// A freshly persisted reading, handed to the notifier exactly once.
///
/// The serialized form is the payload POSTed to subscribers. The capitalised
/// `Timestamp` key is part of the published wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureEvent {
    pub city_id: i64,
    pub max: i32,
    pub min: i32,
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,
}

impl TemperatureEvent {
    pub fn validate(&self) -> Result<(), WebhookError> {
        if self.city_id == 0 || self.timestamp == 0 {
            return Err(WebhookError::InvalidTemperatureEvent);
        }
        Ok(())
    }
}

impl From<&Temperature> for TemperatureEvent {
    fn from(t: &Temperature) -> Self {
        Self {
            city_id: t.city_id,
            max: t.max,
            min: t.min,
            timestamp: t.timestamp,
        }
    }
}
