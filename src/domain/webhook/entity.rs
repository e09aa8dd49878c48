use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A subscription pairing a city with the URL notified on new readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Webhook {
    pub id: i64,
    pub city_id: i64,
    pub callback_url: String,
}

impl Webhook {
    pub fn new(id: i64, city_id: i64, callback_url: impl Into<String>) -> Self {
        Self {
            id,
            city_id,
            callback_url: callback_url.into(),
        }
    }

    /// Storage assigns the id, so a zero id means the record was never persisted.
    pub fn is_complete(&self) -> bool {
        self.id != 0 && self.city_id != 0 && !self.callback_url.is_empty()
    }
}
