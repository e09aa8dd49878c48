use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Temperature {
    pub id: i64,
    pub city_id: i64,
    pub max: i32,
    pub min: i32,
    /// Seconds since the Unix epoch, stamped by the server on creation.
    pub timestamp: i64,
}

/// Average of the readings recorded for a city over the forecast window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Forecast {
    pub city_id: i64,
    pub max: f64,
    pub min: f64,
    pub sample: i64,
}

impl Forecast {
    pub fn from_readings(city_id: i64, readings: &[Temperature]) -> Self {
        if readings.is_empty() {
            return Self {
                city_id,
                max: 0.0,
                min: 0.0,
                sample: 0,
            };
        }

        let total = readings.len() as f64;
        let (sum_max, sum_min) = readings.iter().fold((0i64, 0i64), |(max, min), t| {
            (max + i64::from(t.max), min + i64::from(t.min))
        });

        Self {
            city_id,
            max: sum_max as f64 / total,
            min: sum_min as f64 / total,
            sample: readings.len() as i64,
        }
    }
}
