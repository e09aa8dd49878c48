use serde::Deserialize;

/// Window of readings averaged into a forecast.
pub const FORECAST_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastRequest {
    pub city_id: i64,
}
