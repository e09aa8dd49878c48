use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CreateTemperatureRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "Invalid city id"))]
    pub city_id: i64,
    #[serde(default)]
    pub max: i32,
    #[serde(default)]
    pub min: i32,
}
