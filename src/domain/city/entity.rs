use crate::domain::shared::errors::DomainError;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Attributes accepted when creating or replacing a city.
///
/// Missing coordinates deserialize to `0.0` and are rejected, matching the
/// wire behaviour existing clients rely on.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct NewCity {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Invalid name value"))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0, message = "Invalid latitude value"))]
    pub latitude: f64,
    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0, message = "Invalid longitude value"))]
    pub longitude: f64,
}

impl NewCity {
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()?;
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError("Invalid name value".into()));
        }
        if self.latitude == 0.0 {
            return Err(DomainError::ValidationError("Invalid latitude value".into()));
        }
        if self.longitude == 0.0 {
            return Err(DomainError::ValidationError("Invalid longitude value".into()));
        }
        Ok(())
    }
}
