use super::dto::{FORECAST_WINDOW_HOURS, ForecastRequest};
use crate::domain::{
    shared::errors::DomainError,
    temperature::{entity::Forecast, repository::TemperatureRepository},
};
use chrono::{Duration, Utc};
use std::sync::Arc;

pub struct GetForecastUseCase {
    repository: Arc<dyn TemperatureRepository>,
}

impl GetForecastUseCase {
    pub fn new(repository: Arc<dyn TemperatureRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: ForecastRequest) -> Result<Forecast, DomainError> {
        let since = (Utc::now() - Duration::hours(FORECAST_WINDOW_HOURS)).timestamp();
        let readings = self.repository.find_since(request.city_id, since).await?;
        Ok(Forecast::from_readings(request.city_id, &readings))
    }
}
