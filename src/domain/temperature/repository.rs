use super::entity::Temperature;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait TemperatureRepository: Send + Sync {
    async fn create(
        &self,
        city_id: i64,
        max: i32,
        min: i32,
        timestamp: i64,
    ) -> Result<Temperature, DomainError>;

    /// Readings for `city_id` recorded at or after `since` (epoch seconds).
    async fn find_since(&self, city_id: i64, since: i64) -> Result<Vec<Temperature>, DomainError>;
}
