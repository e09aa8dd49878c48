use super::entity::{City, NewCity};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn create(&self, city: &NewCity) -> Result<City, DomainError>;
    async fn update(&self, id: i64, city: &NewCity) -> Result<City, DomainError>;
    /// Deletes the city and returns the row as it was before removal.
    async fn delete(&self, id: i64) -> Result<City, DomainError>;
}
