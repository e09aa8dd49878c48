use crate::domain::{
    city::{
        entity::{City, NewCity},
        repository::CityRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct SqlxCityRepository {
    pub pool: PgPool,
}

impl SqlxCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for SqlxCityRepository {
    async fn create(&self, city: &NewCity) -> Result<City, DomainError> {
        sqlx::query_as::<_, City>(
            "INSERT INTO cities (name, latitude, longitude) VALUES ($1, $2, $3)
             RETURNING id, name, latitude, longitude",
        )
        .bind(&city.name)
        .bind(city.latitude)
        .bind(city.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn update(&self, id: i64, city: &NewCity) -> Result<City, DomainError> {
        sqlx::query_as::<_, City>(
            "UPDATE cities SET name = $1, latitude = $2, longitude = $3 WHERE id = $4
             RETURNING id, name, latitude, longitude",
        )
        .bind(&city.name)
        .bind(city.latitude)
        .bind(city.longitude)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
        .ok_or_else(|| DomainError::NotFound(format!("city {}", id)))
    }

    async fn delete(&self, id: i64) -> Result<City, DomainError> {
        sqlx::query_as::<_, City>(
            "DELETE FROM cities WHERE id = $1 RETURNING id, name, latitude, longitude",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
        .ok_or_else(|| DomainError::NotFound(format!("city {}", id)))
    }
}
