use crate::domain::{
    shared::errors::DomainError,
    temperature::{entity::Temperature, repository::TemperatureRepository},
};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct SqlxTemperatureRepository {
    pub pool: PgPool,
}

impl SqlxTemperatureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemperatureRepository for SqlxTemperatureRepository {
    async fn create(
        &self,
        city_id: i64,
        max: i32,
        min: i32,
        timestamp: i64,
    ) -> Result<Temperature, DomainError> {
        sqlx::query_as::<_, Temperature>(
            r#"INSERT INTO temperatures (city_id, max, min, "timestamp") VALUES ($1, $2, $3, $4)
               RETURNING id, city_id, max, min, "timestamp""#,
        )
        .bind(city_id)
        .bind(max)
        .bind(min)
        .bind(timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                DomainError::NotFound(format!("city {}", city_id))
            }
            other => DomainError::InfrastructureError(other.to_string()),
        })
    }

    async fn find_since(&self, city_id: i64, since: i64) -> Result<Vec<Temperature>, DomainError> {
        sqlx::query_as::<_, Temperature>(
            r#"SELECT id, city_id, max, min, "timestamp" FROM temperatures
               WHERE city_id = $1 AND "timestamp" >= $2
               ORDER BY "timestamp" ASC"#,
        )
        .bind(city_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
