use crate::domain::{
    shared::errors::DomainError,
    webhook::{entity::Webhook, repository::WebhookRepository},
};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct SqlxWebhookRepository {
    pub pool: PgPool,
}

impl SqlxWebhookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WebhookRepository for SqlxWebhookRepository {
    async fn create(&self, city_id: i64, callback_url: &str) -> Result<Webhook, DomainError> {
        sqlx::query_as::<_, Webhook>(
            "INSERT INTO webhooks (city_id, callback_url) VALUES ($1, $2)
             RETURNING id, city_id, callback_url",
        )
        .bind(city_id)
        .bind(callback_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<Webhook, DomainError> {
        sqlx::query_as::<_, Webhook>(
            "DELETE FROM webhooks WHERE id = $1 RETURNING id, city_id, callback_url",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
        .ok_or_else(|| DomainError::NotFound(format!("webhook {}", id)))
    }

    async fn find_all(&self) -> Result<Vec<Webhook>, DomainError> {
        sqlx::query_as::<_, Webhook>("SELECT id, city_id, callback_url FROM webhooks ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
