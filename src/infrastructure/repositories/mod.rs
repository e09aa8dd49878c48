pub mod sqlx_city_repository;
pub mod sqlx_temperature_repository;
pub mod sqlx_webhook_repository;
