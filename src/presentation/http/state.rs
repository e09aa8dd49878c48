use crate::{
    domain::{
        city::repository::CityRepository, temperature::repository::TemperatureRepository,
        webhook::repository::WebhookRepository,
    },
    infrastructure::webhooks::store::WebhookStore,
    workers::{notifier::NotifierHandle, webhook_actor::WebhookActorHandle},
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub city_repo: Arc<dyn CityRepository>,
    pub temperature_repo: Arc<dyn TemperatureRepository>,
    pub webhook_repo: Arc<dyn WebhookRepository>,
    /// Read-only view of live subscriptions; mutations go through `webhook_actor`.
    pub webhook_store: Arc<WebhookStore>,
    pub webhook_actor: WebhookActorHandle,
    pub notifier: NotifierHandle,
}
