use super::dto::CreateTemperatureRequest;
use crate::domain::{
    shared::errors::DomainError,
    temperature::{entity::Temperature, events::TemperatureEvent, repository::TemperatureRepository},
    webhook::errors::WebhookError,
};
use crate::workers::notifier::NotifierHandle;
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

pub struct RecordTemperatureUseCase {
    repository: Arc<dyn TemperatureRepository>,
    notifier: NotifierHandle,
}

#[derive(Debug, thiserror::Error)]
pub enum RecordTemperatureError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

impl RecordTemperatureUseCase {
    pub fn new(repository: Arc<dyn TemperatureRepository>, notifier: NotifierHandle) -> Self {
        Self { repository, notifier }
    }

    /// Stamps the reading with the current time, stores it and queues the
    /// subscriber notification. Delivery happens after this returns.
    pub async fn execute(
        &self,
        request: CreateTemperatureRequest,
    ) -> Result<Temperature, RecordTemperatureError> {
        request.validate().map_err(DomainError::from)?;

        let temperature = self
            .repository
            .create(request.city_id, request.max, request.min, Utc::now().timestamp())
            .await?;
        self.notifier
            .submit(TemperatureEvent::from(&temperature))
            .await?;

        Ok(temperature)
    }
}
