use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::application::{
    get_forecast::{dto::ForecastRequest, use_case::GetForecastUseCase},
    record_temperature::{dto::CreateTemperatureRequest, use_case::RecordTemperatureUseCase},
};
use crate::domain::temperature::entity::{Forecast, Temperature};
use crate::presentation::http::{errors::AppError, state::AppState};

/// Stores a reading and queues subscriber notification.
///
/// The response is sent once the reading is persisted and handed to the
/// notifier; delivery outcomes never reach this caller.
pub async fn create_temperature(
    State(state): State<AppState>,
    payload: Result<Json<CreateTemperatureRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Temperature>), AppError> {
    let Json(request) = payload?;

    let temperature =
        RecordTemperatureUseCase::new(state.temperature_repo.clone(), state.notifier.clone())
            .execute(request)
            .await?;
    Ok((StatusCode::CREATED, Json(temperature)))
}

pub async fn get_forecast(
    State(state): State<AppState>,
    city_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Forecast>, AppError> {
    let Path(city_id) = city_id?;

    let forecast = GetForecastUseCase::new(state.temperature_repo.clone())
        .execute(ForecastRequest { city_id })
        .await?;
    Ok(Json(forecast))
}
