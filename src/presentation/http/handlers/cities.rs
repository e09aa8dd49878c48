use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::domain::city::entity::{City, NewCity};
use crate::presentation::http::{errors::AppError, state::AppState};

// Existing clients expect 201 from every city mutation, including PATCH and DELETE.

pub async fn create_city(
    State(state): State<AppState>,
    payload: Result<Json<NewCity>, JsonRejection>,
) -> Result<(StatusCode, Json<City>), AppError> {
    let Json(city) = payload?;
    city.check()?;

    let created = state.city_repo.create(&city).await?;
    tracing::info!(city_id = created.id, "City created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_city(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NewCity>, JsonRejection>,
) -> Result<(StatusCode, Json<City>), AppError> {
    let Path(id) = id?;
    let Json(city) = payload?;
    city.check()?;

    let updated = state.city_repo.update(id, &city).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

pub async fn delete_city(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, Json<City>), AppError> {
    let Path(id) = id?;

    let deleted = state.city_repo.delete(id).await?;
    tracing::info!(city_id = deleted.id, "City deleted");
    Ok((StatusCode::CREATED, Json(deleted)))
}
