use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::application::manage_webhooks::{
    dto::CreateWebhookRequest, use_case::ManageWebhooksUseCase,
};
use crate::domain::webhook::entity::Webhook;
use crate::presentation::http::{errors::AppError, state::AppState};

fn use_case(state: &AppState) -> ManageWebhooksUseCase {
    ManageWebhooksUseCase::new(state.webhook_repo.clone(), state.webhook_actor.clone())
}

pub async fn create_webhook(
    State(state): State<AppState>,
    payload: Result<Json<CreateWebhookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Webhook>), AppError> {
    let Json(request) = payload?;

    let webhook = use_case(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(webhook)))
}

pub async fn delete_webhook(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, Json<Webhook>), AppError> {
    let Path(id) = id?;

    let webhook = use_case(&state).delete(id).await?;
    Ok((StatusCode::CREATED, Json(webhook)))
}
