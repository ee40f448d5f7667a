use axum::{Extension, extract::State};
use larder_core::domain::identification::{
    ports::IdentificationService, value_objects::IdentificationOutcome,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct IdentifyIngredientsResponse {
    pub data: IdentificationOutcome,
}

#[utoipa::path(
    post,
    path = "/{session_id}/ingredients/identify",
    tag = "ingredients",
    summary = "Identify ingredients",
    description = "Sends every gallery image to the vision model and replaces the session's ingredient list with the deduplicated result. Images the model fails on are skipped with a warning notice.",
    responses(
        (status = 200, body = IdentifyIngredientsResponse),
        (status = 400, description = "Gallery is empty")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
)]
pub async fn identify_ingredients(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
) -> Result<Response<IdentifyIngredientsResponse>, ApiError> {
    let mut session = context.lock().await;
    let outcome = state
        .service
        .identify_ingredients(&mut session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(IdentifyIngredientsResponse { data: outcome }))
}
