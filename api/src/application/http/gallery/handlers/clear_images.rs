use axum::{Extension, extract::State};
use larder_core::domain::gallery::ports::GalleryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RemovedResponse {
    pub removed: usize,
}

#[utoipa::path(
    delete,
    path = "/{session_id}/images",
    tag = "gallery",
    summary = "Clear gallery",
    responses(
        (status = 200, body = RemovedResponse)
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
)]
pub async fn clear_images(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
) -> Result<Response<RemovedResponse>, ApiError> {
    let mut session = context.lock().await;
    let removed = state.service.clear_gallery(&mut session);

    Ok(Response::OK(RemovedResponse { removed }))
}
