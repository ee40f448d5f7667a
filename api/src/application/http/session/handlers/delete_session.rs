use axum::{Extension, extract::State};
use larder_core::domain::session::ports::SessionService;
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
pub struct DeleteSessionResponse {
    pub id: Uuid,
    pub ended: bool,
}

#[utoipa::path(
    delete,
    path = "/{session_id}",
    tag = "session",
    summary = "End session",
    description = "Discards the session and everything it holds.",
    responses(
        (status = 200, body = DeleteSessionResponse),
        (status = 404, description = "Session not found")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
)]
pub async fn delete_session(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
) -> Result<Response<DeleteSessionResponse>, ApiError> {
    // Wait for in-flight requests on this session to finish first.
    let _session = context.session.lock().await;

    state
        .service
        .end_session(context.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteSessionResponse {
        id: context.session_id,
        ended: true,
    }))
}
