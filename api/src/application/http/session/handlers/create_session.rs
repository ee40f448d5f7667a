use axum::extract::State;
use larder_core::domain::session::ports::SessionService;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::handlers::get_session::{SessionResponse, SessionSummary},
};

#[utoipa::path(
    post,
    path = "",
    tag = "session",
    summary = "Create session",
    description = "Starts a new kitchen session on the home page with a shelf seeded with pantry staples.",
    responses(
        (status = 201, body = SessionResponse)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let handle = state
        .service
        .create_session()
        .await
        .map_err(ApiError::from)?;
    let session = handle.lock().await;

    Ok(Response::Created(SessionResponse {
        data: SessionSummary::from(&*session),
    }))
}
