use axum::{Extension, extract::State};
use larder_core::domain::session::ports::SessionService;
use uuid::Uuid;

use crate::application::{
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        session::{handlers::get_page::PageResponse, validators::NavigateValidator},
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    put,
    path = "/{session_id}/page",
    tag = "session",
    summary = "Navigate",
    description = "Moves the session to another page. Identifying ingredients needs uploaded images and generating recipes needs a selection from a non-empty shelf.",
    responses(
        (status = 200, body = PageResponse),
        (status = 409, description = "Page prerequisites not met")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
    request_body = NavigateValidator
)]
pub async fn navigate(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<NavigateValidator>,
) -> Result<Response<PageResponse>, ApiError> {
    let mut session = context.lock().await;

    state
        .service
        .navigate(&mut session, payload.page)
        .map_err(ApiError::from)?;

    Ok(Response::OK(PageResponse::from(&*session)))
}
