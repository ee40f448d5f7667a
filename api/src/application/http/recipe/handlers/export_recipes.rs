use axum::{
    Extension,
    extract::State,
    http::header,
    response::{IntoResponse, Response as AxumResponse},
};
use larder_core::domain::recipe::ports::RecipeService;
use tracing::info;
use uuid::Uuid;

use crate::application::{
    http::server::{api_entities::api_error::ApiError, app_state::AppState},
    session_middleware::SessionContext,
};

#[utoipa::path(
    get,
    path = "/{session_id}/recipes/export",
    tag = "recipe",
    summary = "Download recipes",
    description = "Renders the last generated recipes into a PDF with one section per recipe.",
    responses(
        (status = 200, description = "PDF document", content_type = "application/pdf"),
        (status = 400, description = "No recipes generated yet")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
)]
pub async fn export_recipes(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
) -> Result<AxumResponse, ApiError> {
    let session = context.lock().await;
    let document = state
        .service
        .export_recipes(&session)
        .map_err(ApiError::from)?;

    let (content_type, file_name) = state.service.export_format();
    info!(session_id = %context.session_id, size = document.len(), "Recipes exported");

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        document,
    )
        .into_response())
}
