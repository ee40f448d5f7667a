use axum::{
    Extension,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response as AxumResponse},
};
use larder_core::domain::gallery::{GALLERY_MIME_TYPE, ports::GalleryService};
use uuid::Uuid;

use crate::application::{
    http::server::{api_entities::api_error::ApiError, app_state::AppState},
    session_middleware::SessionContext,
};

#[utoipa::path(
    get,
    path = "/{session_id}/images/{image_id}",
    tag = "gallery",
    summary = "Download gallery image",
    description = "Returns the normalized JPEG bytes of one gallery image.",
    responses(
        (status = 200, description = "JPEG image", content_type = "image/jpeg"),
        (status = 404, description = "Image not found")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
        ("image_id" = Uuid, Path, description = "Image id"),
    ),
)]
pub async fn get_image(
    Path((_session_id, image_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
) -> Result<AxumResponse, ApiError> {
    let session = context.lock().await;
    let image = state
        .service
        .get_image(&session, image_id)
        .map_err(ApiError::from)?;

    Ok(([(header::CONTENT_TYPE, GALLERY_MIME_TYPE)], image.data.clone()).into_response())
}
