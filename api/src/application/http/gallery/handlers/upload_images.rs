use axum::{
    Extension,
    extract::{Multipart, State},
};
use larder_core::domain::gallery::{ports::GalleryService, value_objects::{ImageUpload, UploadSummary}};
use serde::Serialize;
use tracing::{error, warn};
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
pub struct UploadImagesResponse {
    pub data: UploadSummary,
}

#[utoipa::path(
    post,
    path = "/{session_id}/images",
    tag = "gallery",
    summary = "Upload images",
    description = "Adds photos to the session gallery via multipart form data (repeatable `images` field). Uploads are normalized to JPEG; byte-identical results are skipped as duplicates and undecodable files are reported as rejected.",
    responses(
        (status = 200, body = UploadImagesResponse),
        (status = 400, description = "No images in the request"),
        (status = 413, description = "Request body too large")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
)]
pub async fn upload_images(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
    mut multipart: Multipart,
) -> Result<Response<UploadImagesResponse>, ApiError> {
    let mut uploads = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();
        if name != "images" {
            continue;
        }

        let file_name = field.file_name().map(|s| s.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.is_empty() {
            warn!(file_name = ?file_name, "Empty image upload skipped");
            continue;
        }

        uploads.push(ImageUpload { file_name, data });
    }

    if uploads.is_empty() {
        return Err(ApiError::BadRequest(
            "Missing 'images' field in multipart form".to_string(),
        ));
    }

    let mut session = context.lock().await;
    let summary = state
        .service
        .add_images(&mut session, uploads)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UploadImagesResponse { data: summary }))
}
