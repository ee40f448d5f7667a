use axum::Extension;
use larder_core::domain::gallery::entities::GalleryImage;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::api_entities::{api_error::ApiError, response::Response},
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ListImagesResponse {
    pub data: Vec<GalleryImage>,
}

#[utoipa::path(
    get,
    path = "/{session_id}/images",
    tag = "gallery",
    summary = "List gallery images",
    responses(
        (status = 200, body = ListImagesResponse)
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
)]
pub async fn list_images(
    Extension(context): Extension<SessionContext>,
) -> Result<Response<ListImagesResponse>, ApiError> {
    let session = context.lock().await;

    Ok(Response::OK(ListImagesResponse {
        data: session.gallery.clone(),
    }))
}
