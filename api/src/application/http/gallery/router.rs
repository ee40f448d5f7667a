use axum::{Router, extract::DefaultBodyLimit, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    clear_images::{__path_clear_images, clear_images},
    get_image::{__path_get_image, get_image},
    list_images::{__path_list_images, list_images},
    upload_images::{__path_upload_images, upload_images},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

/// Upper bound on one multipart upload request.
const MAX_UPLOAD_BODY: usize = 64 * 1024 * 1024; // 64 MB

#[derive(OpenApi)]
#[openapi(paths(upload_images, list_images, get_image, clear_images))]
pub struct GalleryApiDoc;

pub fn gallery_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/sessions/{{session_id}}/images",
                state.args.server.root_path
            ),
            get(list_images)
                .post(upload_images)
                .delete(clear_images)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY)),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/images/{{image_id}}",
                state.args.server.root_path
            ),
            get(get_image),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
}
