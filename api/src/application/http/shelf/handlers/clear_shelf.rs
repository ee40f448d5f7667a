use axum::{Extension, extract::State};
use larder_core::domain::shelf::ports::ShelfService;
use uuid::Uuid;

use crate::application::{
    http::{
        gallery::handlers::clear_images::RemovedResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    delete,
    path = "/{session_id}/shelf",
    tag = "shelf",
    summary = "Clear shelf",
    description = "Removes every item, staples included, and empties the selection.",
    responses(
        (status = 200, body = RemovedResponse)
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
)]
pub async fn clear_shelf(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
) -> Result<Response<RemovedResponse>, ApiError> {
    let mut session = context.lock().await;
    let removed = state.service.clear_shelf(&mut session);

    Ok(Response::OK(RemovedResponse { removed }))
}
