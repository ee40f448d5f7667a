use axum::{
    Extension,
    extract::{Path, State},
};
use larder_core::domain::shelf::ports::ShelfService;
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
pub struct RemoveShelfItemResponse {
    pub ingredient: String,
    pub removed: bool,
}

#[utoipa::path(
    delete,
    path = "/{session_id}/shelf/items/{ingredient}",
    tag = "shelf",
    summary = "Remove from shelf",
    responses(
        (status = 200, body = RemoveShelfItemResponse, description = "`removed` is false when the item was not on the shelf")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
        ("ingredient" = String, Path, description = "Item name, exact match after trimming"),
    ),
)]
pub async fn remove_shelf_item(
    Path((_session_id, ingredient)): Path<(Uuid, String)>,
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
) -> Result<Response<RemoveShelfItemResponse>, ApiError> {
    let mut session = context.lock().await;
    let removed = state.service.remove_from_shelf(&mut session, &ingredient);

    Ok(Response::OK(RemoveShelfItemResponse {
        ingredient: ingredient.trim().to_string(),
        removed,
    }))
}
