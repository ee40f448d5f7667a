use axum::{Extension, extract::State};
use chrono::Local;
use larder_core::domain::shelf::{ports::ShelfService, value_objects::ShelfView};
use serde::Serialize;
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
pub struct ShelfResponse {
    pub data: ShelfView,
}

#[utoipa::path(
    get,
    path = "/{session_id}/shelf",
    tag = "shelf",
    summary = "View shelf",
    description = "Lists shelf items in the order they were added, with low-quantity and expiry flags, a retail search link per item, and notices for every flagged item.",
    responses(
        (status = 200, body = ShelfResponse)
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
)]
pub async fn get_shelf(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
) -> Result<Response<ShelfResponse>, ApiError> {
    let mut session = context.lock().await;
    let view = state
        .service
        .view_shelf(&mut session, Local::now().date_naive());

    Ok(Response::OK(ShelfResponse { data: view }))
}
