use axum::{Extension, extract::State};
use chrono::Local;
use larder_core::domain::shelf::{
    entities::ShelfItem, ports::ShelfService, value_objects::AddShelfItemInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
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
        shelf::validators::AddShelfItemValidator,
    },
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ShelfItemResponse {
    pub data: ShelfItem,
}

#[utoipa::path(
    post,
    path = "/{session_id}/shelf/items",
    tag = "shelf",
    summary = "Add to shelf",
    description = "Adds an item to the shelf. An existing item with the same name has the quantity added and its expiry replaced.",
    responses(
        (status = 200, body = ShelfItemResponse),
        (status = 400, description = "Invalid item")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
    request_body = AddShelfItemValidator
)]
pub async fn add_shelf_item(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<AddShelfItemValidator>,
) -> Result<Response<ShelfItemResponse>, ApiError> {
    let mut session = context.lock().await;
    let item = state
        .service
        .add_to_shelf(
            &mut session,
            AddShelfItemInput {
                ingredient: payload.ingredient,
                quantity: payload.quantity,
                expiry: payload.expiry,
            },
            Local::now().date_naive(),
        )
        .map_err(ApiError::from)?;

    Ok(Response::OK(ShelfItemResponse { data: item }))
}
