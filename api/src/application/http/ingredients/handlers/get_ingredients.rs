use axum::Extension;
use larder_core::domain::shelf::entities::IngredientName;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::api_entities::{api_error::ApiError, response::Response},
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct IngredientsResponse {
    pub data: Vec<IngredientName>,
}

#[utoipa::path(
    get,
    path = "/{session_id}/ingredients",
    tag = "ingredients",
    summary = "Identified ingredients",
    responses(
        (status = 200, body = IngredientsResponse)
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
)]
pub async fn get_ingredients(
    Extension(context): Extension<SessionContext>,
) -> Result<Response<IngredientsResponse>, ApiError> {
    let session = context.lock().await;

    Ok(Response::OK(IngredientsResponse {
        data: session.ingredients.clone(),
    }))
}
