use axum::Extension;
use larder_core::domain::recipe::entities::GeneratedRecipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::api_entities::{api_error::ApiError, response::Response},
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipesResponse {
    pub data: Vec<GeneratedRecipe>,
}

#[utoipa::path(
    get,
    path = "/{session_id}/recipes",
    tag = "recipe",
    summary = "Last generated recipes",
    responses(
        (status = 200, body = GetRecipesResponse)
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
)]
pub async fn get_recipes(
    Extension(context): Extension<SessionContext>,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let session = context.lock().await;

    Ok(Response::OK(GetRecipesResponse {
        data: session.recipes.clone(),
    }))
}
