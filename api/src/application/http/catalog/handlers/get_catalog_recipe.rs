use axum::extract::{Path, State};
use larder_core::domain::catalog::{entities::CatalogEntry, ports::CatalogService};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct CatalogRecipeResponse {
    pub data: CatalogEntry,
}

#[utoipa::path(
    get,
    path = "/recipes/{name}",
    tag = "catalog",
    summary = "Get reference recipe",
    responses(
        (status = 200, body = CatalogRecipeResponse),
        (status = 404, description = "Recipe not found")
    ),
    params(
        ("name" = String, Path, description = "Exact recipe name"),
    ),
)]
pub async fn get_catalog_recipe(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<CatalogRecipeResponse>, ApiError> {
    let entry = state
        .service
        .get_catalog_recipe(&name)
        .map_err(|_| ApiError::NotFound(format!("Recipe '{}' not found", name)))?;

    Ok(Response::OK(CatalogRecipeResponse {
        data: entry.clone(),
    }))
}
