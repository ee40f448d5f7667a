use axum::extract::State;
use larder_core::domain::catalog::{entities::CatalogEntry, ports::CatalogService};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct CatalogRecipesResponse {
    pub data: Vec<CatalogEntry>,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "catalog",
    summary = "List reference recipes",
    responses(
        (status = 200, body = CatalogRecipesResponse)
    ),
)]
pub async fn list_catalog_recipes(
    State(state): State<AppState>,
) -> Result<Response<CatalogRecipesResponse>, ApiError> {
    Ok(Response::OK(CatalogRecipesResponse {
        data: state.service.list_catalog_recipes().to_vec(),
    }))
}
