use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_catalog_recipe::{__path_get_catalog_recipe, get_catalog_recipe},
    get_daily_menu::{__path_get_daily_menu, get_daily_menu},
    get_schedule::{__path_get_schedule, get_schedule},
    list_catalog_recipes::{__path_list_catalog_recipes, list_catalog_recipes},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_catalog_recipes, get_catalog_recipe, get_schedule, get_daily_menu))]
pub struct CatalogApiDoc;

pub fn catalog_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/catalog/recipes", state.args.server.root_path),
            get(list_catalog_recipes),
        )
        .route(
            &format!("{}/catalog/recipes/{{name}}", state.args.server.root_path),
            get(get_catalog_recipe),
        )
        .route(
            &format!("{}/catalog/schedule", state.args.server.root_path),
            get(get_schedule),
        )
        .route(
            &format!("{}/catalog/today", state.args.server.root_path),
            get(get_daily_menu),
        )
}
