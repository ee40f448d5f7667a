use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    export_recipes::{__path_export_recipes, export_recipes},
    generate_recipes::{__path_generate_recipes, generate_recipes},
    get_recipes::{__path_get_recipes, get_recipes},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(generate_recipes, get_recipes, export_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/sessions/{{session_id}}/recipes",
                state.args.server.root_path
            ),
            get(get_recipes).post(generate_recipes),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/recipes/export",
                state.args.server.root_path
            ),
            get(export_recipes),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
}
