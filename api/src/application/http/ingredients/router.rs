use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_ingredients::{__path_get_ingredients, get_ingredients},
    identify_ingredients::{__path_identify_ingredients, identify_ingredients},
    update_ingredients::{__path_update_ingredients, update_ingredients},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(identify_ingredients, get_ingredients, update_ingredients))]
pub struct IngredientsApiDoc;

pub fn ingredients_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/sessions/{{session_id}}/ingredients",
                state.args.server.root_path
            ),
            get(get_ingredients).put(update_ingredients),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/ingredients/identify",
                state.args.server.root_path
            ),
            post(identify_ingredients),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
}
