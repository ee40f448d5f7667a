use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    add_shelf_item::{__path_add_shelf_item, add_shelf_item},
    clear_shelf::{__path_clear_shelf, clear_shelf},
    get_shelf::{__path_get_shelf, get_shelf},
    remove_shelf_item::{__path_remove_shelf_item, remove_shelf_item},
    select_items::{__path_select_items, select_items},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(get_shelf, add_shelf_item, remove_shelf_item, clear_shelf, select_items))]
pub struct ShelfApiDoc;

pub fn shelf_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/sessions/{{session_id}}/shelf", state.args.server.root_path),
            get(get_shelf).delete(clear_shelf),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/shelf/items",
                state.args.server.root_path
            ),
            post(add_shelf_item),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/shelf/items/{{ingredient}}",
                state.args.server.root_path
            ),
            delete(remove_shelf_item),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/shelf/selection",
                state.args.server.root_path
            ),
            put(select_items),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
}
