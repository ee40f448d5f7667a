use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_session::{__path_create_session, create_session},
    delete_session::{__path_delete_session, delete_session},
    get_page::{__path_get_page, get_page},
    get_session::{__path_get_session, get_session},
    navigate::{__path_navigate, navigate},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(create_session, get_session, delete_session, get_page, navigate))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    let scoped = Router::new()
        .route(
            &format!("{}/sessions/{{session_id}}", state.args.server.root_path),
            get(get_session).delete(delete_session),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/page", state.args.server.root_path),
            get(get_page).put(navigate),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .route(
            &format!("{}/sessions", state.args.server.root_path),
            post(create_session),
        )
        .merge(scoped)
}
