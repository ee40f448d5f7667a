use axum::{Extension, extract::State};
use larder_core::domain::shelf::ports::ShelfService;
use uuid::Uuid;

use crate::application::{
    http::{
        ingredients::handlers::get_ingredients::IngredientsResponse,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        shelf::validators::SelectItemsValidator,
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    put,
    path = "/{session_id}/shelf/selection",
    tag = "shelf",
    summary = "Select items for recipes",
    description = "Replaces the set of shelf items used for the next recipe generation. Every name must be on the shelf.",
    responses(
        (status = 200, body = IngredientsResponse),
        (status = 400, description = "Unknown item")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
    request_body = SelectItemsValidator
)]
pub async fn select_items(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<SelectItemsValidator>,
) -> Result<Response<IngredientsResponse>, ApiError> {
    let mut session = context.lock().await;
    let selected = state
        .service
        .select_items(&mut session, payload.ingredients)
        .map_err(ApiError::from)?;

    Ok(Response::OK(IngredientsResponse { data: selected }))
}
