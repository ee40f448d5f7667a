use axum::{Extension, extract::State};
use larder_core::domain::identification::ports::IdentificationService;
use uuid::Uuid;

use crate::application::{
    http::{
        ingredients::{
            handlers::get_ingredients::IngredientsResponse,
            validators::UpdateIngredientsValidator,
        },
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    put,
    path = "/{session_id}/ingredients",
    tag = "ingredients",
    summary = "Edit ingredients",
    description = "Replaces the identified ingredient list with a user-corrected one. Blank entries are dropped.",
    responses(
        (status = 200, body = IngredientsResponse)
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
    request_body = UpdateIngredientsValidator
)]
pub async fn update_ingredients(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<UpdateIngredientsValidator>,
) -> Result<Response<IngredientsResponse>, ApiError> {
    let mut session = context.lock().await;
    let ingredients = state
        .service
        .update_ingredients(&mut session, payload.ingredients);

    Ok(Response::OK(IngredientsResponse { data: ingredients }))
}
