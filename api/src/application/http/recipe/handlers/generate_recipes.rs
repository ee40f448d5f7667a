use axum::{Extension, extract::State};
use larder_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{GenerateRecipesInput, RecipeBatch},
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::{
        recipe::validators::GenerateRecipesValidator,
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

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GenerateRecipesResponse {
    pub data: RecipeBatch,
}

#[utoipa::path(
    post,
    path = "/{session_id}/recipes",
    tag = "recipe",
    summary = "Generate recipes",
    description = "Generates recipes from the selected shelf items with the given dietary and cuisine preferences, then removes the selected items from the shelf. A failed generation yields a fallback recipe and a warning notice.",
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 400, description = "Shelf or selection is empty")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
    request_body = GenerateRecipesValidator
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<GenerateRecipesValidator>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let mut session = context.lock().await;
    let batch = state
        .service
        .generate_recipes(
            &mut session,
            GenerateRecipesInput {
                diet: payload.diet,
                cuisine: payload.cuisine,
                count: payload.count,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse { data: batch }))
}
