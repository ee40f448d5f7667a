use axum::Extension;
use chrono::{DateTime, Utc};
use larder_core::domain::{
    session::{entities::KitchenSession, page::Page},
    shelf::entities::IngredientName,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::api_entities::{api_error::ApiError, response::Response},
    session_middleware::SessionContext,
};

/// Counts and cursor of a session, without the image payloads.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SessionSummary {
    pub id: Uuid,
    pub page: Page,
    pub image_count: usize,
    pub ingredient_count: usize,
    pub shelf_size: usize,
    pub selected: Vec<IngredientName>,
    pub recipe_count: usize,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}

impl From<&KitchenSession> for SessionSummary {
    fn from(session: &KitchenSession) -> Self {
        Self {
            id: session.id,
            page: session.page,
            image_count: session.gallery.len(),
            ingredient_count: session.ingredients.len(),
            shelf_size: session.shelf.len(),
            selected: session.selected.clone(),
            recipe_count: session.recipes.len(),
            created_at: session.created_at,
            last_active_at: session.last_active_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SessionResponse {
    pub data: SessionSummary,
}

#[utoipa::path(
    get,
    path = "/{session_id}",
    tag = "session",
    summary = "Get session",
    responses(
        (status = 200, body = SessionResponse),
        (status = 404, description = "Session not found")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
)]
pub async fn get_session(
    Extension(context): Extension<SessionContext>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = context.lock().await;

    Ok(Response::OK(SessionResponse {
        data: SessionSummary::from(&*session),
    }))
}
