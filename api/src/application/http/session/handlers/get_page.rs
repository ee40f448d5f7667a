use axum::Extension;
use larder_core::domain::session::{entities::KitchenSession, page::Page};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::api_entities::{api_error::ApiError, response::Response},
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PageLink {
    pub page: Page,
    pub title: String,
    /// False when the page's prerequisites are not met yet.
    pub available: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PageResponse {
    pub page: Page,
    pub title: String,
    pub navigation: Vec<PageLink>,
}

impl From<&KitchenSession> for PageResponse {
    fn from(session: &KitchenSession) -> Self {
        let navigation = Page::ALL
            .iter()
            .map(|page| PageLink {
                page: *page,
                title: page.title().to_string(),
                available: session.ensure_can_enter(*page).is_ok(),
            })
            .collect();

        Self {
            page: session.page,
            title: session.page.title().to_string(),
            navigation,
        }
    }
}

#[utoipa::path(
    get,
    path = "/{session_id}/page",
    tag = "session",
    summary = "Current page",
    description = "Returns the current page and the navigation bar with the availability of each page.",
    responses(
        (status = 200, body = PageResponse)
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session id"),
    ),
)]
pub async fn get_page(
    Extension(context): Extension<SessionContext>,
) -> Result<Response<PageResponse>, ApiError> {
    let session = context.lock().await;

    Ok(Response::OK(PageResponse::from(&*session)))
}
