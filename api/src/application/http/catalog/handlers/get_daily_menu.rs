use axum::extract::{Query, State};
use chrono::{Datelike, Local, Weekday};
use larder_core::domain::catalog::{entities::DailyMenu, ports::CatalogService};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    catalog::validators::DailyMenuParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct DailyMenuResponse {
    pub data: DailyMenu,
}

#[utoipa::path(
    get,
    path = "/today",
    tag = "catalog",
    summary = "Recipes of the day",
    description = "Resolves the two scheduled recipes for a weekday. A scheduled name missing from the catalog is reported in place instead of failing the request.",
    responses(
        (status = 200, body = DailyMenuResponse),
        (status = 400, description = "Unknown weekday")
    ),
    params(DailyMenuParams),
)]
pub async fn get_daily_menu(
    State(state): State<AppState>,
    Query(params): Query<DailyMenuParams>,
) -> Result<Response<DailyMenuResponse>, ApiError> {
    let day = match params.day {
        Some(raw) => raw
            .trim()
            .parse::<Weekday>()
            .map_err(|_| ApiError::BadRequest(format!("Unknown weekday: {}", raw)))?,
        None => Local::now().weekday(),
    };

    Ok(Response::OK(DailyMenuResponse {
        data: state.service.recipes_for_day(day),
    }))
}
