use axum::extract::State;
use larder_core::domain::catalog::{entities::weekday_name, ports::CatalogService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScheduleDayResponse {
    pub day: String,
    pub recipes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScheduleResponse {
    pub data: Vec<ScheduleDayResponse>,
}

#[utoipa::path(
    get,
    path = "/schedule",
    tag = "catalog",
    summary = "Weekly schedule",
    description = "Two reference recipe names per weekday, Monday first.",
    responses(
        (status = 200, body = ScheduleResponse)
    ),
)]
pub async fn get_schedule(
    State(state): State<AppState>,
) -> Result<Response<ScheduleResponse>, ApiError> {
    let data = state
        .service
        .weekly_schedule()
        .iter()
        .map(|day| ScheduleDayResponse {
            day: weekday_name(day.day).to_string(),
            recipes: day.recipes.to_vec(),
        })
        .collect();

    Ok(Response::OK(ScheduleResponse { data }))
}
