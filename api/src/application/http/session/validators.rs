use larder_core::domain::session::page::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct NavigateValidator {
    pub page: Page,
}
