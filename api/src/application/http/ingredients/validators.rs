use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateIngredientsValidator {
    #[validate(length(max = 200, message = "at most 200 ingredients are allowed"))]
    pub ingredients: Vec<String>,
}
