use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AddShelfItemValidator {
    #[validate(length(
        min = 1,
        max = 100,
        message = "ingredient must be between 1 and 100 characters"
    ))]
    pub ingredient: String,
    #[validate(range(min = 1, max = 10000, message = "quantity must be between 1 and 10000"))]
    pub quantity: u32,
    /// Defaults to a week from today when omitted.
    pub expiry: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SelectItemsValidator {
    pub ingredients: Vec<String>,
}
