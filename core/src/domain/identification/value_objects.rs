use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{common::entities::Notice, shelf::entities::IngredientName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct IdentificationOutcome {
    pub ingredients: Vec<IngredientName>,
    pub images_processed: usize,
    pub images_failed: usize,
    pub notices: Vec<Notice>,
}
