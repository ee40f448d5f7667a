use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError,
    identification::value_objects::IdentificationOutcome,
    session::entities::KitchenSession,
    shelf::entities::IngredientName,
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one JPEG image with an instruction and returns the model's text reply.
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Bytes,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait IdentificationService: Send + Sync {
    /// Runs every gallery image through the vision model and stores the result as the
    /// session's ingredient list.
    fn identify_ingredients(
        &self,
        session: &mut KitchenSession,
    ) -> impl Future<Output = Result<IdentificationOutcome, CoreError>> + Send;

    /// Replaces the ingredient list with a user-edited one. Blank entries are dropped.
    fn update_ingredients(
        &self,
        session: &mut KitchenSession,
        ingredients: Vec<String>,
    ) -> Vec<IngredientName>;
}
