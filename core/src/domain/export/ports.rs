use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::GeneratedRecipe};

/// Renders generated recipes into a downloadable document.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentExporter: Send + Sync {
    /// One labeled section per recipe, in order.
    fn export(&self, recipes: &[GeneratedRecipe]) -> Result<Vec<u8>, CoreError>;

    fn content_type(&self) -> &'static str;

    fn file_name(&self) -> &'static str;
}
