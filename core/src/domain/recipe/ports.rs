use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::value_objects::{GenerateRecipesInput, RecipeBatch},
    session::entities::KitchenSession,
};

pub trait RecipeService: Send + Sync {
    /// Generates recipes from the selected shelf items, then removes those items from
    /// the shelf.
    fn generate_recipes(
        &self,
        session: &mut KitchenSession,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<RecipeBatch, CoreError>> + Send;

    fn export_recipes(&self, session: &KitchenSession) -> Result<Vec<u8>, CoreError>;
}
