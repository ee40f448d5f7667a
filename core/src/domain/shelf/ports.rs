use chrono::NaiveDate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::entities::KitchenSession,
    shelf::{
        entities::{IngredientName, ShelfItem},
        value_objects::{AddShelfItemInput, ShelfView},
    },
};

pub trait ShelfService: Send + Sync {
    /// Lists the shelf with flags, shopping links and notices as of `today`.
    fn view_shelf(&self, session: &mut KitchenSession, today: NaiveDate) -> ShelfView;

    fn add_to_shelf(
        &self,
        session: &mut KitchenSession,
        input: AddShelfItemInput,
        today: NaiveDate,
    ) -> Result<ShelfItem, CoreError>;

    /// Removes the item with this name, ignoring surrounding whitespace. Returns false
    /// when nothing matched.
    fn remove_from_shelf(&self, session: &mut KitchenSession, ingredient: &str) -> bool;

    fn clear_shelf(&self, session: &mut KitchenSession) -> usize;

    /// Replaces the selection used for recipe generation. Every name must be on the shelf.
    fn select_items(
        &self,
        session: &mut KitchenSession,
        ingredients: Vec<String>,
    ) -> Result<Vec<IngredientName>, CoreError>;
}
