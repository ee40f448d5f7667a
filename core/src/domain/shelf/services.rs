use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::domain::{
    common::{
        entities::{Notice, app_errors::CoreError},
        services::Service,
    },
    export::ports::DocumentExporter,
    identification::ports::LLMClient,
    session::{entities::KitchenSession, ports::SessionRepository},
    shelf::{
        entities::{IngredientName, ShelfItem},
        ports::ShelfService,
        value_objects::{AddShelfItemInput, ShelfEntry, ShelfFlag, ShelfView},
    },
};

fn flag_notice(item: &ShelfItem, flag: ShelfFlag) -> Notice {
    let expiry = item
        .expiry
        .map(|date| date.to_string())
        .unwrap_or_default();

    match flag {
        ShelfFlag::LowQuantity => Notice::warning(format!(
            "Low quantity for {}: only {} left!",
            item.ingredient, item.quantity
        )),
        ShelfFlag::Expired => Notice::error(format!(
            "{} has expired (expired on {}).",
            item.ingredient, expiry
        )),
        ShelfFlag::ExpiringSoon => Notice::warning(format!(
            "{} is expiring soon (expiry: {}).",
            item.ingredient, expiry
        )),
    }
}

impl<S, LLM, DE> ShelfService for Service<S, LLM, DE>
where
    S: SessionRepository,
    LLM: LLMClient,
    DE: DocumentExporter,
{
    fn view_shelf(&self, session: &mut KitchenSession, today: NaiveDate) -> ShelfView {
        if session.shelf.is_empty() {
            return ShelfView {
                entries: Vec::new(),
                notices: vec![Notice::warning(
                    "Your shelf is empty. Add items from the Identify Ingredients page.",
                )],
            };
        }

        let flagged = session.shelf.flag(today, &self.config.shelf);
        session.touch();

        let mut notices = Vec::new();
        let entries = flagged
            .into_iter()
            .map(|(item, flags)| {
                notices.extend(flags.iter().map(|flag| flag_notice(&item, *flag)));
                ShelfEntry {
                    shopping_url: self.shopping.build_search_url(item.ingredient.as_str()),
                    item,
                    flags,
                }
            })
            .collect();

        ShelfView { entries, notices }
    }

    #[instrument(skip(self, session), fields(session_id = %session.id))]
    fn add_to_shelf(
        &self,
        session: &mut KitchenSession,
        input: AddShelfItemInput,
        today: NaiveDate,
    ) -> Result<ShelfItem, CoreError> {
        let ingredient = IngredientName::parse(&input.ingredient)?;
        let expiry = input
            .expiry
            .unwrap_or_else(|| self.config.shelf.default_expiry(today));

        let item = session
            .shelf
            .add_or_merge(ingredient, input.quantity, expiry)?
            .clone();
        session.touch();

        info!(
            ingredient = %item.ingredient,
            quantity = item.quantity,
            expiry = %expiry,
            "Added to shelf"
        );

        Ok(item)
    }

    fn remove_from_shelf(&self, session: &mut KitchenSession, ingredient: &str) -> bool {
        let Ok(name) = IngredientName::parse(ingredient) else {
            return false;
        };

        let removed = session.shelf.remove(name.as_str());
        if removed {
            session.selected.retain(|selected| selected != &name);
            debug!(session_id = %session.id, ingredient = %name, "Removed from shelf");
        }
        session.touch();
        removed
    }

    fn clear_shelf(&self, session: &mut KitchenSession) -> usize {
        let removed = session.shelf.len();
        session.shelf.clear();
        session.selected.clear();
        session.touch();
        removed
    }

    fn select_items(
        &self,
        session: &mut KitchenSession,
        ingredients: Vec<String>,
    ) -> Result<Vec<IngredientName>, CoreError> {
        let mut selected: Vec<IngredientName> = Vec::with_capacity(ingredients.len());

        for raw in &ingredients {
            let name = IngredientName::parse(raw)?;
            if !session.shelf.contains(name.as_str()) {
                return Err(CoreError::Invalid(format!("{} is not on the shelf", name)));
            }
            if !selected.contains(&name) {
                selected.push(name);
            }
        }

        session.selected = selected.clone();
        session.touch();
        Ok(selected)
    }
}
