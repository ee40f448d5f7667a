use chrono::Weekday;
use tracing::error;

use crate::domain::{
    catalog::{
        entities::{CatalogEntry, DailyMenu, ScheduleDay, ScheduledRecipe},
        ports::CatalogService,
    },
    common::{entities::app_errors::CoreError, services::Service},
    export::ports::DocumentExporter,
    identification::ports::LLMClient,
    session::ports::SessionRepository,
};

impl<S, LLM, DE> CatalogService for Service<S, LLM, DE>
where
    S: SessionRepository,
    LLM: LLMClient,
    DE: DocumentExporter,
{
    fn list_catalog_recipes(&self) -> &[CatalogEntry] {
        self.catalog.entries()
    }

    fn get_catalog_recipe(&self, name: &str) -> Result<&CatalogEntry, CoreError> {
        self.catalog.get(name).ok_or(CoreError::NotFound)
    }

    fn weekly_schedule(&self) -> &[ScheduleDay] {
        self.catalog.schedule()
    }

    fn recipes_for_day(&self, day: Weekday) -> DailyMenu {
        let menu = self.catalog.menu_for(day);

        for recipe in &menu.recipes {
            if let ScheduledRecipe::Missing { name, .. } = recipe {
                error!(day = %menu.day, recipe = %name, "Scheduled recipe is missing from the catalog");
            }
        }

        menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_support::test_service;
    use crate::domain::identification::ports::MockLLMClient;

    #[test]
    fn test_get_catalog_recipe() {
        let service = test_service(MockLLMClient::new());

        let entry = service.get_catalog_recipe("Pumpkin Risotto").unwrap();
        assert_eq!(entry.recipe.cook_time, "30 minutes");
        assert_eq!(entry.recipe.instructions.len(), 6);

        assert_eq!(
            service.get_catalog_recipe("Pumpkin Pie"),
            Err(CoreError::NotFound)
        );
    }

    #[test]
    fn test_recipes_for_monday() {
        let service = test_service(MockLLMClient::new());
        let menu = service.recipes_for_day(Weekday::Mon);

        assert_eq!(menu.day, "Monday");
        let names: Vec<&str> = menu
            .recipes
            .iter()
            .filter_map(|r| match r {
                ScheduledRecipe::Available { name, .. } => Some(name.as_str()),
                ScheduledRecipe::Missing { .. } => None,
            })
            .collect();
        assert_eq!(
            names,
            vec![
                "Spicy Tomato Rice with Crispy Bread Crumbs",
                "Coconut Curry Rice with Toasted Almonds"
            ]
        );
    }
}
