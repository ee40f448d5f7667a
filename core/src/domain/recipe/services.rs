use tracing::{info, instrument, warn};

use crate::domain::{
    common::{
        entities::{Notice, app_errors::CoreError},
        services::Service,
    },
    export::ports::DocumentExporter,
    identification::ports::LLMClient,
    recipe::{
        entities::GeneratedRecipe,
        ports::RecipeService,
        prompt::build_recipe_prompt,
        value_objects::{CuisinePreference, DietPreference, GenerateRecipesInput, RecipeBatch},
    },
    session::{entities::KitchenSession, ports::SessionRepository},
    shelf::entities::IngredientName,
};

pub const FALLBACK_RECIPE: &str = "Unable to generate recipe. Please try again.";
pub const MAX_RECIPES_PER_BATCH: u8 = 5;

/// Generates one recipe. A failed call yields the fallback text and a warning notice.
pub async fn generate_recipe<L: LLMClient>(
    client: &L,
    items: &[IngredientName],
    diet: DietPreference,
    cuisine: CuisinePreference,
) -> (GeneratedRecipe, Option<Notice>) {
    let prompt = build_recipe_prompt(items, diet, cuisine);

    match client.generate_with_text(prompt).await {
        Ok(text) => (GeneratedRecipe::new(text), None),
        Err(e) => {
            warn!("Recipe generation failed: {}", e);
            (
                GeneratedRecipe::fallback(FALLBACK_RECIPE),
                Some(Notice::warning(format!(
                    "An error occurred while generating the recipe: {}",
                    e
                ))),
            )
        }
    }
}

/// Calls [`generate_recipe`] `count` times, independently and in order.
pub async fn generate_many<L: LLMClient>(
    client: &L,
    items: &[IngredientName],
    diet: DietPreference,
    cuisine: CuisinePreference,
    count: u8,
) -> Result<(Vec<GeneratedRecipe>, Vec<Notice>), CoreError> {
    if !(1..=MAX_RECIPES_PER_BATCH).contains(&count) {
        return Err(CoreError::Invalid(format!(
            "number of recipes must be between 1 and {}",
            MAX_RECIPES_PER_BATCH
        )));
    }

    let mut recipes = Vec::with_capacity(usize::from(count));
    let mut notices = Vec::new();

    for _ in 0..count {
        let (recipe, notice) = generate_recipe(client, items, diet, cuisine).await;
        recipes.push(recipe);
        notices.extend(notice);
    }

    Ok((recipes, notices))
}

impl<S, LLM, DE> RecipeService for Service<S, LLM, DE>
where
    S: SessionRepository,
    LLM: LLMClient,
    DE: DocumentExporter,
{
    #[instrument(skip(self, session), fields(session_id = %session.id, count = input.count))]
    async fn generate_recipes(
        &self,
        session: &mut KitchenSession,
        input: GenerateRecipesInput,
    ) -> Result<RecipeBatch, CoreError> {
        if session.shelf.is_empty() {
            return Err(CoreError::EmptyShelf);
        }
        if session.selected.is_empty() {
            return Err(CoreError::EmptySelection);
        }

        let selected = session.selected.clone();
        let (recipes, notices) = generate_many(
            self.llm_client.as_ref(),
            &selected,
            input.diet,
            input.cuisine,
            input.count,
        )
        .await?;

        let consumed: Vec<IngredientName> = selected
            .iter()
            .filter(|name| session.shelf.contains(name.as_str()))
            .cloned()
            .collect();
        session.shelf.consume(&consumed);
        session.selected.clear();
        session.recipes = recipes.clone();
        session.touch();

        info!(
            recipes = recipes.len(),
            failures = notices.len(),
            consumed = consumed.len(),
            "Recipes generated"
        );

        let shopping_links = selected
            .iter()
            .map(|name| self.shopping.link_for(name))
            .collect();

        Ok(RecipeBatch {
            recipes,
            consumed,
            shopping_links,
            notices,
        })
    }

    fn export_recipes(&self, session: &KitchenSession) -> Result<Vec<u8>, CoreError> {
        if session.recipes.is_empty() {
            return Err(CoreError::Invalid(
                "there are no recipes to export".to_string(),
            ));
        }

        self.document_exporter.export(&session.recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::entities::NoticeLevel;
    use crate::domain::common::test_support::{service_with, test_service};
    use crate::domain::export::ports::MockDocumentExporter;
    use crate::domain::identification::ports::MockLLMClient;
    use crate::infrastructure::session::InMemorySessionRepository;

    fn names(raw: &[&str]) -> Vec<IngredientName> {
        raw.iter().map(|n| IngredientName::parse(n).unwrap()).collect()
    }

    fn input(count: u8) -> GenerateRecipesInput {
        GenerateRecipesInput {
            diet: DietPreference::Vegan,
            cuisine: CuisinePreference::Any,
            count,
        }
    }

    /// Each call answers with a reply tagged by its call number.
    fn numbered_client(calls: usize) -> MockLLMClient {
        let mut client = MockLLMClient::new();
        let mut call = 0;
        client
            .expect_generate_with_text()
            .times(calls)
            .returning(move |_| {
                call += 1;
                let reply = format!("recipe from call {}", call);
                Box::pin(async move { Ok(reply) })
            });
        client
    }

    #[tokio::test]
    async fn test_generate_many_calls_independently() {
        let client = numbered_client(3);
        let (recipes, notices) = generate_many(
            &client,
            &names(&["Rice"]),
            DietPreference::None,
            CuisinePreference::Any,
            3,
        )
        .await
        .unwrap();

        assert_eq!(
            recipes.iter().map(|r| r.text.as_str()).collect::<Vec<_>>(),
            vec!["recipe from call 1", "recipe from call 2", "recipe from call 3"]
        );
        assert!(notices.is_empty());
    }

    #[tokio::test]
    async fn test_generate_many_rejects_out_of_range_count() {
        let client = numbered_client(0);
        for count in [0, 6] {
            let result = generate_many(
                &client,
                &names(&["Rice"]),
                DietPreference::None,
                CuisinePreference::Any,
                count,
            )
            .await;
            assert!(matches!(result, Err(CoreError::Invalid(_))));
        }
    }

    #[tokio::test]
    async fn test_generate_recipe_falls_back_on_failure() {
        let mut client = MockLLMClient::new();
        client
            .expect_generate_with_text()
            .times(1)
            .returning(|_| {
                Box::pin(async move {
                    Err(CoreError::ExternalServiceError("timeout".to_string()))
                })
            });

        let (recipe, notice) = generate_recipe(
            &client,
            &names(&["Rice"]),
            DietPreference::None,
            CuisinePreference::Any,
        )
        .await;

        assert_eq!(recipe.text, FALLBACK_RECIPE);
        assert!(recipe.fallback);
        let notice = notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.contains("timeout"));
    }

    #[tokio::test]
    async fn test_generate_recipes_consumes_selection() {
        let service = test_service(numbered_client(2));
        let mut session = KitchenSession::new();
        session.selected = names(&["Salt", "Pepper"]);

        let batch = service
            .generate_recipes(&mut session, input(2))
            .await
            .unwrap();

        assert_eq!(batch.recipes.len(), 2);
        assert_eq!(batch.consumed, names(&["Salt", "Pepper"]));
        assert_eq!(batch.shopping_links.len(), 2);
        assert_eq!(
            batch.shopping_links[1].url,
            "https://www.amazon.com/s?k=Pepper"
        );
        assert_eq!(session.recipes, batch.recipes);
        assert!(!session.shelf.contains("Salt"));
        assert!(!session.shelf.contains("Pepper"));
        assert!(session.shelf.contains("Garlic"));
        assert!(session.selected.is_empty());
    }

    #[tokio::test]
    async fn test_generate_recipes_sends_preferences() {
        let mut client = MockLLMClient::new();
        client
            .expect_generate_with_text()
            .withf(|prompt| {
                prompt.contains("Garlic") && prompt.contains("The recipe should be vegan.")
            })
            .times(1)
            .returning(|_| Box::pin(async move { Ok("Garlic soup".to_string()) }));
        let service = test_service(client);
        let mut session = KitchenSession::new();
        session.selected = names(&["Garlic"]);

        let batch = service
            .generate_recipes(&mut session, input(1))
            .await
            .unwrap();

        assert_eq!(batch.recipes[0].text, "Garlic soup");
    }

    #[tokio::test]
    async fn test_generate_recipes_requires_selection() {
        let service = test_service(numbered_client(0));
        let mut session = KitchenSession::new();

        let result = service.generate_recipes(&mut session, input(1)).await;
        assert_eq!(result, Err(CoreError::EmptySelection));

        session.shelf.clear();
        let result = service.generate_recipes(&mut session, input(1)).await;
        assert_eq!(result, Err(CoreError::EmptyShelf));
    }

    #[tokio::test]
    async fn test_export_requires_recipes() {
        let mut exporter = MockDocumentExporter::new();
        exporter
            .expect_export()
            .times(1)
            .returning(|recipes: &[GeneratedRecipe]| {
                Ok(recipes
                    .iter()
                    .map(|r| r.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
                    .into_bytes())
            });
        let service = service_with(
            InMemorySessionRepository::new(),
            MockLLMClient::new(),
            exporter,
        );
        let mut session = KitchenSession::new();
        assert!(service.export_recipes(&session).is_err());

        session.recipes = vec![GeneratedRecipe::new("Soup".to_string())];
        assert_eq!(service.export_recipes(&session).unwrap(), b"Soup".to_vec());
    }
}
