use std::collections::BTreeSet;

use tracing::{info, instrument, warn};

use crate::domain::{
    common::{
        entities::{Notice, app_errors::CoreError},
        services::Service,
    },
    export::ports::DocumentExporter,
    gallery::entities::GalleryImage,
    identification::{
        helpers::parse_item_list,
        ports::{IdentificationService, LLMClient},
        value_objects::IdentificationOutcome,
    },
    session::{entities::KitchenSession, ports::SessionRepository},
    shelf::entities::IngredientName,
};

pub const IDENTIFY_INSTRUCTION: &str = "List all the food items you can see in this image. Provide the list in a comma-separated format.";

/// Asks the model for the items in each image, one image at a time.
///
/// A failed image is reported in the returned notices and contributes nothing.
pub async fn identify_items<L: LLMClient>(
    client: &L,
    images: &[GalleryImage],
) -> (BTreeSet<IngredientName>, Vec<Notice>) {
    let mut items = BTreeSet::new();
    let mut notices = Vec::new();

    for (index, image) in images.iter().enumerate() {
        match client
            .generate_with_image(IDENTIFY_INSTRUCTION.to_string(), image.data.clone())
            .await
        {
            Ok(reply) => items.extend(parse_item_list(&reply)),
            Err(e) => {
                warn!(image_id = %image.id, "Item identification failed: {}", e);
                notices.push(Notice::warning(format!(
                    "An error occurred while identifying items in image {}: {}",
                    index + 1,
                    e
                )));
            }
        }
    }

    (items, notices)
}

impl<S, LLM, DE> IdentificationService for Service<S, LLM, DE>
where
    S: SessionRepository,
    LLM: LLMClient,
    DE: DocumentExporter,
{
    #[instrument(skip(self, session), fields(session_id = %session.id, images = session.gallery.len()))]
    async fn identify_ingredients(
        &self,
        session: &mut KitchenSession,
    ) -> Result<IdentificationOutcome, CoreError> {
        if session.gallery.is_empty() {
            return Err(CoreError::EmptyGallery);
        }

        let (items, notices) = identify_items(self.llm_client.as_ref(), &session.gallery).await;

        session.ingredients = items.into_iter().collect();
        session.touch();

        info!(
            ingredients = session.ingredients.len(),
            failures = notices.len(),
            "Ingredients identified"
        );

        Ok(IdentificationOutcome {
            ingredients: session.ingredients.clone(),
            images_processed: session.gallery.len(),
            images_failed: notices.len(),
            notices,
        })
    }

    fn update_ingredients(
        &self,
        session: &mut KitchenSession,
        ingredients: Vec<String>,
    ) -> Vec<IngredientName> {
        session.ingredients = ingredients
            .iter()
            .filter_map(|raw| IngredientName::parse(raw).ok())
            .collect();
        session.touch();
        session.ingredients.clone()
    }
}
