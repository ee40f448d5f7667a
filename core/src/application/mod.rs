use tracing::{info, warn};

use crate::{
    domain::{
        catalog::entities::RecipeCatalog,
        common::{LarderConfig, entities::app_errors::CoreError, services::Service},
    },
    infrastructure::{
        export::PdfRecipeExporter, llm::GeminiLLMClient, session::InMemorySessionRepository,
    },
};

pub type LarderService = Service<InMemorySessionRepository, GeminiLLMClient, PdfRecipeExporter>;

pub fn create_service(config: LarderConfig) -> Result<LarderService, CoreError> {
    let llm_client = GeminiLLMClient::new(config.llm.clone())?;

    let catalog = RecipeCatalog::builtin();
    for (day, name) in catalog.missing_references() {
        warn!(?day, recipe = %name, "Schedule references a recipe missing from the catalog");
    }
    info!(
        recipes = catalog.entries().len(),
        model = %config.llm.gemini_model,
        "Larder service initialized"
    );

    Ok(Service::new(
        config,
        InMemorySessionRepository::new(),
        llm_client,
        PdfRecipeExporter::new(),
        catalog,
    ))
}
