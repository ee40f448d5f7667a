use std::sync::Arc;

use crate::domain::{
    catalog::entities::RecipeCatalog,
    common::LarderConfig,
    export::ports::DocumentExporter,
    identification::ports::LLMClient,
    session::ports::SessionRepository,
    shopping::ShoppingLinkBuilder,
};

/// Application service wiring the session store and external collaborators together.
pub struct Service<S, LLM, DE>
where
    S: SessionRepository,
    LLM: LLMClient,
    DE: DocumentExporter,
{
    pub(crate) config: Arc<LarderConfig>,
    pub(crate) session_repository: Arc<S>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) document_exporter: Arc<DE>,
    pub(crate) catalog: Arc<RecipeCatalog>,
    pub(crate) shopping: ShoppingLinkBuilder,
}

impl<S, LLM, DE> Service<S, LLM, DE>
where
    S: SessionRepository,
    LLM: LLMClient,
    DE: DocumentExporter,
{
    pub fn new(
        config: LarderConfig,
        session_repository: S,
        llm_client: LLM,
        document_exporter: DE,
        catalog: RecipeCatalog,
    ) -> Self {
        let shopping = ShoppingLinkBuilder::new(config.shopping.search_url_template.clone());

        Self {
            config: Arc::new(config),
            session_repository: Arc::new(session_repository),
            llm_client: Arc::new(llm_client),
            document_exporter: Arc::new(document_exporter),
            catalog: Arc::new(catalog),
            shopping,
        }
    }

    pub fn config(&self) -> &LarderConfig {
        &self.config
    }

    pub fn shopping(&self) -> &ShoppingLinkBuilder {
        &self.shopping
    }

    /// Content type and download file name of exported recipe documents.
    pub fn export_format(&self) -> (&'static str, &'static str) {
        (
            self.document_exporter.content_type(),
            self.document_exporter.file_name(),
        )
    }
}

impl<S, LLM, DE> Clone for Service<S, LLM, DE>
where
    S: SessionRepository,
    LLM: LLMClient,
    DE: DocumentExporter,
{
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            session_repository: Arc::clone(&self.session_repository),
            llm_client: Arc::clone(&self.llm_client),
            document_exporter: Arc::clone(&self.document_exporter),
            catalog: Arc::clone(&self.catalog),
            shopping: self.shopping.clone(),
        }
    }
}
