use std::time::Duration;

use bytes::Bytes;

use crate::domain::{
    catalog::entities::RecipeCatalog,
    common::{LLMConfig, LarderConfig, SessionConfig, ShoppingConfig, services::Service},
    export::ports::MockDocumentExporter,
    gallery::entities::GalleryImage,
    identification::ports::MockLLMClient,
    session::ports::SessionRepository,
    shelf::value_objects::ShelfThresholds,
};
use crate::infrastructure::session::InMemorySessionRepository;

pub type TestService<S = InMemorySessionRepository> =
    Service<S, MockLLMClient, MockDocumentExporter>;

pub fn test_config() -> LarderConfig {
    LarderConfig {
        llm: LLMConfig {
            gemini_api_key: "test".to_string(),
            gemini_model: "gemini-test".to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            request_timeout: Duration::from_secs(1),
            max_retries: 0,
        },
        shelf: ShelfThresholds::default(),
        session: SessionConfig {
            idle_ttl: Duration::from_secs(3600),
        },
        shopping: ShoppingConfig::default(),
    }
}

pub fn service_with<S: SessionRepository>(
    session_repository: S,
    llm_client: MockLLMClient,
    document_exporter: MockDocumentExporter,
) -> TestService<S> {
    Service::new(
        test_config(),
        session_repository,
        llm_client,
        document_exporter,
        RecipeCatalog::builtin(),
    )
}

/// Service over an in-memory session store. Mocks without expectations panic when called.
pub fn test_service(llm_client: MockLLMClient) -> TestService {
    service_with(
        InMemorySessionRepository::new(),
        llm_client,
        MockDocumentExporter::new(),
    )
}

/// Image whose single data byte is `seed`, so mocks can answer per image.
pub fn gallery_image(seed: u8) -> GalleryImage {
    GalleryImage::new(format!("hash-{}", seed), Bytes::from(vec![seed]), 1, 1)
}
