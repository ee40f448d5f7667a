use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    export::ports::DocumentExporter,
    identification::ports::LLMClient,
    session::{
        entities::KitchenSession,
        page::Page,
        ports::{SessionHandle, SessionRepository, SessionService},
    },
};

impl<S, LLM, DE> SessionService for Service<S, LLM, DE>
where
    S: SessionRepository,
    LLM: LLMClient,
    DE: DocumentExporter,
{
    #[instrument(skip(self))]
    async fn create_session(&self) -> Result<SessionHandle, CoreError> {
        let ttl = chrono::Duration::from_std(self.config.session.idle_ttl)
            .unwrap_or(chrono::Duration::MAX);
        let idle_since = Utc::now()
            .checked_sub_signed(ttl)
            .unwrap_or(chrono::DateTime::<Utc>::MIN_UTC);

        let purged = self.session_repository.purge_idle(idle_since).await?;
        if purged > 0 {
            info!(purged, "Dropped idle sessions");
        }

        let session = KitchenSession::new();
        let session_id = session.id;
        let handle = self.session_repository.insert(session).await?;

        info!(session_id = %session_id, "Session created");

        Ok(handle)
    }

    async fn get_session(&self, id: Uuid) -> Result<SessionHandle, CoreError> {
        self.session_repository
            .get(id)
            .await?
            .ok_or(CoreError::SessionNotFound)
    }

    #[instrument(skip(self))]
    async fn end_session(&self, id: Uuid) -> Result<(), CoreError> {
        if !self.session_repository.remove(id).await? {
            return Err(CoreError::SessionNotFound);
        }

        info!(session_id = %id, "Session ended");
        Ok(())
    }

    fn navigate(&self, session: &mut KitchenSession, target: Page) -> Result<Page, CoreError> {
        let session_id = session.id;
        let from = session.page;
        session.navigate(target).inspect_err(|e| {
            warn!(session_id = %session_id, from = ?from, to = ?target, "Navigation blocked: {}", e);
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;
    use mockall::Sequence;
    use tokio::sync::Mutex;

    use super::*;
    use crate::domain::common::test_support::{service_with, test_service};
    use crate::domain::export::ports::MockDocumentExporter;
    use crate::domain::identification::ports::MockLLMClient;
    use crate::domain::session::ports::MockSessionRepository;

    #[tokio::test]
    async fn test_create_session_purges_before_insert() {
        let mut repository = MockSessionRepository::new();
        let mut sequence = Sequence::new();
        repository
            .expect_purge_idle()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Box::pin(async move { Ok(2) }));
        repository
            .expect_insert()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|session| Box::pin(async move { Ok(Arc::new(Mutex::new(session))) }));
        let service = service_with(repository, MockLLMClient::new(), MockDocumentExporter::new());

        let handle = service.create_session().await.unwrap();
        assert_eq!(handle.lock().await.page, Page::Home);
    }

    #[tokio::test]
    async fn test_resolved_session_is_not_purged_by_new_session() {
        let service = test_service(MockLLMClient::new());
        let handle = service.create_session().await.unwrap();
        let id = {
            let mut session = handle.lock().await;
            session.last_active_at = Utc::now() - Duration::days(2);
            session.id
        };

        let in_flight = service.get_session(id).await.unwrap();
        service.create_session().await.unwrap();
        in_flight.lock().await.shelf.clear();

        let stored = service.get_session(id).await.unwrap();
        assert!(stored.lock().await.shelf.is_empty());
    }

    #[tokio::test]
    async fn test_idle_session_is_purged() {
        let service = test_service(MockLLMClient::new());
        let handle = service.create_session().await.unwrap();
        let id = {
            let mut session = handle.lock().await;
            session.last_active_at = Utc::now() - Duration::days(2);
            session.id
        };

        service.create_session().await.unwrap();

        assert_eq!(
            service.get_session(id).await.map(|_| ()),
            Err(CoreError::SessionNotFound)
        );
        assert_eq!(service.end_session(id).await, Err(CoreError::SessionNotFound));
    }
}
