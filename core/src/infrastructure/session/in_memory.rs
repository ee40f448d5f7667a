use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{
        entities::KitchenSession,
        ports::{SessionHandle, SessionRepository},
    },
};

/// Process-local session store. Sessions are lost on restart.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: KitchenSession) -> Result<SessionHandle, CoreError> {
        let id = session.id;
        let handle = Arc::new(Mutex::new(session));

        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&id) {
            return Err(CoreError::InternalServerError);
        }
        sessions.insert(id, Arc::clone(&handle));

        Ok(handle)
    }

    async fn get(&self, id: Uuid) -> Result<Option<SessionHandle>, CoreError> {
        let Some(handle) = self.sessions.read().await.get(&id).cloned() else {
            return Ok(None);
        };

        handle.lock().await.touch();

        // A purge may have dropped the session while we waited for its lock.
        let live = self
            .sessions
            .read()
            .await
            .get(&id)
            .is_some_and(|stored| Arc::ptr_eq(stored, &handle));

        Ok(live.then_some(handle))
    }

    async fn remove(&self, id: Uuid) -> Result<bool, CoreError> {
        Ok(self.sessions.write().await.remove(&id).is_some())
    }

    async fn purge_idle(&self, idle_since: DateTime<Utc>) -> Result<usize, CoreError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => session.last_active_at >= idle_since,
            Err(_) => true,
        });

        let purged = before - sessions.len();
        if purged > 0 {
            debug!(purged, remaining = sessions.len(), "Purged idle sessions");
        }

        Ok(purged)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let repository = InMemorySessionRepository::new();
        let session = KitchenSession::new();
        let id = session.id;

        repository.insert(session).await.unwrap();
        assert!(repository.get(id).await.unwrap().is_some());

        assert!(repository.remove(id).await.unwrap());
        assert!(!repository.remove(id).await.unwrap());
        assert!(repository.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_purge_idle_keeps_recent_and_locked_sessions() {
        let repository = InMemorySessionRepository::new();

        let mut stale = KitchenSession::new();
        stale.last_active_at = Utc::now() - Duration::hours(5);
        let stale_id = stale.id;

        let mut busy = KitchenSession::new();
        busy.last_active_at = Utc::now() - Duration::hours(5);
        let busy_id = busy.id;

        let fresh = KitchenSession::new();
        let fresh_id = fresh.id;

        repository.insert(stale).await.unwrap();
        let busy_handle = repository.insert(busy).await.unwrap();
        repository.insert(fresh).await.unwrap();

        let guard = busy_handle.lock().await;
        let purged = repository
            .purge_idle(Utc::now() - Duration::hours(1))
            .await
            .unwrap();
        drop(guard);

        assert_eq!(purged, 1);
        assert!(repository.get(stale_id).await.unwrap().is_none());
        assert!(repository.get(busy_id).await.unwrap().is_some());
        assert!(repository.get(fresh_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_resolved_session_survives_purge() {
        let repository = InMemorySessionRepository::new();

        let mut idle = KitchenSession::new();
        idle.last_active_at = Utc::now() - Duration::days(2);
        let id = idle.id;
        repository.insert(idle).await.unwrap();

        let resolved = repository.get(id).await.unwrap().unwrap();
        let purged = repository
            .purge_idle(Utc::now() - Duration::hours(1))
            .await
            .unwrap();

        assert_eq!(purged, 0);
        resolved.lock().await.shelf.clear();
        let stored = repository.get(id).await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&stored, &resolved));
        assert!(stored.lock().await.shelf.is_empty());
    }
}
