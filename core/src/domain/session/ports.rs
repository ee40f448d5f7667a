use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{entities::KitchenSession, page::Page},
};

/// Shared handle on one session. Holding the lock serializes requests on that session.
pub type SessionHandle = Arc<Mutex<KitchenSession>>;

/// Storage for live sessions
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn insert(
        &self,
        session: KitchenSession,
    ) -> impl Future<Output = Result<SessionHandle, CoreError>> + Send;

    /// Resolves a live session and marks it active, so a concurrent purge keeps it.
    fn get(&self, id: Uuid)
    -> impl Future<Output = Result<Option<SessionHandle>, CoreError>> + Send;

    fn remove(&self, id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Drops sessions whose last activity is before `idle_since`. Sessions currently
    /// locked by a request are kept.
    fn purge_idle(
        &self,
        idle_since: DateTime<Utc>,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

pub trait SessionService: Send + Sync {
    fn create_session(&self) -> impl Future<Output = Result<SessionHandle, CoreError>> + Send;

    fn get_session(&self, id: Uuid)
    -> impl Future<Output = Result<SessionHandle, CoreError>> + Send;

    fn end_session(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn navigate(&self, session: &mut KitchenSession, target: Page) -> Result<Page, CoreError>;
}
