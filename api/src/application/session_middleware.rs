use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use larder_core::domain::session::{entities::KitchenSession, ports::SessionHandle, ports::SessionService};
use tokio::sync::MutexGuard;
use tracing::debug;
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Session resolved from the request path, stored in request extensions
#[derive(Clone)]
pub struct SessionContext {
    pub session_id: Uuid,
    pub session: SessionHandle,
}

impl SessionContext {
    /// Waits for exclusive access to the session and marks it active.
    pub async fn lock(&self) -> MutexGuard<'_, KitchenSession> {
        let mut session = self.session.lock().await;
        session.touch();
        session
    }
}

/// Resolves `/sessions/{session_id}/...` to a live session
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let raw_id = extract_session_from_path(req.uri().path())
        .ok_or_else(|| ApiError::BadRequest("Missing session id".to_string()))?;
    let session_id = Uuid::parse_str(&raw_id)
        .map_err(|_| ApiError::BadRequest(format!("Invalid session id: {}", raw_id)))?;

    let session = state.service.get_session(session_id).await.map_err(|e| {
        debug!(%session_id, "Unknown session");
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(SessionContext {
        session_id,
        session,
    });

    Ok(next.run(req).await)
}

/// Extract session id from path like "/sessions/{session_id}/..."
fn extract_session_from_path(path: &str) -> Option<String> {
    let parts: Vec<&str> = path.split('/').collect();
    if let Some(idx) = parts.iter().position(|&p| p == "sessions")
        && idx + 1 < parts.len()
        && !parts[idx + 1].is_empty()
    {
        return Some(parts[idx + 1].to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_session_from_path() {
        assert_eq!(
            extract_session_from_path("/api/sessions/abc/shelf").as_deref(),
            Some("abc")
        );
        assert_eq!(extract_session_from_path("/sessions/abc").as_deref(), Some("abc"));
        assert_eq!(extract_session_from_path("/sessions/"), None);
        assert_eq!(extract_session_from_path("/catalog/recipes"), None);
    }
}
