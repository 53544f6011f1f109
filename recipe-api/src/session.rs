use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, Method},
    middleware::Next,
    response::Response,
};
use dashmap::DashMap;
use recipe_app::domain::SessionState;
use recipe_errors::AppError;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tower_sessions::Session;

pub const SESSION_COOKIE_NAME: &str = "recipe_sid";
const SESSION_STATE_KEY: &str = "recipe_session";

pub async fn load_state(session: &Session) -> Result<SessionState, AppError> {
    let state = session
        .get::<SessionState>(SESSION_STATE_KEY)
        .await
        .map_err(|e| AppError::Session(e.to_string()))?;
    Ok(state.unwrap_or_default())
}

pub async fn save_state(session: &Session, state: &SessionState) -> Result<(), AppError> {
    session
        .insert(SESSION_STATE_KEY, state)
        .await
        .map_err(|e| AppError::Session(e.to_string()))
}

/// One lock per session cookie, held while a state-changing request runs and
/// its session is written back.
#[derive(Clone, Default)]
pub struct SessionWriteLocks {
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl SessionWriteLocks {
    async fn acquire(&self, session_id: &str) -> OwnedMutexGuard<()> {
        let lock = self.locks.entry(session_id.to_string()).or_default().clone();
        lock.lock_owned().await
    }

    fn release(&self, session_id: &str) {
        self.locks
            .remove_if(session_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks.len()
    }
}

/// Runs non-GET requests of the same session one after another, so each sees
/// the state the previous one stored. Must wrap the session layer.
pub async fn serialize_session_writes(
    State(locks): State<SessionWriteLocks>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::GET {
        return next.run(request).await;
    }
    let Some(session_id) = session_cookie(request.headers()) else {
        return next.run(request).await;
    };

    let guard = locks.acquire(&session_id).await;
    let response = next.run(request).await;
    drop(guard);
    locks.release(&session_id);
    response
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; recipe_sid=abc123; lang=en"),
        );
        assert_eq!(session_cookie(&headers), Some("abc123".to_string()));

        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(session_cookie(&headers), None);
    }

    #[tokio::test]
    async fn test_locks_are_released() {
        let locks = SessionWriteLocks::default();

        let guard = locks.acquire("abc").await;
        assert_eq!(locks.len(), 1);
        drop(guard);
        locks.release("abc");

        assert_eq!(locks.len(), 0);
    }

    #[tokio::test]
    async fn test_release_keeps_lock_with_waiters() {
        let locks = SessionWriteLocks::default();

        let first = locks.acquire("abc").await;
        let waiter = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire("abc").await;
            })
        };
        while Arc::strong_count(&locks.locks.get("abc").unwrap()) < 3 {
            tokio::task::yield_now().await;
        }

        drop(first);
        locks.release("abc");
        assert_eq!(locks.len(), 1);

        waiter.await.unwrap();
        locks.release("abc");
        assert_eq!(locks.len(), 0);
    }
}
