//! In-memory store of live sessions keyed by session id.

use std::collections::HashMap;
use std::sync::Arc;

use plugchat_common::SessionId;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use super::manager::Session;

type SessionFactory = Box<dyn Fn() -> Session + Send + Sync>;

/// Creates sessions on first contact and hands out shared handles.
///
/// Each session sits behind its own mutex, so turns of one session run
/// strictly one at a time while different sessions proceed independently.
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>,
    factory: SessionFactory,
}

impl SessionStore {
    pub fn new(factory: impl Fn() -> Session + Send + Sync + 'static) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            factory: Box::new(factory),
        }
    }

    /// Create a session with a fresh id.
    pub async fn create(&self) -> (SessionId, Arc<Mutex<Session>>) {
        let id = SessionId::generate();
        let session = self.get_or_create(&id).await;
        (id, session)
    }

    pub async fn get_or_create(&self, id: &SessionId) -> Arc<Mutex<Session>> {
        if let Some(session) = self.get(id).await {
            return session;
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(sessions.entry(id.clone()).or_insert_with(|| {
            debug!(session = %id, "creating session");
            Arc::new(Mutex::new((self.factory)().with_id(id.clone())))
        }))
    }

    pub async fn get(&self, id: &SessionId) -> Option<Arc<Mutex<Session>>> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Drop a session. Returns whether it existed.
    pub async fn remove(&self, id: &SessionId) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            debug!(session = %id, "session removed");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
