//! Registry of open streaming sessions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

use crate::constants::mcp::SESSION_CHANNEL_CAPACITY;

/// Outbound queue of one session; each item is a serialized JSON-RPC message.
pub type SessionSender = mpsc::Sender<String>;
pub type SessionReceiver = mpsc::Receiver<String>;

/// Open sessions keyed by id. Cloning shares the same registry.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<Uuid, SessionSender>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, SessionSender>> {
        // A panic while holding the lock cannot leave the map half-updated
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers a new session and returns its id with the receiving end.
    pub fn open(&self) -> (Uuid, SessionReceiver) {
        let (tx, rx) = mpsc::channel(SESSION_CHANNEL_CAPACITY);
        let id = Uuid::new_v4();
        self.lock().insert(id, tx);
        debug!("Session {} opened", id);
        (id, rx)
    }

    /// Sender of an open session.
    pub fn sender(&self, id: &Uuid) -> Option<SessionSender> {
        self.lock().get(id).cloned()
    }

    pub fn close(&self, id: &Uuid) {
        if self.lock().remove(id).is_some() {
            debug!("Session {} closed", id);
        }
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Removes its session from the registry when dropped, so a stream that
/// ends for any reason releases its entry.
#[derive(Debug)]
pub struct SessionGuard {
    id: Uuid,
    registry: SessionRegistry,
}

impl SessionGuard {
    pub fn new(id: Uuid, registry: SessionRegistry) -> Self {
        Self { id, registry }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.registry.close(&self.id);
    }
}
