//! Session Registry
//!
//! In-memory registry of all sessions plus the lazy binding of each session
//! to its live engine session. Hands out `Session` clones; the registry's
//! copy is authoritative and is mutated only through registry methods.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

use lumen_engine::{Engine, EngineSession};

use crate::error::SessionError;
use crate::session::Session;
use crate::Result;

/// Shared handle to the live engine session bound to one session.
pub type EngineSessionHandle = Arc<Mutex<Box<dyn EngineSession>>>;

pub struct SessionRegistry {
    /// All sessions in insertion order
    sessions: Arc<RwLock<Vec<Session>>>,
    /// Currently selected session ID
    selected_id: Arc<RwLock<Option<String>>>,
    /// Engine sessions bound so far, keyed by session ID
    engine_sessions: Arc<RwLock<HashMap<String, EngineSessionHandle>>>,
    /// The engine backend
    engine: Arc<dyn Engine>,
}

impl SessionRegistry {
    pub fn new(engine: Arc<dyn Engine>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(Vec::new())),
            selected_id: Arc::new(RwLock::new(None)),
            engine_sessions: Arc::new(RwLock::new(HashMap::new())),
            engine,
        }
    }

    /// Register a session. The first session added becomes selected.
    pub fn add(&self, session: Session) -> Session {
        let mut sessions = self.sessions.write();
        let select = sessions.is_empty();
        sessions.push(session.clone());
        drop(sessions);

        if select {
            *self.selected_id.write() = Some(session.id.clone());
        }

        tracing::info!(session_id = %session.id, url = %session.url, selected = select, "Registered session");

        session
    }

    /// Remove a session and drop its engine binding. Selection falls to the
    /// first remaining session.
    pub fn remove(&self, session_id: &str) -> Result<Session> {
        let removed = {
            let mut sessions = self.sessions.write();
            let index = sessions
                .iter()
                .position(|s| s.id == session_id)
                .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;
            sessions.remove(index)
        };

        self.engine_sessions.write().remove(session_id);

        {
            let mut selected = self.selected_id.write();
            if selected.as_deref() == Some(session_id) {
                *selected = self.sessions.read().first().map(|s| s.id.clone());
            }
        }

        tracing::info!(session_id = %session_id, "Removed session");

        Ok(removed)
    }

    /// Mark a session as selected.
    pub fn select(&self, session_id: &str) -> Result<Session> {
        let session = self
            .find_session_by_id(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;

        *self.selected_id.write() = Some(session.id.clone());

        Ok(session)
    }

    /// The currently selected session, if any.
    pub fn selected_session(&self) -> Option<Session> {
        let selected = self.selected_id.read();
        let id = selected.as_deref()?;
        self.sessions.read().iter().find(|s| s.id == id).cloned()
    }

    /// Look up a session by its ID.
    pub fn find_session_by_id(&self, session_id: &str) -> Option<Session> {
        self.sessions
            .read()
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
    }

    /// All sessions in insertion order.
    pub fn sessions(&self) -> Vec<Session> {
        self.sessions.read().clone()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Set or clear a session's crashed flag.
    pub fn set_crashed(&self, session_id: &str, crashed: bool) -> Result<Session> {
        let mut sessions = self.sessions.write();
        let session = sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;

        session.crashed = crashed;

        tracing::debug!(session_id = %session_id, crashed, "Updated crashed flag");

        Ok(session.clone())
    }

    pub fn engine(&self) -> Arc<dyn Engine> {
        Arc::clone(&self.engine)
    }

    /// Get the engine session bound to the given session, creating and
    /// binding one on first use. Keyed by session ID, so sessions that were
    /// never registered still bind cleanly.
    pub fn get_or_create_engine_session(&self, session: &Session) -> EngineSessionHandle {
        if let Some(handle) = self.engine_sessions.read().get(&session.id) {
            return Arc::clone(handle);
        }

        tracing::debug!(session_id = %session.id, "Binding engine session");

        // Created before taking the write lock; the engine must never be
        // called while a registry lock is held.
        let created: EngineSessionHandle = Arc::new(Mutex::new(self.engine.create_session()));

        let mut bindings = self.engine_sessions.write();
        // Another caller may have bound it while ours was being created.
        if let Some(handle) = bindings.get(&session.id) {
            return Arc::clone(handle);
        }

        bindings.insert(session.id.clone(), Arc::clone(&created));
        created
    }
}

impl Clone for SessionRegistry {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            selected_id: Arc::clone(&self.selected_id),
            engine_sessions: Arc::clone(&self.engine_sessions),
            engine: Arc::clone(&self.engine),
        }
    }
}
