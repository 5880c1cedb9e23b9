//! History and loading commands
//!
//! All of these are no-op safe: when no session resolves they return without
//! touching the engine, and they never create a session as a side effect of
//! what is conceptually a read or a navigation within existing state.

use lumen_session::{Session, SessionRegistry};

use crate::resolve::resolve;
use crate::Result;

pub struct ReloadCommand {
    registry: SessionRegistry,
}

impl ReloadCommand {
    pub(crate) fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Reload the current page of the given session, or of the selected
    /// session if `session` is `None`.
    pub fn invoke(&self, session: Option<&Session>) -> Result<()> {
        if let Some(session) = resolve(&self.registry, session) {
            self.registry
                .get_or_create_engine_session(&session)
                .lock()
                .reload()?;
        }
        Ok(())
    }

    /// Reload the current page of the tab with the given ID.
    pub fn invoke_tab(&self, tab_id: &str) -> Result<()> {
        match self.registry.find_session_by_id(tab_id) {
            Some(session) => self.invoke(Some(&session)),
            None => Ok(()),
        }
    }
}

pub struct StopLoadingCommand {
    registry: SessionRegistry,
}

impl StopLoadingCommand {
    pub(crate) fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Stop the current page of the given (or selected) session from loading.
    pub fn invoke(&self, session: Option<&Session>) -> Result<()> {
        if let Some(session) = resolve(&self.registry, session) {
            self.registry
                .get_or_create_engine_session(&session)
                .lock()
                .stop_loading()?;
        }
        Ok(())
    }
}

pub struct GoBackCommand {
    registry: SessionRegistry,
}

impl GoBackCommand {
    pub(crate) fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Navigate back in the history of the given (or selected) session.
    pub fn invoke(&self, session: Option<&Session>) -> Result<()> {
        if let Some(session) = resolve(&self.registry, session) {
            self.registry
                .get_or_create_engine_session(&session)
                .lock()
                .go_back()?;
        }
        Ok(())
    }

    /// Navigate back in the history of the tab with the given ID.
    pub fn invoke_tab(&self, tab_id: &str) -> Result<()> {
        match self.registry.find_session_by_id(tab_id) {
            Some(session) => self.invoke(Some(&session)),
            None => Ok(()),
        }
    }
}

pub struct GoForwardCommand {
    registry: SessionRegistry,
}

impl GoForwardCommand {
    pub(crate) fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Navigate forward in the history of the given (or selected) session.
    pub fn invoke(&self, session: Option<&Session>) -> Result<()> {
        if let Some(session) = resolve(&self.registry, session) {
            self.registry
                .get_or_create_engine_session(&session)
                .lock()
                .go_forward()?;
        }
        Ok(())
    }
}

pub struct GoToHistoryIndexCommand {
    registry: SessionRegistry,
}

impl GoToHistoryIndexCommand {
    pub(crate) fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Navigate to the given index in the backstack of the given (or
    /// selected) session. The index is passed through unvalidated; the
    /// engine ignores values that are out of range.
    pub fn invoke(&self, index: i32, session: Option<&Session>) -> Result<()> {
        if let Some(session) = resolve(&self.registry, session) {
            self.registry
                .get_or_create_engine_session(&session)
                .lock()
                .go_to_history_index(index)?;
        }
        Ok(())
    }
}
