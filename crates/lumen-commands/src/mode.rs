//! Display mode commands

use lumen_session::{Session, SessionRegistry};

use crate::resolve::resolve;
use crate::Result;

pub struct RequestDesktopSiteCommand {
    registry: SessionRegistry,
}

impl RequestDesktopSiteCommand {
    pub(crate) fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Switch the given (or selected) session to the desktop or mobile
    /// version of the current page. Always reloads the page so the toggle
    /// takes effect immediately.
    pub fn invoke(&self, enable: bool, session: Option<&Session>) -> Result<()> {
        if let Some(session) = resolve(&self.registry, session) {
            self.registry
                .get_or_create_engine_session(&session)
                .lock()
                .toggle_desktop_mode(enable, true)?;
        }
        Ok(())
    }
}

pub struct ExitFullScreenCommand {
    registry: SessionRegistry,
}

impl ExitFullScreenCommand {
    pub(crate) fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Exit fullscreen mode of the given (or selected) session.
    pub fn invoke(&self, session: Option<&Session>) -> Result<()> {
        if let Some(session) = resolve(&self.registry, session) {
            self.registry
                .get_or_create_engine_session(&session)
                .lock()
                .exit_full_screen_mode()?;
        }
        Ok(())
    }

    /// Exit fullscreen mode of the tab with the given ID.
    pub fn invoke_tab(&self, tab_id: &str) -> Result<()> {
        match self.registry.find_session_by_id(tab_id) {
            Some(session) => self.invoke(Some(&session)),
            None => Ok(()),
        }
    }
}
