//! Clear browsing data command

use lumen_engine::BrowsingData;
use lumen_session::{Session, SessionRegistry};

use crate::resolve::resolve;
use crate::Result;

pub struct ClearDataCommand {
    registry: SessionRegistry,
}

impl ClearDataCommand {
    pub(crate) fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Clear all browsing data categories, engine-wide and for the given
    /// (or selected) session.
    pub fn invoke(&self, session: Option<&Session>) -> Result<()> {
        self.invoke_with(session, BrowsingData::all())
    }

    /// Clear the selected browsing data categories. The engine-global stores
    /// are cleared regardless of session resolution; the per-session clear
    /// additionally runs when a session resolves.
    pub fn invoke_with(&self, session: Option<&Session>, data: BrowsingData) -> Result<()> {
        tracing::info!(data = data.value(), "Clearing browsing data");

        self.registry.engine().clear_data(data)?;

        if let Some(session) = resolve(&self.registry, session) {
            self.registry
                .get_or_create_engine_session(&session)
                .lock()
                .clear_data(data)?;
        }

        Ok(())
    }
}
