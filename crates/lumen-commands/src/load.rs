//! Load commands
//!
//! The only commands allowed to synthesize a session: a load always has a
//! meaningful target, so when nothing resolves a fallback session is created
//! through the injected [`SessionFactory`] and registered.

use std::collections::HashMap;
use std::sync::Arc;

use lumen_engine::LoadUrlFlags;
use lumen_session::{Session, SessionRegistry};

use crate::resolve::{resolve_or_create, SessionFactory};
use crate::Result;

pub struct LoadUrlCommand {
    registry: SessionRegistry,
    factory: Arc<dyn SessionFactory>,
}

impl LoadUrlCommand {
    pub(crate) fn new(registry: SessionRegistry, factory: Arc<dyn SessionFactory>) -> Self {
        Self { registry, factory }
    }

    /// Load the URL in the currently selected session, with no special
    /// flags or headers. Creates a session for the URL if none is selected.
    pub fn invoke(&self, url: &str) -> Result<()> {
        self.invoke_with(url, None, LoadUrlFlags::none(), None)
    }

    /// Load the URL in the given session, or the selected one if `session`
    /// is `None`, or a newly created fallback session as a last resort.
    pub fn invoke_with(
        &self,
        url: &str,
        session: Option<&Session>,
        flags: LoadUrlFlags,
        additional_headers: Option<&HashMap<String, String>>,
    ) -> Result<()> {
        let session = resolve_or_create(&self.registry, session, &self.factory, url);

        let engine_session = self.registry.get_or_create_engine_session(&session);
        engine_session.lock().load_url(url, flags, additional_headers)?;

        Ok(())
    }
}

pub struct LoadDataCommand {
    registry: SessionRegistry,
    factory: Arc<dyn SessionFactory>,
}

impl LoadDataCommand {
    pub(crate) fn new(registry: SessionRegistry, factory: Arc<dyn SessionFactory>) -> Self {
        Self { registry, factory }
    }

    /// Load the data with the given mime type in the currently selected
    /// session, assuming UTF-8 encoding.
    pub fn invoke(&self, data: &str, mime_type: &str) -> Result<()> {
        self.invoke_with(data, mime_type, "UTF-8", None)
    }

    /// Load the data in the given session, or the selected one if `session`
    /// is `None`. The fallback session, if one has to be created, starts at
    /// about:blank since there is no URL to associate with raw data.
    pub fn invoke_with(
        &self,
        data: &str,
        mime_type: &str,
        encoding: &str,
        session: Option<&Session>,
    ) -> Result<()> {
        let session = resolve_or_create(&self.registry, session, &self.factory, "about:blank");

        let engine_session = self.registry.get_or_create_engine_session(&session);
        engine_session.lock().load_data(data, mime_type, encoding)?;

        Ok(())
    }
}
