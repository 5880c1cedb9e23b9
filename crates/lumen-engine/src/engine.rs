//! Engine trait

use crate::data::BrowsingData;
use crate::session::EngineSession;
use crate::Result;

/// A browser engine backend.
///
/// Produces [`EngineSession`]s and owns the engine-global data stores that
/// exist outside any single session.
pub trait Engine: Send + Sync {
    /// Create a new, unbound engine session.
    fn create_session(&self) -> Box<dyn EngineSession>;

    /// Clear the selected browsing data from the engine-global stores.
    fn clear_data(&self, data: BrowsingData) -> Result<()>;
}
