//! Lumen Session Management
//!
//! Sessions are the tab-like identities of the browser, independent of
//! whether an engine backend is currently bound to them. The registry tracks
//! all sessions, the selected one, and the lazy 1:1 binding of sessions to
//! live engine sessions.

mod error;
mod registry;
mod session;

pub use error::SessionError;
pub use registry::{EngineSessionHandle, SessionRegistry};
pub use session::Session;

pub type Result<T> = std::result::Result<T, SessionError>;
