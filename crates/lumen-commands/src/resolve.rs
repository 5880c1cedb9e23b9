//! Session resolution protocol
//!
//! Resolution order for every command: explicit session, then the
//! registry's selected session. Only the load commands may go one step
//! further and synthesize a fallback session; everything else treats an
//! unresolved target as a no-op.

use std::sync::Arc;

use lumen_session::{Session, SessionRegistry};

/// Strategy for creating a fallback session when a load command has nothing
/// to target. The created session is registered by the caller, so
/// implementations need no registry access.
pub trait SessionFactory: Send + Sync {
    fn create_session(&self, url: &str) -> Session;
}

/// Creates a plain session for the URL about to be loaded.
pub struct DefaultSessionFactory;

impl SessionFactory for DefaultSessionFactory {
    fn create_session(&self, url: &str) -> Session {
        Session::new(url)
    }
}

/// Resolve the effective target session: the explicit one if given,
/// otherwise the registry's selected session.
pub(crate) fn resolve(registry: &SessionRegistry, session: Option<&Session>) -> Option<Session> {
    session.cloned().or_else(|| registry.selected_session())
}

/// Resolve as [`resolve`] does, but synthesize and register a fallback
/// session if nothing resolves. Used only by the load commands.
pub(crate) fn resolve_or_create(
    registry: &SessionRegistry,
    session: Option<&Session>,
    factory: &Arc<dyn SessionFactory>,
    fallback_url: &str,
) -> Session {
    if let Some(session) = resolve(registry, session) {
        return session;
    }

    tracing::info!(url = %fallback_url, "No session to target, creating one");

    registry.add(factory.create_session(fallback_url))
}
