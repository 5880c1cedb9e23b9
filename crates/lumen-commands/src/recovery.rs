//! Crash recovery coordinator
//!
//! Recovery is a single attempt per session: the crashed flag is cleared
//! whether or not the engine reports success, so a failed recovery cannot
//! trigger an endless loop of re-attempts on the same crash. The aggregate
//! boolean is the only surviving failure signal.

use lumen_session::{Session, SessionRegistry};

use crate::Result;

pub struct CrashRecoveryCommand {
    registry: SessionRegistry,
}

impl CrashRecoveryCommand {
    pub(crate) fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Try to recover every session currently flagged as crashed, queried
    /// fresh from the registry. Returns `true` iff all of them recovered;
    /// trivially `true` when none are crashed.
    pub fn invoke(&self) -> Result<bool> {
        let crashed: Vec<Session> = self
            .registry
            .sessions()
            .into_iter()
            .filter(|s| s.crashed)
            .collect();

        self.invoke_sessions(&crashed)
    }

    /// Try to recover the given session.
    pub fn invoke_session(&self, session: &Session) -> Result<bool> {
        self.invoke_sessions(std::slice::from_ref(session))
    }

    /// Try to recover the given sessions in order. Returns `true` iff every
    /// one of them recovered; every session has its crashed flag cleared and
    /// its recovery attempted even when an earlier one failed.
    pub fn invoke_sessions(&self, sessions: &[Session]) -> Result<bool> {
        let mut recovered = true;

        for session in sessions {
            let engine_session = self.registry.get_or_create_engine_session(session);
            let session_recovered = engine_session.lock().recover_from_crash()?;

            if !session_recovered {
                tracing::warn!(session_id = %session.id, "Engine session did not recover");
            }

            // Cleared even on failure; the session may not be registered.
            let _ = self.registry.set_crashed(&session.id, false);

            recovered = session_recovered && recovered;
        }

        Ok(recovered)
    }
}
