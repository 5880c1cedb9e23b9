//! Session data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier
    pub id: String,
    /// URL the session was created for; kept current by collaborators
    /// observing the engine, not by this layer
    pub url: String,
    /// Set externally when the bound engine session terminates abnormally;
    /// cleared after a recovery attempt
    pub crashed: bool,
    /// When the session was created
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url: url.into(),
            crashed: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new("https://example.com");
        assert_eq!(session.url, "https://example.com");
        assert!(!session.crashed);
        assert!(!session.id.is_empty());
    }

    #[test]
    fn test_unique_ids() {
        let a = Session::new("about:blank");
        let b = Session::new("about:blank");
        assert_ne!(a.id, b.id);
    }
}
