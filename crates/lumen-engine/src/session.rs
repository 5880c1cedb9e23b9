//! Engine session trait
//!
//! One live, stateful backend per browsing session. Created lazily by the
//! session registry via [`crate::Engine::create_session`]; callers reach it
//! through the registry, never construct it directly.

use std::collections::HashMap;

use crate::data::{BrowsingData, LoadUrlFlags};
use crate::Result;

/// Effectful operations of a live navigation/rendering backend.
///
/// Backend failures surface as [`crate::EngineError`] and are propagated by
/// callers unchanged; this interface defines no recovery semantics of its
/// own apart from [`EngineSession::recover_from_crash`].
pub trait EngineSession: Send {
    /// Load the given URL.
    fn load_url(
        &mut self,
        url: &str,
        flags: LoadUrlFlags,
        additional_headers: Option<&HashMap<String, String>>,
    ) -> Result<()>;

    /// Load the given data with the given mime type and character encoding.
    fn load_data(&mut self, data: &str, mime_type: &str, encoding: &str) -> Result<()>;

    /// Reload the current URL.
    fn reload(&mut self) -> Result<()>;

    /// Stop loading the current page.
    fn stop_loading(&mut self) -> Result<()>;

    /// Navigate back in this session's history.
    fn go_back(&mut self) -> Result<()>;

    /// Navigate forward in this session's history.
    fn go_forward(&mut self) -> Result<()>;

    /// Navigate to the given index in this session's history backstack.
    /// Invalid index values are ignored by the backend.
    fn go_to_history_index(&mut self, index: i32) -> Result<()>;

    /// Enable or disable the desktop version of the current page,
    /// optionally reloading it.
    fn toggle_desktop_mode(&mut self, enable: bool, reload: bool) -> Result<()>;

    /// Leave fullscreen mode if the page entered it.
    fn exit_full_screen_mode(&mut self) -> Result<()>;

    /// Clear the selected browsing data scoped to this session.
    fn clear_data(&mut self, data: BrowsingData) -> Result<()>;

    /// Try to restore the last known state after an abnormal termination.
    /// Returns whether the backend actually recovered.
    fn recover_from_crash(&mut self) -> Result<bool>;
}
