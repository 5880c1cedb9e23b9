//! Command wiring
//!
//! Builds one instance of every command up front, all sharing the same
//! registry and fallback-session factory. Construction is cheap and has no
//! side effects, so there is nothing to defer.

use std::sync::Arc;

use lumen_session::SessionRegistry;

use crate::clear::ClearDataCommand;
use crate::load::{LoadDataCommand, LoadUrlCommand};
use crate::mode::{ExitFullScreenCommand, RequestDesktopSiteCommand};
use crate::navigate::{
    GoBackCommand, GoForwardCommand, GoToHistoryIndexCommand, ReloadCommand, StopLoadingCommand,
};
use crate::recovery::CrashRecoveryCommand;
use crate::resolve::{DefaultSessionFactory, SessionFactory};

/// The full set of session commands, one field per operation.
pub struct SessionCommands {
    pub load_url: LoadUrlCommand,
    pub load_data: LoadDataCommand,
    pub reload: ReloadCommand,
    pub stop_loading: StopLoadingCommand,
    pub go_back: GoBackCommand,
    pub go_forward: GoForwardCommand,
    pub go_to_history_index: GoToHistoryIndexCommand,
    pub request_desktop_site: RequestDesktopSiteCommand,
    pub exit_full_screen: ExitFullScreenCommand,
    pub clear_data: ClearDataCommand,
    pub crash_recovery: CrashRecoveryCommand,
}

impl SessionCommands {
    /// Wire all commands against the given registry, creating fallback
    /// sessions with [`DefaultSessionFactory`].
    pub fn new(registry: SessionRegistry) -> Self {
        Self::with_factory(registry, Arc::new(DefaultSessionFactory))
    }

    /// Wire all commands against the given registry, with a custom strategy
    /// for creating fallback sessions.
    pub fn with_factory(registry: SessionRegistry, factory: Arc<dyn SessionFactory>) -> Self {
        Self {
            load_url: LoadUrlCommand::new(registry.clone(), Arc::clone(&factory)),
            load_data: LoadDataCommand::new(registry.clone(), factory),
            reload: ReloadCommand::new(registry.clone()),
            stop_loading: StopLoadingCommand::new(registry.clone()),
            go_back: GoBackCommand::new(registry.clone()),
            go_forward: GoForwardCommand::new(registry.clone()),
            go_to_history_index: GoToHistoryIndexCommand::new(registry.clone()),
            request_desktop_site: RequestDesktopSiteCommand::new(registry.clone()),
            exit_full_screen: ExitFullScreenCommand::new(registry.clone()),
            clear_data: ClearDataCommand::new(registry.clone()),
            crash_recovery: CrashRecoveryCommand::new(registry),
        }
    }
}
