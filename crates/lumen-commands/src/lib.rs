//! Lumen Session Commands
//!
//! One command per browser-navigation operation (load, reload, history
//! navigation, desktop mode, fullscreen exit, clear data, crash recovery),
//! all dispatching through the same session resolution protocol: an explicit
//! session wins, then the registry's selected session, and commands that
//! must have a session to act on (the load commands) synthesize one as a
//! last resort. Everything else quietly does nothing when no session
//! resolves, so passive operations never create tabs as a side effect.

mod clear;
mod commands;
mod error;
mod load;
mod mode;
mod navigate;
mod recovery;
mod resolve;

#[cfg(test)]
pub(crate) mod support;

pub use clear::ClearDataCommand;
pub use commands::SessionCommands;
pub use error::CommandError;
pub use load::{LoadDataCommand, LoadUrlCommand};
pub use mode::{ExitFullScreenCommand, RequestDesktopSiteCommand};
pub use navigate::{
    GoBackCommand, GoForwardCommand, GoToHistoryIndexCommand, ReloadCommand, StopLoadingCommand,
};
pub use recovery::CrashRecoveryCommand;
pub use resolve::{DefaultSessionFactory, SessionFactory};

pub type Result<T> = std::result::Result<T, CommandError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
