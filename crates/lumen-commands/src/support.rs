//! Test doubles for the engine concept
//!
//! A recording fake engine whose sessions share one call log, with
//! scriptable crash-recovery outcomes handed out in session creation order.

use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use lumen_engine::{BrowsingData, Engine, EngineError, EngineSession, LoadUrlFlags};
use lumen_session::SessionRegistry;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EngineCall {
    EngineClearData(BrowsingData),
    LoadUrl {
        url: String,
        flags: LoadUrlFlags,
        additional_headers: Option<HashMap<String, String>>,
    },
    LoadData {
        data: String,
        mime_type: String,
        encoding: String,
    },
    Reload,
    StopLoading,
    GoBack,
    GoForward,
    GoToHistoryIndex(i32),
    ToggleDesktopMode {
        enable: bool,
        reload: bool,
    },
    ExitFullScreenMode,
    ClearData(BrowsingData),
    RecoverFromCrash,
}

#[derive(Clone, Default)]
pub(crate) struct FakeEngine {
    calls: Arc<Mutex<Vec<EngineCall>>>,
    recover_script: Arc<Mutex<VecDeque<bool>>>,
    fail_reload: Arc<AtomicBool>,
    created: Arc<AtomicUsize>,
}

impl FakeEngine {
    /// Queue crash-recovery outcomes, consumed one per created session.
    /// Sessions beyond the script recover successfully.
    pub(crate) fn script_recovery(&self, outcomes: &[bool]) {
        self.recover_script.lock().extend(outcomes.iter().copied());
    }

    /// Make every subsequently created session fail its reload call.
    pub(crate) fn fail_reloads(&self) {
        self.fail_reload.store(true, Ordering::SeqCst);
    }

    pub(crate) fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub(crate) fn created_sessions(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl Engine for FakeEngine {
    fn create_session(&self) -> Box<dyn EngineSession> {
        self.created.fetch_add(1, Ordering::SeqCst);

        Box::new(FakeEngineSession {
            calls: Arc::clone(&self.calls),
            recovers: self.recover_script.lock().pop_front().unwrap_or(true),
            fail_reload: self.fail_reload.load(Ordering::SeqCst),
        })
    }

    fn clear_data(&self, data: BrowsingData) -> lumen_engine::Result<()> {
        self.calls.lock().push(EngineCall::EngineClearData(data));
        Ok(())
    }
}

pub(crate) struct FakeEngineSession {
    calls: Arc<Mutex<Vec<EngineCall>>>,
    recovers: bool,
    fail_reload: bool,
}

impl EngineSession for FakeEngineSession {
    fn load_url(
        &mut self,
        url: &str,
        flags: LoadUrlFlags,
        additional_headers: Option<&HashMap<String, String>>,
    ) -> lumen_engine::Result<()> {
        self.calls.lock().push(EngineCall::LoadUrl {
            url: url.to_string(),
            flags,
            additional_headers: additional_headers.cloned(),
        });
        Ok(())
    }

    fn load_data(&mut self, data: &str, mime_type: &str, encoding: &str) -> lumen_engine::Result<()> {
        self.calls.lock().push(EngineCall::LoadData {
            data: data.to_string(),
            mime_type: mime_type.to_string(),
            encoding: encoding.to_string(),
        });
        Ok(())
    }

    fn reload(&mut self) -> lumen_engine::Result<()> {
        if self.fail_reload {
            return Err(EngineError::Backend("reload rejected".to_string()));
        }
        self.calls.lock().push(EngineCall::Reload);
        Ok(())
    }

    fn stop_loading(&mut self) -> lumen_engine::Result<()> {
        self.calls.lock().push(EngineCall::StopLoading);
        Ok(())
    }

    fn go_back(&mut self) -> lumen_engine::Result<()> {
        self.calls.lock().push(EngineCall::GoBack);
        Ok(())
    }

    fn go_forward(&mut self) -> lumen_engine::Result<()> {
        self.calls.lock().push(EngineCall::GoForward);
        Ok(())
    }

    fn go_to_history_index(&mut self, index: i32) -> lumen_engine::Result<()> {
        self.calls.lock().push(EngineCall::GoToHistoryIndex(index));
        Ok(())
    }

    fn toggle_desktop_mode(&mut self, enable: bool, reload: bool) -> lumen_engine::Result<()> {
        self.calls
            .lock()
            .push(EngineCall::ToggleDesktopMode { enable, reload });
        Ok(())
    }

    fn exit_full_screen_mode(&mut self) -> lumen_engine::Result<()> {
        self.calls.lock().push(EngineCall::ExitFullScreenMode);
        Ok(())
    }

    fn clear_data(&mut self, data: BrowsingData) -> lumen_engine::Result<()> {
        self.calls.lock().push(EngineCall::ClearData(data));
        Ok(())
    }

    fn recover_from_crash(&mut self) -> lumen_engine::Result<bool> {
        self.calls.lock().push(EngineCall::RecoverFromCrash);
        Ok(self.recovers)
    }
}

/// A registry wired to a fresh fake engine, plus the fake for inspection.
pub(crate) fn harness() -> (SessionRegistry, FakeEngine) {
    let engine = FakeEngine::default();
    let registry = SessionRegistry::new(Arc::new(engine.clone()));
    (registry, engine)
}
