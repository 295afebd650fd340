//! App struct and the state shared with the poller thread.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use webshell_common::{ElementId, ReadyState, WindowBounds};
use webshell_webview::{HostedUi, IdAllocator};

use super::handle::AppHandle;
use super::poller::Poller;

/// Lifecycle callback. Runs on the poller thread with the state lock held.
///
/// Keep a [`WeakAppHandle`](super::WeakAppHandle) rather than a cloned
/// [`AppHandle`] if the callback needs the app later; a strong handle
/// stored in a callback is a reference cycle.
pub type Callback<U> = Box<dyn FnMut(&AppHandle<U>) + Send + Sync + 'static>;

// =============================================================================
// SHARED STATE
// =============================================================================

/// Everything the embedding thread and the poller thread both touch.
pub(crate) struct Shared<U> {
    pub(crate) ui: U,
    pub(crate) ids: IdAllocator,
    state: RwLock<ShellState<U>>,
}

/// Mutable state behind the single lock.
pub(crate) struct ShellState<U> {
    pub(crate) bounds: WindowBounds,
    /// Starts as `complete`, so a page already loaded at the first poll
    /// fires nothing.
    pub(crate) ready_state: ReadyState,
    pub(crate) on_interactive: Vec<Callback<U>>,
    pub(crate) on_ready: Vec<Callback<U>>,
}

impl<U: HostedUi> Shared<U> {
    pub(crate) fn new(ui: U, bounds: WindowBounds) -> Self {
        Self {
            ui,
            ids: IdAllocator::new(),
            state: RwLock::new(ShellState {
                bounds,
                ready_state: ReadyState::Complete,
                on_interactive: Vec::new(),
                on_ready: Vec::new(),
            }),
        }
    }

    pub(crate) fn into_handle(self) -> AppHandle<U> {
        AppHandle {
            shared: Arc::new(self),
        }
    }

    /// Exclusive access. A poisoned lock is recovered.
    pub(crate) fn write_state(&self) -> RwLockWriteGuard<'_, ShellState<U>> {
        self.state.write().unwrap_or_else(|poisoned| {
            tracing::warn!("state lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    pub(crate) fn read_state(&self) -> RwLockReadGuard<'_, ShellState<U>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// APP
// =============================================================================

/// A running app window.
///
/// Owns the hosted UI for its whole lifetime and forwards only the calls
/// listed here. The background poller starts in [`App::create`] and stops
/// on [`App::dispose`] or when the app is dropped.
pub struct App<U: HostedUi> {
    pub(super) handle: AppHandle<U>,
    pub(super) config_dir: PathBuf,
    pub(super) state_path: PathBuf,
    pub(super) poller: Mutex<Option<Poller>>,
}

impl<U: HostedUi> App<U> {
    /// A cloneable, lock-free view of this app (the type callbacks receive).
    pub fn handle(&self) -> AppHandle<U> {
        self.handle.clone()
    }

    /// Directory holding the bounds record and the browser profile.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path the bounds record is read from and written to.
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Latest bounds reported by the window.
    pub fn bounds(&self) -> WindowBounds {
        self.handle.shared.read_state().bounds
    }

    /// Latest `document.readyState` seen by the poller.
    pub fn ready_state(&self) -> ReadyState {
        self.handle.shared.read_state().ready_state.clone()
    }

    pub fn inject_css(&self, css: &str) -> ElementId {
        self.handle.inject_css(css)
    }

    pub fn inject_script(&self, script: &str) -> ElementId {
        self.handle.inject_script(script)
    }

    pub fn inject_script_src(&self, url: &str) -> ElementId {
        self.handle.inject_script_src(url)
    }

    pub fn eval(&self, js: &str) -> Result<serde_json::Value, webshell_common::UiError> {
        self.handle.eval(js)
    }

    pub fn navigate(&self, url: &str) -> Result<(), webshell_common::UiError> {
        self.handle.navigate(url)
    }

    pub fn close(&self) -> Result<(), webshell_common::UiError> {
        self.handle.close()
    }
}
