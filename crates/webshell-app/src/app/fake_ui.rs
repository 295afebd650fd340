//! Scripted hosted UI for app tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

use webshell_common::{UiError, WindowBounds};
use webshell_webview::{HostedUi, LaunchRequest, READY_STATE_QUERY};

/// Fake window. Clones share state, so a test keeps one clone to steer
/// the window while the app owns another.
#[derive(Clone, Default)]
pub(crate) struct FakeUi {
    inner: Arc<FakeInner>,
}

#[derive(Default)]
struct FakeInner {
    bounds: Mutex<Option<WindowBounds>>,
    bounds_fail: AtomicBool,
    set_bounds_fail: AtomicBool,
    applied: Mutex<Vec<WindowBounds>>,
    bounds_queries: AtomicUsize,
    ready: Mutex<Option<String>>,
    scripts: Mutex<Vec<String>>,
    navigations: Mutex<Vec<String>>,
    launches: Mutex<Vec<LaunchRequest>>,
    done: Mutex<bool>,
    done_cv: Condvar,
}

impl FakeUi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A launcher closure that records the request and hands out a clone.
    pub(crate) fn launcher(&self) -> impl Fn(&LaunchRequest) -> Result<FakeUi, UiError> {
        let ui = self.clone();
        move |request: &LaunchRequest| {
            ui.inner.launches.lock().unwrap().push(request.clone());
            Ok(ui.clone())
        }
    }

    pub(crate) fn launches(&self) -> Vec<LaunchRequest> {
        self.inner.launches.lock().unwrap().clone()
    }

    /// Simulate the user moving or resizing the window.
    pub(crate) fn move_window(&self, bounds: WindowBounds) {
        *self.inner.bounds.lock().unwrap() = Some(bounds);
    }

    pub(crate) fn fail_bounds_queries(&self, fail: bool) {
        self.inner.bounds_fail.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_set_bounds(&self, fail: bool) {
        self.inner.set_bounds_fail.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn applied_bounds(&self) -> Vec<WindowBounds> {
        self.inner.applied.lock().unwrap().clone()
    }

    pub(crate) fn bounds_queries(&self) -> usize {
        self.inner.bounds_queries.load(Ordering::SeqCst)
    }

    /// Set what `document.readyState` evaluates to. `None` makes the query fail.
    pub(crate) fn set_ready_state(&self, state: Option<&str>) {
        *self.inner.ready.lock().unwrap() = state.map(str::to_string);
    }

    /// Every evaluated snippet except the ready-state query.
    pub(crate) fn scripts(&self) -> Vec<String> {
        self.inner.scripts.lock().unwrap().clone()
    }

    pub(crate) fn navigations(&self) -> Vec<String> {
        self.inner.navigations.lock().unwrap().clone()
    }

    /// Simulate the user closing the window.
    pub(crate) fn finish(&self) {
        *self.inner.done.lock().unwrap() = true;
        self.inner.done_cv.notify_all();
    }

    fn is_finished(&self) -> bool {
        *self.inner.done.lock().unwrap()
    }
}

impl HostedUi for FakeUi {
    fn bounds(&self) -> Result<WindowBounds, UiError> {
        self.inner.bounds_queries.fetch_add(1, Ordering::SeqCst);
        if self.inner.bounds_fail.load(Ordering::SeqCst) {
            return Err(UiError::Bounds("window not ready".into()));
        }
        self.inner
            .bounds
            .lock()
            .unwrap()
            .ok_or_else(|| UiError::Bounds("no bounds yet".into()))
    }

    fn set_bounds(&self, bounds: &WindowBounds) -> Result<(), UiError> {
        if self.inner.set_bounds_fail.load(Ordering::SeqCst) {
            return Err(UiError::Bounds("set_bounds rejected".into()));
        }
        self.inner.applied.lock().unwrap().push(*bounds);
        *self.inner.bounds.lock().unwrap() = Some(*bounds);
        Ok(())
    }

    fn eval(&self, js: &str) -> Result<serde_json::Value, UiError> {
        if self.is_finished() {
            return Err(UiError::Closed);
        }
        if js == READY_STATE_QUERY {
            return match self.inner.ready.lock().unwrap().as_deref() {
                Some(state) => Ok(serde_json::Value::String(state.to_string())),
                None => Err(UiError::Eval("page not attached".into())),
            };
        }
        self.inner.scripts.lock().unwrap().push(js.to_string());
        Ok(serde_json::Value::Null)
    }

    fn navigate(&self, url: &str) -> Result<(), UiError> {
        if self.is_finished() {
            return Err(UiError::Closed);
        }
        self.inner.navigations.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn close(&self) -> Result<(), UiError> {
        self.finish();
        Ok(())
    }

    fn wait_done(&self) {
        let mut done = self.inner.done.lock().unwrap();
        while !*done {
            done = self.inner.done_cv.wait(done).unwrap();
        }
    }
}

/// Spin until `cond` holds or two seconds pass.
pub(crate) fn wait_for(mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    cond()
}
