//! Lock-free view of an app, passed to lifecycle callbacks.

use std::sync::{Arc, Weak};

use tracing::warn;
use webshell_common::{ElementId, UiError};
use webshell_webview::{injection_snippet, HostedUi, Injection};

use super::core::Shared;

/// Cloneable handle to a running app.
///
/// Exposes only operations that never take the state lock, so it is safe
/// to use from inside `on_interactive`/`on_ready` callbacks.
///
/// Callbacks are owned by the app, so a callback that keeps a clone of its
/// handle keeps the app alive forever. Store [`AppHandle::downgrade`] instead.
pub struct AppHandle<U> {
    pub(super) shared: Arc<Shared<U>>,
}

impl<U> Clone for AppHandle<U> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<U> AppHandle<U> {
    pub fn downgrade(&self) -> WeakAppHandle<U> {
        WeakAppHandle {
            shared: Arc::downgrade(&self.shared),
        }
    }
}

impl<U: HostedUi> AppHandle<U> {
    /// Append a `<style>` element with `css` to the document body.
    pub fn inject_css(&self, css: &str) -> ElementId {
        self.inject(Injection::Style(css))
    }

    /// Append an inline `<script>` element to the document body.
    pub fn inject_script(&self, script: &str) -> ElementId {
        self.inject(Injection::Script(script))
    }

    /// Append a `<script src=...>` element to the document body.
    pub fn inject_script_src(&self, url: &str) -> ElementId {
        self.inject(Injection::ScriptSrc(url))
    }

    /// Evaluate a JavaScript expression in the page.
    pub fn eval(&self, js: &str) -> Result<serde_json::Value, UiError> {
        self.shared.ui.eval(js)
    }

    pub fn navigate(&self, url: &str) -> Result<(), UiError> {
        self.shared.ui.navigate(url)
    }

    pub fn close(&self) -> Result<(), UiError> {
        self.shared.ui.close()
    }

    /// Fire-and-forget: the id is consumed even if evaluation fails.
    fn inject(&self, injection: Injection<'_>) -> ElementId {
        let id = self.shared.ids.next();
        let js = injection_snippet(id, &injection);
        if let Err(e) = self.shared.ui.eval(&js) {
            warn!(element = %id, error = %e, "failed to inject element");
        }
        id
    }
}

/// Non-owning [`AppHandle`]. Upgrading fails once the app has been dropped.
pub struct WeakAppHandle<U> {
    shared: Weak<Shared<U>>,
}

impl<U> Clone for WeakAppHandle<U> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<U> WeakAppHandle<U> {
    pub fn upgrade(&self) -> Option<AppHandle<U>> {
        self.shared.upgrade().map(|shared| AppHandle { shared })
    }
}
