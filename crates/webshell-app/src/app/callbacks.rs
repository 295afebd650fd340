//! Lifecycle callback registration.

use webshell_webview::HostedUi;

use super::core::App;
use super::handle::AppHandle;

impl<U: HostedUi> App<U> {
    /// Run `f` each time the document becomes `interactive`.
    ///
    /// Callbacks run on the poller thread, in registration order, while the
    /// state lock is held. Registration after a transition does not replay it.
    pub fn on_interactive<F>(&self, f: F)
    where
        F: FnMut(&AppHandle<U>) + Send + Sync + 'static,
    {
        self.handle.shared.write_state().on_interactive.push(Box::new(f));
    }

    /// Run `f` each time the document becomes `complete`.
    ///
    /// Same threading and ordering rules as [`App::on_interactive`].
    pub fn on_ready<F>(&self, f: F)
    where
        F: FnMut(&AppHandle<U>) + Send + Sync + 'static,
    {
        self.handle.shared.write_state().on_ready.push(Box::new(f));
    }
}
