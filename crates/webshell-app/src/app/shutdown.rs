//! Waiting for the window to close and persisting bounds.

use std::sync::PoisonError;

use tracing::{info, warn};
use webshell_config::bounds_store;
use webshell_webview::HostedUi;

use super::core::App;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl<U: HostedUi> App<U> {
    /// Block until the hosted window closes, then [`dispose`](Self::dispose).
    pub fn wait(self) {
        self.handle.shared.ui.wait_done();
        info!("hosted window closed");
        self.dispose();
    }

    /// Stop the poller and save the current bounds to the app directory.
    ///
    /// Write failures are logged, never returned. Safe to call more than once.
    /// Must not be called from inside a lifecycle callback.
    pub fn dispose(&self) {
        self.stop_poller();

        let state = self.handle.shared.write_state();
        match bounds_store::save_bounds(&state.bounds, &self.state_path) {
            Ok(()) => info!(path = %self.state_path.display(), "window bounds saved"),
            Err(e) => warn!(error = %e, "failed to save window bounds"),
        }
    }

    fn stop_poller(&self) {
        let poller = self
            .poller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(poller) = poller {
            poller.stop();
        }
    }
}

impl<U: HostedUi> Drop for App<U> {
    /// Stops the poller without touching the saved bounds.
    fn drop(&mut self) {
        self.stop_poller();
    }
}
