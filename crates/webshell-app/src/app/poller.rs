//! Background loop mirroring window bounds and `document.readyState`.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, info, warn};
use webshell_common::ReadyState;
use webshell_webview::{parse_ready_state, HostedUi, READY_STATE_QUERY};

use super::handle::AppHandle;

/// Handle to the running poller thread.
///
/// Dropping `stop_tx` disconnects the channel the loop sleeps on, which
/// ends the loop after the current iteration.
pub(crate) struct Poller {
    stop_tx: mpsc::Sender<()>,
    thread: JoinHandle<()>,
}

impl Poller {
    pub(crate) fn spawn<U: HostedUi>(
        handle: AppHandle<U>,
        interval: Duration,
    ) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let thread = std::thread::Builder::new()
            .name("webshell-poller".into())
            .spawn(move || {
                debug!(interval_ms = interval.as_millis() as u64, "poller started");
                loop {
                    sync_bounds(&handle);
                    check_ready_state(&handle);

                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })?;

        Ok(Self { stop_tx, thread })
    }

    /// Signal the loop and wait for it to exit.
    ///
    /// Must not be called from the poller thread itself.
    pub(crate) fn stop(self) {
        let _ = self.stop_tx.send(());
        if self.thread.join().is_err() {
            warn!("poller thread panicked");
        } else {
            info!("poller stopped");
        }
    }
}

/// Copy the window's bounds into the shared state. Failures keep the old value.
fn sync_bounds<U: HostedUi>(handle: &AppHandle<U>) {
    match handle.shared.ui.bounds() {
        Ok(bounds) => {
            let mut state = handle.shared.write_state();
            if state.bounds != bounds {
                debug!(?bounds, "window bounds changed");
                state.bounds = bounds;
            }
        }
        Err(e) => debug!(error = %e, "bounds query failed"),
    }
}

/// Query `document.readyState` and fire callbacks on a transition into
/// `interactive` or `complete`.
///
/// A panicking callback is logged and skipped; the loop keeps running.
fn check_ready_state<U: HostedUi>(handle: &AppHandle<U>) {
    let value = match handle.shared.ui.eval(READY_STATE_QUERY) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "ready state query failed");
            return;
        }
    };
    let Some(next) = parse_ready_state(&value) else {
        debug!(%value, "ready state query returned a non-string");
        return;
    };

    let mut state = handle.shared.write_state();
    if state.ready_state == next {
        return;
    }
    debug!(from = %state.ready_state, to = %next, "ready state changed");
    state.ready_state = next.clone();

    let callbacks = match next {
        ReadyState::Interactive => &mut state.on_interactive,
        ReadyState::Complete => &mut state.on_ready,
        ReadyState::Loading | ReadyState::Other(_) => return,
    };
    for (index, callback) in callbacks.iter_mut().enumerate() {
        if let Err(panic) = panic::catch_unwind(AssertUnwindSafe(|| callback(handle))) {
            warn!(
                state = %next,
                index,
                reason = panic_message(panic.as_ref()),
                "lifecycle callback panicked"
            );
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic>")
}
