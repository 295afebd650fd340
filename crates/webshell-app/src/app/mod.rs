//! The app shell: construction, callbacks, polling and shutdown.
//!
//! Split by concern the same way the struct's `impl` blocks are:
//! - `core`: the [`App`] struct and the lock-guarded shared state
//! - `handle`: [`AppHandle`], the lock-free view handed to callbacks
//! - `init`: window creation and bounds restore
//! - `callbacks`: lifecycle callback registration
//! - `poller`: the background bounds/ready-state loop
//! - `shutdown`: `wait`, `dispose` and drop

mod callbacks;
mod core;
mod handle;
mod init;
mod poller;
mod shutdown;

#[cfg(test)]
mod fake_ui;

pub use self::core::{App, Callback};
pub use self::handle::{AppHandle, WeakAppHandle};
