//! Desktop app shell around a Chrome-based hosted UI.
//!
//! [`App`] opens the window through a [`UiLauncher`], restores the last
//! saved bounds, polls the window for geometry and `document.readyState`
//! changes on a background thread, and saves the bounds on disposal.
//!
//! ```rust,no_run
//! use webshell_app::{App, ShellError, UiLauncher};
//!
//! fn run(launcher: &impl UiLauncher) -> Result<(), ShellError> {
//!     let app = App::create(launcher, "MyApp", "http://localhost:8080", 800, 600)?;
//!     app.on_ready(|ui| {
//!         ui.inject_css("body { background: #111; }");
//!     });
//!     app.wait();
//!     Ok(())
//! }
//! ```

mod app;
pub mod logging;

pub use app::{App, AppHandle, Callback, WeakAppHandle};
pub use webshell_common::{ElementId, ReadyState, ShellError, WindowBounds, WindowState};
pub use webshell_config::ShellOptions;
pub use webshell_webview::{HostedUi, LaunchRequest, UiLauncher};
