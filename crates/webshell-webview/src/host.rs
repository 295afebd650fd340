use std::path::PathBuf;

use webshell_common::{UiError, WindowBounds};

/// Everything a launcher needs to open a hosted window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Initial URL to load.
    pub url: String,
    /// Browser profile directory (the app's config directory).
    pub profile_dir: PathBuf,
    pub width: i32,
    pub height: i32,
    /// Extra command-line flags for the browser process.
    pub flags: Vec<String>,
}

/// A running Chrome-based window driven by the shell.
///
/// Implementations must be shareable across threads: the poller queries
/// bounds and evaluates the ready-state query from its own thread while
/// the embedding thread injects script or blocks in [`HostedUi::wait_done`].
pub trait HostedUi: Send + Sync + 'static {
    /// Current window geometry and display mode.
    fn bounds(&self) -> Result<WindowBounds, UiError>;

    /// Move/resize the window and apply its display mode.
    fn set_bounds(&self, bounds: &WindowBounds) -> Result<(), UiError>;

    /// Evaluate a JavaScript expression in the page and return its value.
    fn eval(&self, js: &str) -> Result<serde_json::Value, UiError>;

    /// Load a new URL in the page.
    fn navigate(&self, url: &str) -> Result<(), UiError>;

    /// Ask the window to close. [`HostedUi::wait_done`] returns afterwards.
    fn close(&self) -> Result<(), UiError>;

    /// Block until the window has been closed, by the user or by `close`.
    fn wait_done(&self);
}

/// Opens hosted windows.
pub trait UiLauncher {
    type Ui: HostedUi;

    fn launch(&self, request: &LaunchRequest) -> Result<Self::Ui, UiError>;
}

impl<F, U> UiLauncher for F
where
    F: Fn(&LaunchRequest) -> Result<U, UiError>,
    U: HostedUi,
{
    type Ui = U;

    fn launch(&self, request: &LaunchRequest) -> Result<U, UiError> {
        self(request)
    }
}
