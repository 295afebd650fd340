//! Tunable options for an app shell.

use std::path::PathBuf;
use std::time::Duration;

/// Cadence of the background poller.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// File name of the persisted bounds record inside the app directory.
pub const DEFAULT_STATE_FILE: &str = "Window.json";

/// Extra command-line flags handed to the hosted browser by default.
pub const DEFAULT_BROWSER_FLAGS: &[&str] = &["--enable-extensions"];

/// Options controlling where state lives and how the shell polls.
///
/// All fields have defaults, so callers only override what they need:
///
/// ```rust
/// use std::time::Duration;
/// use webshell_config::ShellOptions;
///
/// let options = ShellOptions::default().with_poll_interval(Duration::from_millis(50));
/// assert_eq!(options.state_file, "Window.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    /// Delay between poller iterations.
    pub poll_interval: Duration,
    /// Flags passed to the hosted UI on launch.
    pub browser_flags: Vec<String>,
    /// Overrides the platform config directory as the parent of app dirs.
    pub config_root: Option<PathBuf>,
    /// Name of the bounds record file.
    pub state_file: String,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            browser_flags: DEFAULT_BROWSER_FLAGS.iter().map(|f| f.to_string()).collect(),
            config_root: None,
            state_file: DEFAULT_STATE_FILE.to_string(),
        }
    }
}

impl ShellOptions {
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_config_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config_root = Some(root.into());
        self
    }

    pub fn with_browser_flag(mut self, flag: impl Into<String>) -> Self {
        self.browser_flags.push(flag.into());
        self
    }

    pub fn with_state_file(mut self, name: impl Into<String>) -> Self {
        self.state_file = name.into();
        self
    }
}
