//! App construction: resolve the app directory, restore bounds, launch.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{info, warn};
use webshell_common::{Result, ShellError};
use webshell_config::{bounds_store, paths, ShellOptions};
use webshell_webview::{HostedUi, LaunchRequest, UiLauncher};

use super::core::{App, Shared};
use super::poller::Poller;

impl<U: HostedUi> App<U> {
    /// Open a window for app `name` at `url` with default [`ShellOptions`].
    ///
    /// `width`/`height` only size a window that has no saved bounds yet.
    pub fn create<L>(launcher: &L, name: &str, url: &str, width: i32, height: i32) -> Result<Self>
    where
        L: UiLauncher<Ui = U>,
    {
        Self::create_with_options(launcher, name, url, width, height, ShellOptions::default())
    }

    /// Open a window for app `name` at `url`.
    ///
    /// 1. Resolves (and creates) the app directory.
    /// 2. Loads the saved bounds; a saved record overrides `width`/`height`,
    ///    otherwise the window starts at `{0, 0, width, height, normal}`.
    /// 3. Launches the hosted UI. Failure is the only error returned.
    /// 4. Applies the bounds (best-effort) and starts the poller.
    pub fn create_with_options<L>(
        launcher: &L,
        name: &str,
        url: &str,
        width: i32,
        height: i32,
        options: ShellOptions,
    ) -> Result<Self>
    where
        L: UiLauncher<Ui = U>,
    {
        let config_dir = resolve_app_dir(&options, name);
        let state_path = config_dir.join(&options.state_file);

        let bounds = bounds_store::load_or_default(&state_path, width, height);

        let request = LaunchRequest {
            url: url.to_string(),
            profile_dir: config_dir.clone(),
            width: bounds.width,
            height: bounds.height,
            flags: options.browser_flags.clone(),
        };
        let ui = launcher
            .launch(&request)
            .map_err(|e| ShellError::Initialization(e.to_string()))?;

        if let Err(e) = ui.set_bounds(&bounds) {
            warn!(error = %e, "failed to apply window bounds");
        }

        let handle = Shared::new(ui, bounds).into_handle();
        let poller = match Poller::spawn(handle.clone(), options.poll_interval) {
            Ok(poller) => poller,
            Err(e) => {
                let _ = handle.close();
                return Err(ShellError::Initialization(format!(
                    "failed to start poller thread: {e}"
                )));
            }
        };

        info!(
            app = name,
            url,
            width = bounds.width,
            height = bounds.height,
            state = %bounds.window_state,
            "app window created"
        );

        Ok(App {
            handle,
            config_dir,
            state_path,
            poller: Mutex::new(Some(poller)),
        })
    }
}

/// Resolve and create the app directory.
///
/// Never fails: if the directory can't be created the path is still used,
/// and persistence failures surface later as logged write errors.
fn resolve_app_dir(options: &ShellOptions, name: &str) -> PathBuf {
    match paths::ensure_app_dir(options, name) {
        Ok(dir) => dir,
        Err(e) => {
            warn!(error = %e, "app config directory unavailable");
            let root = options
                .config_root
                .clone()
                .or_else(|| paths::default_config_root().ok())
                .unwrap_or_default();
            paths::app_config_dir(&root, name)
        }
    }
}
