//! Window-state persistence for webshell apps.
//!
//! Resolves the per-app config directory, loads and saves the
//! `Window.json` bounds record, and carries the tunable [`ShellOptions`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use webshell_config::{bounds_store, paths, ShellOptions};
//!
//! let options = ShellOptions::default();
//! let dir = paths::ensure_app_dir(&options, "MyApp").expect("no config dir");
//! let path = dir.join(&options.state_file);
//! let bounds = bounds_store::load_or_default(&path, 800, 600);
//! println!("{}x{}", bounds.width, bounds.height);
//! ```

pub mod bounds_store;
pub mod options;
pub mod paths;

pub use bounds_store::{load_bounds, load_or_default, save_bounds};
pub use options::{ShellOptions, DEFAULT_POLL_INTERVAL, DEFAULT_STATE_FILE};
pub use paths::{app_config_dir, default_config_root, ensure_app_dir};
