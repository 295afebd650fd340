//! Hosted UI bridge for webshell apps.
//!
//! Defines the surface a Chrome-based rendering host must provide:
//! - [`UiLauncher`] starts a window from a [`LaunchRequest`]
//! - [`HostedUi`] queries/applies bounds, evaluates script, navigates
//!   and signals when the window is gone
//! - [`inject`] builds the snippets that add styles and scripts to the page
//! - [`ready`] queries `document.readyState`

pub mod host;
pub mod inject;
pub mod ready;

pub use host::{HostedUi, LaunchRequest, UiLauncher};
pub use inject::{injection_snippet, IdAllocator, Injection};
pub use ready::{parse_ready_state, READY_STATE_QUERY};
