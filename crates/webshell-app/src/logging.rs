//! Tracing subscriber setup for embedding applications.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor an explicit directive is given.
pub const DEFAULT_DIRECTIVE: &str = "webshell_app=info,webshell_config=info";

/// Install a `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `directive` (or
/// [`DEFAULT_DIRECTIVE`]) is used. Returns `false` if a global subscriber
/// was already installed, which is not an error for an embedded shell.
pub fn init(directive: Option<&str>) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(directive.unwrap_or(DEFAULT_DIRECTIVE))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .try_init()
        .is_ok()
}
