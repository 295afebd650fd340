pub mod errors;
pub mod types;

pub use errors::{ConfigError, ShellError, UiError};
pub use types::{ElementId, ReadyState, WindowBounds, WindowState};

pub type Result<T> = std::result::Result<T, ShellError>;
