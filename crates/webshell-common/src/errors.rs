use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config write error: {0}")]
    WriteError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("failed to launch hosted ui: {0}")]
    Launch(String),

    #[error("eval error: {0}")]
    Eval(String),

    #[error("bounds error: {0}")]
    Bounds(String),

    #[error("hosted ui is closed")]
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("initialization error: {0}")]
    Initialization(String),
}
