use serde::{Deserialize, Serialize};
use std::fmt;

/// Display mode of the hosted window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum WindowState {
    #[default]
    Normal,
    Maximized,
    Minimized,
    Fullscreen,
}

impl WindowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Maximized => "maximized",
            Self::Minimized => "minimized",
            Self::Fullscreen => "fullscreen",
        }
    }
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Window geometry and display mode, as persisted in `Window.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowBounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub window_state: WindowState,
}

impl WindowBounds {
    /// Bounds for a fresh window: origin, given size, normal state.
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            left: 0,
            top: 0,
            width,
            height,
            window_state: WindowState::Normal,
        }
    }
}

/// Document load progress as reported by `document.readyState`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
    /// Any value outside the three standard states, kept verbatim.
    Other(String),
}

impl ReadyState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Loading => "loading",
            Self::Interactive => "interactive",
            Self::Complete => "complete",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ReadyState {
    fn from(s: &str) -> Self {
        match s {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            "complete" => Self::Complete,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ReadyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of an element injected into the hosted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u64);

impl ElementId {
    /// The JavaScript variable name bound to the element.
    pub fn var_name(&self) -> String {
        format!("___{}", self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "___{}", self.0)
    }
}
