//! Document readiness query.

use webshell_common::ReadyState;

/// Expression evaluated against the page on every poll.
pub const READY_STATE_QUERY: &str = "window.document.readyState";

/// Interpret the query result. Anything but a string is not a state.
pub fn parse_ready_state(value: &serde_json::Value) -> Option<ReadyState> {
    value.as_str().map(ReadyState::from)
}
