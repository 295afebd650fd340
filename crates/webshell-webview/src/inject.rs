//! Snippets that append `<style>` and `<script>` elements to the page.
//!
//! Every injected element is bound to a fresh global `___<id>` so repeated
//! injections never collide. Payloads are embedded as JSON string literals,
//! which are valid JavaScript and cannot terminate the surrounding code.

use std::sync::atomic::{AtomicU64, Ordering};

use webshell_common::ElementId;

/// What to add to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection<'a> {
    /// Inline stylesheet text.
    Style(&'a str),
    /// Inline script source.
    Script(&'a str),
    /// Script loaded from a URL.
    ScriptSrc(&'a str),
}

impl Injection<'_> {
    fn tag(&self) -> &'static str {
        match self {
            Self::Style(_) => "style",
            Self::Script(_) | Self::ScriptSrc(_) => "script",
        }
    }

    fn property(&self) -> &'static str {
        match self {
            Self::Style(_) | Self::Script(_) => "innerHTML",
            Self::ScriptSrc(_) => "src",
        }
    }

    fn payload(&self) -> &str {
        match self {
            Self::Style(s) | Self::Script(s) | Self::ScriptSrc(s) => s,
        }
    }
}

/// Build the snippet that creates, fills and appends the element for `id`.
pub fn injection_snippet(id: ElementId, injection: &Injection<'_>) -> String {
    let var = id.var_name();
    let literal =
        serde_json::to_string(injection.payload()).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "let {var}=document.createElement(\"{tag}\");{var}.{prop}={literal};document.body.appendChild({var});",
        tag = injection.tag(),
        prop = injection.property(),
    )
}

/// Hands out element ids: starts at 1, strictly increasing, never reused.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> ElementId {
        ElementId(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
