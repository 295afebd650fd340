//! `Window.json` loading and saving.

mod loader;
mod writer;

#[cfg(test)]
mod tests;

pub use loader::{load_bounds, load_or_default};
pub use writer::save_bounds;
