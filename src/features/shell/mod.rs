//! Shell integration.

mod completions;

pub use completions::generate_completions;
