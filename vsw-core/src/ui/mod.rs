//! Console output and interactive prompts.

pub mod prompts;
pub mod styled;

pub use prompts::{DialoguerPrompter, ThemeChoice, ThemePrompter};
