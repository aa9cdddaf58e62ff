//! Command-line argument definitions shared by the `vsw` binary.

pub mod args;

pub use args::{CatalogAction, CatalogArgs, Cli, Commands, TypeFlags};
