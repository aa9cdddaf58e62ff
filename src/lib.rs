//! # vsw - VSCode theme switcher
//!
//! `vsw` switches the color theme of a VSCode workspace from the terminal and
//! keeps a list of favorite themes for quick dark/light toggling.
//!
//! ## Highlights
//!
//! - **Workspace scoped**: edits `<workspace>/.vscode/settings.json` and leaves
//!   every unrelated setting untouched.
//! - **Favorites**: `~/.vsw/config.json` stores favorites and the last theme
//!   used for each of dark and light.
//! - **Readable dark themes**: comments and input text in dark catalog themes
//!   are raised to a WCAG contrast ratio of 5:1 before being written.
//!
//! ## Quickstart
//!
//! ```bash
//! vsw add "Horizon" --dark
//! vsw add "Ayu Light" --light
//! vsw dark
//! vsw pastel --list
//! vsw contrast "Ruby Red"
//! ```
//!
//! ## Architecture Overview
//!
//! - `vsw-config/` owns the two JSON stores and shared constants.
//! - `vsw-core/` holds the color engine, theme catalogs, enhancer, theme
//!   manager, clap argument types and console UI helpers.
//! - `src/main.rs` wires startup, logging and the command handlers in
//!   `src/cli/`.

pub mod startup;
