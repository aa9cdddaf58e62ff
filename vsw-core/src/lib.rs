//! # vsw-core - theme engine for the vsw editor theme switcher
//!
//! `vsw-core` holds everything between the command line and the two JSON
//! documents managed by [`vsw_config`]:
//!
//! - **Color engine** ([`utils::color_utils`]): hex parsing, WCAG relative
//!   luminance and contrast ratios, multiplicative lighten/darken and the
//!   iterative minimum-contrast search.
//! - **Theme model** ([`theme::definition`]): color payloads for custom themes.
//! - **Catalogs** ([`theme::catalog`]): the embedded pastel, vivid and color
//!   theme tables behind the [`ThemeCatalog`] trait.
//! - **Enhancer** ([`theme::enhancer`]): contrast fixes for dark themes.
//! - **Manager** ([`theme::manager`]): applies themes and tracks favorites.
//! - **CLI and UI** ([`cli`], [`ui`]): clap argument types, styled console
//!   output and interactive prompts.
//!
//! ## Quickstart
//!
//! ```rust,no_run
//! use vsw_config::{ConfigStore, SettingsStore};
//! use vsw_core::{CatalogRegistry, ThemeManager};
//!
//! fn main() -> anyhow::Result<()> {
//!     let manager = ThemeManager::new(
//!         SettingsStore::for_workspace("."),
//!         ConfigStore::new()?,
//!         CatalogRegistry::builtin()?,
//!     );
//!     manager.set_theme("Horizon")?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod theme;
pub mod ui;
pub mod utils;

pub use theme::catalog::{CatalogEntry, CatalogRegistry, StaticCatalog, ThemeCatalog, ThemeFamily, ThemeIdentity};
pub use theme::definition::{ColorPair, ScopeSelector, ThemeColorDefinition, TokenColorRule, TokenSettings};
pub use theme::enhancer::{CommentContrastReport, comment_contrast_report, enhance_dark_theme_contrast};
pub use theme::manager::{AppliedTheme, ThemeManager};
pub use theme::ThemeError;
pub use utils::color_utils::{ColorError, ContrastAdjustment};
