//! Persistence layer for the `vsw` theme switcher.
//!
//! Two JSON documents back every command:
//!
//! - the user-level [`Config`] (favorites and last-used pointers), managed by
//!   [`ConfigStore`] under `~/.vsw/config.json`;
//! - the workspace [`SettingsPayload`], managed by [`SettingsStore`] under
//!   `<workspace>/.vscode/settings.json`.
//!
//! Both stores are explicit values constructed with their base directory so
//! callers (and tests) decide where the files live.

pub mod constants;
pub mod dot_config;
pub mod error;
pub mod settings;
pub mod types;

pub use dot_config::{Config, ConfigStore, FavoriteUpdate, LastUsedThemes};
pub use error::StoreError;
pub use settings::{SettingsPayload, SettingsStore};
pub use types::{FavoriteTheme, ParseThemeTypeError, ThemeType};
