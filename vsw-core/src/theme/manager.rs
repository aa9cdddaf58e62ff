//! Theme selection and favorites.

use super::catalog::{CatalogRegistry, ThemeFamily};
use super::enhancer::enhance_dark_theme_contrast;
use anyhow::{Context, Result};
use vsw_config::{ConfigStore, FavoriteTheme, FavoriteUpdate, SettingsStore, ThemeType};

/// What [`ThemeManager::set_theme`] wrote to the workspace settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppliedTheme {
    /// A catalog theme: name plus its color customizations.
    Custom {
        name: String,
        family: ThemeFamily,
        theme_type: ThemeType,
        enhanced: bool,
    },
    /// An editor built-in theme: name only, stale customizations cleared.
    BuiltIn { name: String },
}

impl AppliedTheme {
    pub fn name(&self) -> &str {
        match self {
            AppliedTheme::Custom { name, .. } | AppliedTheme::BuiltIn { name } => name,
        }
    }
}

/// Applies themes to a workspace and manages the user's favorites.
#[derive(Debug)]
pub struct ThemeManager {
    settings: SettingsStore,
    config: ConfigStore,
    catalogs: CatalogRegistry,
}

impl ThemeManager {
    pub fn new(settings: SettingsStore, config: ConfigStore, catalogs: CatalogRegistry) -> Self {
        Self {
            settings,
            config,
            catalogs,
        }
    }

    pub fn catalogs(&self) -> &CatalogRegistry {
        &self.catalogs
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn current_theme(&self) -> Option<String> {
        self.settings.current_theme()
    }

    /// Activate `theme_name` in the workspace.
    ///
    /// The name is always written. Catalog themes also get their colors (dark
    /// ones enhanced first); any other name clears earlier customizations.
    /// The theme is then recorded as last used for its type when the type is
    /// known from favorites or catalogs.
    pub fn set_theme(&self, theme_name: &str) -> Result<AppliedTheme> {
        self.settings
            .set_theme(theme_name)
            .with_context(|| format!("Failed to write theme name '{theme_name}'"))?;

        let applied = match self.catalogs.find_colors(theme_name) {
            Some((family, colors)) => {
                let theme_type = self.catalogs.theme_type(theme_name).unwrap_or_default();
                let enhanced = theme_type == ThemeType::Dark;
                let colors = if enhanced {
                    enhance_dark_theme_contrast(colors)
                        .with_context(|| format!("Failed to enhance contrast for '{theme_name}'"))?
                } else {
                    colors.clone()
                };

                self.settings
                    .set_color_customizations(colors.color_customizations(), colors.text_mate_rules()?)
                    .with_context(|| format!("Failed to write colors for '{theme_name}'"))?;

                AppliedTheme::Custom {
                    name: theme_name.to_string(),
                    family,
                    theme_type,
                    enhanced,
                }
            }
            None => {
                tracing::debug!(theme = theme_name, "no catalog colors, clearing customizations");
                self.settings
                    .clear_color_customizations()
                    .context("Failed to clear theme colors")?;
                AppliedTheme::BuiltIn {
                    name: theme_name.to_string(),
                }
            }
        };

        self.record_last_used(theme_name);
        Ok(applied)
    }

    fn record_last_used(&self, theme_name: &str) {
        let Some(theme_type) = self.theme_type(theme_name) else {
            return;
        };

        if let Err(err) = self.config.set_last_used_theme(theme_name, theme_type) {
            tracing::warn!(theme = theme_name, error = %err, "failed to record last used theme");
        }
    }

    /// Activate the last used theme of `theme_type`, falling back to the first
    /// favorite of that type. Returns `None` without touching the workspace
    /// when neither exists.
    pub fn set_theme_by_type(&self, theme_type: ThemeType) -> Result<Option<AppliedTheme>> {
        if let Some(last_used) = self.config.last_used_theme(theme_type) {
            tracing::debug!(theme = %last_used, %theme_type, "using last used theme");
            return self.set_theme(&last_used).map(Some);
        }

        let Some(favorite) = self.favorite_themes_by_type(theme_type).into_iter().next() else {
            tracing::debug!(%theme_type, "no last used or favorite theme of this type");
            return Ok(None);
        };

        let applied = self.set_theme(&favorite.name)?;
        self.config
            .set_last_used_theme(&favorite.name, theme_type)
            .with_context(|| format!("Failed to record '{}' as last used", favorite.name))?;
        Ok(Some(applied))
    }

    pub fn set_dark_theme(&self) -> Result<Option<AppliedTheme>> {
        self.set_theme_by_type(ThemeType::Dark)
    }

    pub fn set_light_theme(&self) -> Result<Option<AppliedTheme>> {
        self.set_theme_by_type(ThemeType::Light)
    }

    /// Favorite tag first, then catalog identity.
    ///
    /// This decides which last-used slot a theme fills. Whether colors are
    /// enhanced depends only on the catalog type, so a dark catalog theme
    /// pinned as a light favorite is still enhanced and is recorded as the
    /// last used light theme.
    pub fn theme_type(&self, theme_name: &str) -> Option<ThemeType> {
        self.config
            .read()
            .favorite(theme_name)
            .map(|favorite| favorite.theme_type)
            .or_else(|| self.catalogs.theme_type(theme_name))
    }

    pub fn add_favorite_theme(&self, theme_name: &str, theme_type: ThemeType) -> Result<FavoriteUpdate> {
        self.config
            .add_favorite_theme(theme_name, theme_type)
            .with_context(|| format!("Failed to add '{theme_name}' to favorites"))
    }

    pub fn remove_favorite_theme(&self, theme_name: &str) -> Result<bool> {
        self.config
            .remove_favorite_theme(theme_name)
            .with_context(|| format!("Failed to remove '{theme_name}' from favorites"))
    }

    pub fn favorite_themes(&self) -> Vec<FavoriteTheme> {
        self.config.favorite_themes()
    }

    pub fn favorite_themes_by_type(&self, theme_type: ThemeType) -> Vec<FavoriteTheme> {
        self.config
            .read()
            .favorites_by_type(theme_type)
            .cloned()
            .collect()
    }
}
