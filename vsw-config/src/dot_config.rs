//! Dot folder configuration: favorites and last-used themes stored in `~/.vsw/`

use crate::constants::defaults;
use crate::error::StoreError;
use crate::types::{FavoriteTheme, ThemeType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User-level configuration persisted as `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub favorite_themes: Vec<FavoriteTheme>,
    #[serde(default)]
    pub last_used: LastUsedThemes,
}

/// Most recently activated theme name per [`ThemeType`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastUsedThemes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
}

impl LastUsedThemes {
    pub fn get(&self, theme_type: ThemeType) -> Option<&str> {
        match theme_type {
            ThemeType::Dark => self.dark.as_deref(),
            ThemeType::Light => self.light.as_deref(),
        }
    }

    pub fn set(&mut self, theme_type: ThemeType, name: impl Into<String>) {
        let slot = match theme_type {
            ThemeType::Dark => &mut self.dark,
            ThemeType::Light => &mut self.light,
        };
        *slot = Some(name.into());
    }
}

/// What [`Config::add_favorite`] did with the requested entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteUpdate {
    Added,
    /// The name was already a favorite; its type was overwritten in place.
    Updated { previous: ThemeType },
}

impl Config {
    /// Insert a favorite, or overwrite the type of an existing entry with the
    /// same name without changing its position.
    pub fn add_favorite(&mut self, name: &str, theme_type: ThemeType) -> FavoriteUpdate {
        match self.favorite_themes.iter_mut().find(|theme| theme.name == name) {
            Some(existing) => {
                let previous = existing.theme_type;
                existing.theme_type = theme_type;
                FavoriteUpdate::Updated { previous }
            }
            None => {
                self.favorite_themes
                    .push(FavoriteTheme::new(name, theme_type));
                FavoriteUpdate::Added
            }
        }
    }

    /// Remove every favorite named `name`. Returns whether anything was removed.
    pub fn remove_favorite(&mut self, name: &str) -> bool {
        let before = self.favorite_themes.len();
        self.favorite_themes.retain(|theme| theme.name != name);
        self.favorite_themes.len() != before
    }

    pub fn favorite(&self, name: &str) -> Option<&FavoriteTheme> {
        self.favorite_themes.iter().find(|theme| theme.name == name)
    }

    pub fn favorites_by_type(&self, theme_type: ThemeType) -> impl Iterator<Item = &FavoriteTheme> {
        self.favorite_themes
            .iter()
            .filter(move |theme| theme.theme_type == theme_type)
    }
}

/// Store for the user-level [`Config`] document.
///
/// Reads degrade to [`Config::default`] when the file cannot be read or parsed,
/// so a corrupt file never blocks listing. Mutations load strictly and never
/// overwrite a file they could not parse.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root_dir: PathBuf,
}

impl ConfigStore {
    /// Store rooted at `$HOME/.vsw`.
    pub fn new() -> Result<Self, StoreError> {
        let home_dir = dirs::home_dir().ok_or(StoreError::HomeDirNotFound)?;
        Ok(Self::with_home_dir(home_dir))
    }

    /// Store rooted at `<home_dir>/.vsw`. Useful for tests or alternate homes.
    pub fn with_home_dir(home_dir: impl AsRef<Path>) -> Self {
        Self::with_root_dir(home_dir.as_ref().join(defaults::CONFIG_DIR_NAME))
    }

    /// Store using a fully-qualified root directory.
    pub fn with_root_dir(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn config_file_path(&self) -> PathBuf {
        self.root_dir.join(defaults::CONFIG_FILE_NAME)
    }

    /// Create the root directory and a default config file when missing.
    pub fn initialize(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root_dir).map_err(|err| StoreError::io(&self.root_dir, err))?;

        if self.config_file_path().exists() {
            return Ok(());
        }

        tracing::debug!(path = %self.config_file_path().display(), "creating default config");
        self.write(&Config::default())
    }

    /// Load the configuration strictly, surfacing IO and parse errors.
    pub fn load(&self) -> Result<Config, StoreError> {
        self.initialize()?;
        let config_file = self.config_file_path();
        let content =
            fs::read_to_string(&config_file).map_err(|err| StoreError::io(&config_file, err))?;

        serde_json::from_str(&content).map_err(|err| StoreError::json(&config_file, err))
    }

    /// Load the configuration, falling back to defaults on any failure.
    pub fn read(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read configuration, using defaults");
                Config::default()
            }
        }
    }

    /// Persist the whole document, pretty-printed.
    pub fn write(&self, config: &Config) -> Result<(), StoreError> {
        let config_file = self.config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|err| StoreError::json(&config_file, err))?;

        fs::write(&config_file, content + "\n").map_err(|err| StoreError::io(&config_file, err))
    }

    /// Load strictly, mutate and write back the configuration. A file that
    /// does not parse is left untouched and the parse error is returned.
    pub fn update<F, T>(&self, updater: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Config) -> T,
    {
        let mut config = self.load()?;
        let outcome = updater(&mut config);
        self.write(&config)?;
        Ok(outcome)
    }

    pub fn favorite_themes(&self) -> Vec<FavoriteTheme> {
        self.read().favorite_themes
    }

    pub fn add_favorite_theme(
        &self,
        name: &str,
        theme_type: ThemeType,
    ) -> Result<FavoriteUpdate, StoreError> {
        self.update(|config| config.add_favorite(name, theme_type))
    }

    pub fn remove_favorite_theme(&self, name: &str) -> Result<bool, StoreError> {
        self.update(|config| config.remove_favorite(name))
    }

    pub fn last_used_theme(&self, theme_type: ThemeType) -> Option<String> {
        self.read().last_used.get(theme_type).map(str::to_string)
    }

    pub fn set_last_used_theme(&self, name: &str, theme_type: ThemeType) -> Result<(), StoreError> {
        self.update(|config| config.last_used.set(theme_type, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> ConfigStore {
        ConfigStore::with_root_dir(temp_dir.path().join(".vsw"))
    }

    #[test]
    fn first_read_creates_default_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        assert!(!store.config_file_path().exists());

        let config = store.read();

        assert_eq!(config, Config::default());
        assert!(store.config_file_path().exists());
        let content = fs::read_to_string(store.config_file_path()).unwrap();
        assert!(content.contains("\"favoriteThemes\": []"));
    }

    #[test]
    fn home_dir_constructor_appends_dot_folder() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::with_home_dir(temp_dir.path());
        assert!(store.root_dir().ends_with(".vsw"));
        assert!(store.config_file_path().ends_with(".vsw/config.json"));
    }

    #[test]
    fn corrupt_file_degrades_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        store.initialize().unwrap();
        fs::write(store.config_file_path(), "{ not json").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Json { .. })));
        assert_eq!(store.read(), Config::default());
    }

    #[test]
    fn mutations_keep_favorites_of_unparseable_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        store.initialize().unwrap();
        let seeded = r#"{"favoriteThemes":[{"name":"Horizon","type":"dark"},{"name":"Ayu","type":"dim"}]}"#;
        fs::write(store.config_file_path(), seeded).unwrap();

        assert!(matches!(
            store.add_favorite_theme("Candy", ThemeType::Light),
            Err(StoreError::Json { .. })
        ));
        assert!(store.remove_favorite_theme("Horizon").is_err());
        assert!(store.set_last_used_theme("Horizon", ThemeType::Dark).is_err());

        assert_eq!(fs::read_to_string(store.config_file_path()).unwrap(), seeded);
    }

    #[test]
    fn re_adding_favorite_updates_type_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        assert_eq!(
            store.add_favorite_theme("Horizon", ThemeType::Dark).unwrap(),
            FavoriteUpdate::Added
        );
        store.add_favorite_theme("Ayu Light", ThemeType::Light).unwrap();
        assert_eq!(
            store.add_favorite_theme("Horizon", ThemeType::Light).unwrap(),
            FavoriteUpdate::Updated {
                previous: ThemeType::Dark
            }
        );

        assert_eq!(
            store.favorite_themes(),
            vec![
                FavoriteTheme::new("Horizon", ThemeType::Light),
                FavoriteTheme::new("Ayu Light", ThemeType::Light),
            ]
        );
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        store.add_favorite_theme("Horizon", ThemeType::Dark).unwrap();

        assert!(!store.remove_favorite_theme("Monokai").unwrap());
        assert!(store.remove_favorite_theme("Horizon").unwrap());
        assert!(store.favorite_themes().is_empty());
    }

    #[test]
    fn last_used_is_tracked_per_type() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.set_last_used_theme("Horizon", ThemeType::Dark).unwrap();
        store.set_last_used_theme("Ayu Light", ThemeType::Light).unwrap();
        store.set_last_used_theme("Synthwave", ThemeType::Dark).unwrap();

        assert_eq!(store.last_used_theme(ThemeType::Dark).as_deref(), Some("Synthwave"));
        assert_eq!(store.last_used_theme(ThemeType::Light).as_deref(), Some("Ayu Light"));
    }

    #[test]
    fn document_without_last_used_still_parses() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        store.initialize().unwrap();
        fs::write(
            store.config_file_path(),
            r#"{"favoriteThemes":[{"name":"Horizon","type":"dark"}]}"#,
        )
        .unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.favorite_themes.len(), 1);
        assert_eq!(config.last_used, LastUsedThemes::default());
    }
}
