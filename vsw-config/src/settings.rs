//! Workspace editor settings (`.vscode/settings.json`)

use crate::constants::{defaults, settings_keys};
use crate::error::StoreError;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// The whole settings document. Keys this crate does not own are preserved.
pub type SettingsPayload = Map<String, Value>;

/// Store for the workspace settings document.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    settings_file: PathBuf,
}

impl SettingsStore {
    /// Settings at `<workspace>/.vscode/settings.json`.
    pub fn for_workspace(workspace: impl AsRef<Path>) -> Self {
        Self::with_file(
            workspace
                .as_ref()
                .join(defaults::SETTINGS_DIR_NAME)
                .join(defaults::SETTINGS_FILE_NAME),
        )
    }

    pub fn with_file(settings_file: impl Into<PathBuf>) -> Self {
        Self {
            settings_file: settings_file.into(),
        }
    }

    pub fn settings_file_path(&self) -> &Path {
        &self.settings_file
    }

    /// Create the settings directory and an empty `{}` document when missing.
    pub fn initialize(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.settings_file.parent() {
            fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
        }

        if self.settings_file.exists() {
            return Ok(());
        }

        tracing::info!(path = %self.settings_file.display(), "created editor settings file");
        self.write(&SettingsPayload::new())
    }

    /// Load the document strictly. A non-object top level is a parse error.
    pub fn load(&self) -> Result<SettingsPayload, StoreError> {
        self.initialize()?;
        let content = fs::read_to_string(&self.settings_file)
            .map_err(|err| StoreError::io(&self.settings_file, err))?;

        serde_json::from_str(&content).map_err(|err| StoreError::json(&self.settings_file, err))
    }

    /// Load the document, degrading to an empty object on any failure.
    pub fn read(&self) -> SettingsPayload {
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read editor settings, using an empty document");
                SettingsPayload::new()
            }
        }
    }

    /// Overwrite the whole document, pretty-printed with two-space indentation.
    pub fn write(&self, settings: &SettingsPayload) -> Result<(), StoreError> {
        if let Some(parent) = self.settings_file.parent() {
            fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
        }

        let content = serde_json::to_string_pretty(settings)
            .map_err(|err| StoreError::json(&self.settings_file, err))?;

        fs::write(&self.settings_file, content + "\n")
            .map_err(|err| StoreError::io(&self.settings_file, err))
    }

    /// Load strictly, mutate and write back the document. A document that
    /// does not parse is left untouched and the parse error is returned.
    pub fn update<F>(&self, updater: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut SettingsPayload),
    {
        let mut settings = self.load()?;
        updater(&mut settings);
        self.write(&settings)
    }

    pub fn current_theme(&self) -> Option<String> {
        self.read()
            .get(settings_keys::COLOR_THEME)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    pub fn set_theme(&self, theme_name: &str) -> Result<(), StoreError> {
        self.update(|settings| {
            settings.insert(
                settings_keys::COLOR_THEME.to_string(),
                Value::String(theme_name.to_string()),
            );
        })?;
        tracing::info!(theme = theme_name, "theme name written");
        Ok(())
    }

    /// Replace the color customizations and the token rule list.
    pub fn set_color_customizations(
        &self,
        colors: Map<String, Value>,
        token_rules: Value,
    ) -> Result<(), StoreError> {
        self.update(|settings| {
            settings.insert(
                settings_keys::COLOR_CUSTOMIZATIONS.to_string(),
                Value::Object(colors),
            );

            let mut token_customizations = Map::new();
            token_customizations.insert(settings_keys::TEXT_MATE_RULES.to_string(), token_rules);
            settings.insert(
                settings_keys::TOKEN_COLOR_CUSTOMIZATIONS.to_string(),
                Value::Object(token_customizations),
            );
        })?;
        tracing::info!("theme colors written");
        Ok(())
    }

    /// Drop any custom palette so a built-in theme is not shadowed by stale colors.
    pub fn clear_color_customizations(&self) -> Result<(), StoreError> {
        self.update(|settings| {
            settings.remove(settings_keys::COLOR_CUSTOMIZATIONS);
            settings.remove(settings_keys::TOKEN_COLOR_CUSTOMIZATIONS);
        })?;
        tracing::info!("theme colors cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn first_read_creates_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::for_workspace(temp_dir.path());

        assert!(store.read().is_empty());
        assert!(temp_dir.path().join(".vscode/settings.json").exists());
        assert_eq!(
            fs::read_to_string(store.settings_file_path()).unwrap().trim(),
            "{}"
        );
    }

    #[test]
    fn set_theme_preserves_unrelated_keys_and_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::for_workspace(temp_dir.path());
        store.initialize().unwrap();
        fs::write(
            store.settings_file_path(),
            r#"{"editor.tabSize": 4, "files.autoSave": "off"}"#,
        )
        .unwrap();

        store.set_theme("Horizon").unwrap();

        let settings = store.read();
        let keys: Vec<&str> = settings.keys().map(String::as_str).collect();
        assert_eq!(keys, ["editor.tabSize", "files.autoSave", "workbench.colorTheme"]);
        assert_eq!(store.current_theme().as_deref(), Some("Horizon"));
    }

    #[test]
    fn clearing_customizations_removes_both_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::for_workspace(temp_dir.path());
        let mut colors = Map::new();
        colors.insert("editor.background".into(), json!("#1a0000"));

        store
            .set_color_customizations(colors, json!([{"scope": "comment", "settings": {}}]))
            .unwrap();
        let settings = store.read();
        assert_eq!(
            settings["editor.tokenColorCustomizations"]["textMateRules"][0]["scope"],
            json!("comment")
        );

        store.clear_color_customizations().unwrap();
        let settings = store.read();
        assert!(!settings.contains_key("workbench.colorCustomizations"));
        assert!(!settings.contains_key("editor.tokenColorCustomizations"));
    }

    #[test]
    fn unreadable_document_degrades_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::for_workspace(temp_dir.path());
        store.initialize().unwrap();
        fs::write(store.settings_file_path(), "[1, 2, 3]").unwrap();

        assert!(store.load().is_err());
        assert!(store.read().is_empty());
        assert_eq!(store.current_theme(), None);
    }

    #[test]
    fn mutations_leave_unparseable_document_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::for_workspace(temp_dir.path());
        store.initialize().unwrap();
        let commented = "{\n  // keep tabs\n  \"editor.tabSize\": 4,\n  \"files.autoSave\": \"off\"\n}\n";
        fs::write(store.settings_file_path(), commented).unwrap();

        let error = store.set_theme("Horizon").unwrap_err();
        assert!(matches!(error, StoreError::Json { .. }));
        assert!(store.clear_color_customizations().is_err());
        assert!(
            store
                .set_color_customizations(Map::new(), json!([]))
                .is_err()
        );

        assert_eq!(
            fs::read_to_string(store.settings_file_path()).unwrap(),
            commented
        );
    }
}
