use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use vsw_config::{ConfigStore, SettingsStore};
use vsw_core::cli::Cli;
use vsw_core::{CatalogRegistry, ThemeManager};

/// Paths resolved once from flags, environment and defaults.
#[derive(Debug, Clone)]
pub struct StartupContext {
    pub workspace: PathBuf,
    pub config_dir: PathBuf,
}

impl StartupContext {
    pub fn from_cli_args(args: &Cli) -> Result<Self> {
        let workspace = resolve_workspace_path(args.workspace.clone())
            .context("Failed to resolve workspace directory")?;

        if !workspace.is_dir() {
            bail!(
                "Workspace path '{}' does not exist or is not a directory.",
                workspace.display()
            );
        }

        let config_dir = resolve_config_dir(args.config_dir.clone())
            .context("Failed to resolve configuration directory")?;

        tracing::debug!(
            workspace = %workspace.display(),
            config_dir = %config_dir.display(),
            "startup paths resolved"
        );

        Ok(Self {
            workspace,
            config_dir,
        })
    }

    pub fn settings_store(&self) -> SettingsStore {
        SettingsStore::for_workspace(&self.workspace)
    }

    pub fn config_store(&self) -> ConfigStore {
        ConfigStore::with_root_dir(&self.config_dir)
    }

    pub fn theme_manager(&self) -> Result<ThemeManager> {
        let catalogs = CatalogRegistry::builtin().context("Failed to load theme catalogs")?;
        Ok(ThemeManager::new(
            self.settings_store(),
            self.config_store(),
            catalogs,
        ))
    }
}

fn resolve_workspace_path(workspace_arg: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to determine current working directory")?;

    let mut resolved = match workspace_arg {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd,
    };

    if resolved.exists() {
        resolved = resolved.canonicalize().with_context(|| {
            format!(
                "Failed to canonicalize workspace path {}",
                resolved.display()
            )
        })?;
    }

    Ok(resolved)
}

fn resolve_config_dir(config_dir_arg: Option<PathBuf>) -> Result<PathBuf> {
    match config_dir_arg {
        Some(path) if path.is_absolute() => Ok(path),
        Some(path) => Ok(std::env::current_dir()
            .context("Failed to determine current working directory")?
            .join(path)),
        None => ConfigStore::new()
            .map(|store| store.root_dir().to_path_buf())
            .context("Pass --config-dir to choose a configuration directory"),
    }
}
