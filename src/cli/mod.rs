use anyhow::Result;
use vsw_config::ThemeType;
use vsw_core::ThemeManager;
use vsw_core::cli::Commands;
use vsw_core::ui::ThemePrompter;

pub mod catalog;
pub mod contrast;
pub mod favorites;
pub mod theme;

/// Run one subcommand against `manager`.
pub fn dispatch(
    manager: &ThemeManager,
    prompter: &dyn ThemePrompter,
    command: &Commands,
) -> Result<()> {
    match command {
        Commands::Set { theme } => theme::handle_set_command(manager, prompter, theme.as_deref()),
        Commands::List { filter, .. } => {
            favorites::handle_list_command(manager, filter.theme_type());
            Ok(())
        }
        Commands::Add { theme, kind } => {
            favorites::handle_add_command(manager, prompter, theme, kind.theme_type())
        }
        Commands::Remove { theme } => {
            favorites::handle_remove_command(manager, prompter, theme.as_deref())
        }
        Commands::Current => {
            theme::handle_current_command(manager);
            Ok(())
        }
        Commands::Dark => theme::handle_type_command(manager, ThemeType::Dark),
        Commands::Light => theme::handle_type_command(manager, ThemeType::Light),
        Commands::Pastel(_) | Commands::Vivid(_) | Commands::Color(_) => match command.catalog() {
            Some((family, args)) => catalog::handle_catalog_command(manager, prompter, family, args),
            None => Ok(()),
        },
        Commands::Contrast { theme } => contrast::handle_contrast_command(manager, theme.as_deref()),
    }
}

/// Prefix for the one-line error printed when a command fails.
pub fn failure_context(command: &Commands) -> String {
    match command {
        Commands::Set { .. } => "Failed to set theme".to_string(),
        Commands::List { .. } => "Failed to list themes".to_string(),
        Commands::Add { .. } => "Failed to add theme".to_string(),
        Commands::Remove { .. } => "Failed to remove theme".to_string(),
        Commands::Current => "Failed to get current theme".to_string(),
        Commands::Dark => "Failed to set dark theme".to_string(),
        Commands::Light => "Failed to set light theme".to_string(),
        Commands::Contrast { .. } => "Failed to report contrast".to_string(),
        Commands::Pastel(_) | Commands::Vivid(_) | Commands::Color(_) => command
            .catalog()
            .map(|(family, _)| format!("Failed to handle {family} themes"))
            .unwrap_or_else(|| "Failed to handle themes".to_string()),
    }
}
