use anyhow::Result;
use vsw_config::ThemeType;
use vsw_core::ui::{ThemeChoice, ThemePrompter, styled};
use vsw_core::{AppliedTheme, ThemeManager};

pub fn handle_set_command(
    manager: &ThemeManager,
    prompter: &dyn ThemePrompter,
    theme: Option<&str>,
) -> Result<()> {
    let theme_name = match theme {
        Some(name) => name.to_string(),
        None => {
            let favorites = manager.favorite_themes();
            if favorites.is_empty() {
                styled::warning("No favorite themes found. Add themes with \"vsw add <theme-name>\"");
                return Ok(());
            }

            let current = manager.current_theme();
            let default = current
                .as_deref()
                .and_then(|current| favorites.iter().position(|favorite| favorite.name == current));
            let choices: Vec<ThemeChoice> = favorites
                .iter()
                .map(|favorite| ThemeChoice::new(favorite.to_string(), favorite.name.as_str()))
                .collect();

            match prompter.select_theme("Select a theme", &choices, default)? {
                Some(name) => name,
                None => return Ok(()),
            }
        }
    };

    apply_theme(manager, &theme_name)?;
    Ok(())
}

pub fn handle_current_command(manager: &ThemeManager) {
    match manager.current_theme() {
        Some(theme) => styled::info(&format!("Current theme: {theme}")),
        None => styled::warning("No theme set"),
    }
}

pub fn handle_type_command(manager: &ThemeManager, theme_type: ThemeType) -> Result<()> {
    match manager.set_theme_by_type(theme_type)? {
        Some(applied) => report_applied(&applied),
        None => styled::warning(&format!("No {theme_type} themes found in favorites")),
    }
    Ok(())
}

/// Write `theme_name` to the workspace and print what was applied.
pub(crate) fn apply_theme(manager: &ThemeManager, theme_name: &str) -> Result<AppliedTheme> {
    let applied = manager.set_theme(theme_name)?;
    report_applied(&applied);
    Ok(applied)
}

fn report_applied(applied: &AppliedTheme) {
    styled::success(&format!("Theme set to \"{}\"", applied.name()));

    if let AppliedTheme::Custom {
        name,
        family,
        enhanced,
        ..
    } = applied
    {
        let suffix = if *enhanced { " with enhanced contrast" } else { "" };
        styled::success(&format!("Applied {family} custom colors for \"{name}\"{suffix}"));
    }
}
