use anyhow::Result;
use vsw_config::{FavoriteUpdate, ThemeType};
use vsw_core::ThemeManager;
use vsw_core::ui::{ThemeChoice, ThemePrompter, styled};

pub fn handle_list_command(manager: &ThemeManager, filter: Option<ThemeType>) {
    let (heading, themes) = match filter {
        Some(theme_type) => (
            format!("{} themes:", theme_type.label()),
            manager.favorite_themes_by_type(theme_type),
        ),
        None => ("All favorite themes:".to_string(), manager.favorite_themes()),
    };

    styled::info(&heading);
    if themes.is_empty() {
        styled::warning("No themes found");
        return;
    }

    for theme in &themes {
        styled::theme(&theme.to_string());
    }
}

pub fn handle_add_command(
    manager: &ThemeManager,
    prompter: &dyn ThemePrompter,
    theme_name: &str,
    theme_type: Option<ThemeType>,
) -> Result<()> {
    let theme_type = match theme_type {
        Some(theme_type) => theme_type,
        None => match prompter.select_theme_type("Select theme type")? {
            Some(theme_type) => theme_type,
            None => return Ok(()),
        },
    };

    report_favorite_update(
        theme_name,
        theme_type,
        &manager.add_favorite_theme(theme_name, theme_type)?,
    );
    Ok(())
}

pub fn handle_remove_command(
    manager: &ThemeManager,
    prompter: &dyn ThemePrompter,
    theme_name: Option<&str>,
) -> Result<()> {
    let favorites = manager.favorite_themes();
    if favorites.is_empty() {
        styled::warning("No favorite themes found");
        return Ok(());
    }

    let theme_name = match theme_name {
        Some(name) => name.to_string(),
        None => {
            let choices: Vec<ThemeChoice> = favorites
                .iter()
                .map(|favorite| ThemeChoice::new(favorite.to_string(), favorite.name.as_str()))
                .collect();
            match prompter.select_theme("Select a theme to remove", &choices, None)? {
                Some(name) => name,
                None => return Ok(()),
            }
        }
    };

    if manager.remove_favorite_theme(&theme_name)? {
        styled::success(&format!("Removed \"{theme_name}\" from favorites"));
    } else {
        styled::warning(&format!("\"{theme_name}\" is not in favorites"));
    }
    Ok(())
}

pub(crate) fn report_favorite_update(theme_name: &str, theme_type: ThemeType, update: &FavoriteUpdate) {
    match update {
        FavoriteUpdate::Added => styled::success(&format!(
            "Added \"{theme_name}\" to favorites as {theme_type} theme"
        )),
        FavoriteUpdate::Updated { previous } if *previous == theme_type => {
            styled::info(&format!("\"{theme_name}\" is already a {theme_type} favorite"));
        }
        FavoriteUpdate::Updated { previous } => styled::success(&format!(
            "Updated \"{theme_name}\" from {previous} to {theme_type} theme"
        )),
    }
}
