use anyhow::{Result, anyhow};
use vsw_core::cli::{CatalogAction, CatalogArgs};
use vsw_core::ui::{ThemeChoice, ThemePrompter, styled};
use vsw_core::{ThemeFamily, ThemeManager};

use super::favorites::report_favorite_update;
use super::theme::apply_theme;

/// `vsw pastel|vivid|color`: list a family, or pick one of its themes to apply
/// and pin as a favorite.
pub fn handle_catalog_command(
    manager: &ThemeManager,
    prompter: &dyn ThemePrompter,
    family: ThemeFamily,
    args: CatalogArgs,
) -> Result<()> {
    let catalog = manager
        .catalogs()
        .catalog(family)
        .ok_or_else(|| anyhow!("No {family} theme catalog is registered"))?;

    match args.action() {
        CatalogAction::ListAll => {
            styled::info(&format!("Available {family} themes:"));
            for theme in catalog.themes() {
                styled::theme(&format!("{theme} - {}", theme.description));
            }
        }
        CatalogAction::ListType(theme_type) => {
            styled::info(&format!("{} {family} themes:", theme_type.label()));
            let themes = catalog.themes_by_type(theme_type);
            if themes.is_empty() {
                styled::warning("No themes found");
            }
            for theme in themes {
                styled::theme(&format!("{} - {}", theme.name, theme.description));
            }
        }
        CatalogAction::Select => {
            let choices: Vec<ThemeChoice> = catalog
                .themes()
                .into_iter()
                .map(|theme| {
                    ThemeChoice::new(
                        format!("{theme} - {}", theme.description),
                        theme.name.as_str(),
                    )
                })
                .collect();

            let Some(selected) =
                prompter.select_theme(&format!("Select a {family} theme"), &choices, None)?
            else {
                return Ok(());
            };

            apply_theme(manager, &selected)?;

            if let Some(theme_type) = catalog.identity(&selected).map(|identity| identity.theme_type) {
                let update = manager.add_favorite_theme(&selected, theme_type)?;
                report_favorite_update(&selected, theme_type, &update);
            }
        }
    }

    Ok(())
}
