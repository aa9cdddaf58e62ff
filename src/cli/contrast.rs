use anyhow::Result;
use vsw_config::ThemeType;
use vsw_config::constants::contrast::ENHANCED_MIN_CONTRAST_RATIO;
use vsw_core::ui::styled;
use vsw_core::{ThemeColorDefinition, ThemeManager, comment_contrast_report};

/// Show how comment contrast changes for one catalog theme, or for every dark
/// catalog theme when no name is given. Nothing is written.
pub fn handle_contrast_command(manager: &ThemeManager, theme: Option<&str>) -> Result<()> {
    let catalogs = manager.catalogs();

    match theme {
        Some(name) => {
            let Some((_, colors)) = catalogs.find_colors(name) else {
                styled::warning(&format!("No custom colors found for \"{name}\""));
                return Ok(());
            };
            if catalogs.theme_type(name) == Some(ThemeType::Light) {
                styled::info(&format!(
                    "\"{name}\" is a light theme; its colors are applied without enhancement"
                ));
            }
            print_report(name, colors)?;
        }
        None => {
            let dark_themes = catalogs
                .custom_themes()
                .filter(|(identity, _)| identity.theme_type == ThemeType::Dark);
            for (identity, colors) in dark_themes {
                print_report(&identity.name, colors)?;
            }
        }
    }

    Ok(())
}

fn print_report(name: &str, colors: &ThemeColorDefinition) -> Result<()> {
    styled::header(&format!("Comment contrast for {name}"));

    let Some(report) = comment_contrast_report(colors)? else {
        styled::warning("No comment color defined");
        return Ok(());
    };

    styled::info(&format!("Background: {}", styled::swatch(&report.background)));
    styled::info(&format!(
        "Original:   {} ({:.2}:1)",
        styled::swatch(&report.original),
        report.original_ratio
    ));
    styled::info(&format!(
        "Enhanced:   {} ({:.2}:1)",
        styled::swatch(&report.enhanced),
        report.enhanced_ratio
    ));

    if report.steps == 0 {
        styled::success(&format!(
            "Already meets {ENHANCED_MIN_CONTRAST_RATIO:.1}:1"
        ));
    } else if report.meets_target() {
        styled::success(&format!(
            "Improved by {:.1}% in {} steps",
            report.improvement_percent(),
            report.steps
        ));
    } else {
        styled::warning(&format!(
            "Reached {:.2}:1 after {} steps, below {ENHANCED_MIN_CONTRAST_RATIO:.1}:1",
            report.enhanced_ratio, report.steps
        ));
    }

    Ok(())
}
