//! Contrast enhancement for dark themes.

use super::ThemeError;
use super::definition::{ColorPair, ThemeColorDefinition};
use crate::utils::color_utils::{contrast_ratio, enforce_contrast, ensure_minimum_contrast};
use vsw_config::constants::{contrast, surfaces};

/// Return a copy of `theme` with comments and input text readable against
/// the editor background.
///
/// Comment rules get a foreground meeting
/// [`contrast::ENHANCED_MIN_CONTRAST_RATIO`]. The input widget is backfilled
/// (background from the sidebar or editor, foreground from the editor) and its
/// foreground raised to the same ratio; the search highlight follows the input
/// foreground. Nothing else changes.
pub fn enhance_dark_theme_contrast(
    theme: &ThemeColorDefinition,
) -> Result<ThemeColorDefinition, ThemeError> {
    let background = theme
        .editor_background()
        .ok_or(ThemeError::MissingBackground)?;
    let mut enhanced = theme.clone();

    for rule in enhanced
        .token_colors
        .iter_mut()
        .filter(|rule| rule.is_comment_rule())
    {
        if let Some(foreground) = rule.settings.foreground.as_mut() {
            *foreground = ensure_minimum_contrast(
                foreground,
                background,
                contrast::ENHANCED_MIN_CONTRAST_RATIO,
            )?;
        }
    }

    let existing_input = theme.input.clone().unwrap_or_default();
    let input_background = existing_input
        .background
        .or_else(|| theme.surface(surfaces::SIDE_BAR_BACKGROUND).map(str::to_string))
        .unwrap_or_else(|| background.to_string());

    let input_foreground = existing_input
        .foreground
        .or_else(|| theme.editor_foreground().map(str::to_string))
        .map(|foreground| {
            ensure_minimum_contrast(
                &foreground,
                &input_background,
                contrast::ENHANCED_MIN_CONTRAST_RATIO,
            )
        })
        .transpose()?;

    enhanced.search_highlight = input_foreground
        .clone()
        .or_else(|| theme.editor_foreground().map(str::to_string));
    enhanced.input = Some(ColorPair {
        background: Some(input_background),
        foreground: input_foreground,
    });

    tracing::debug!(
        background,
        comment = ?enhanced.comment_foreground(),
        "enhanced dark theme contrast"
    );
    Ok(enhanced)
}

/// Before/after numbers for a theme's comment color.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentContrastReport {
    pub background: String,
    pub original: String,
    pub original_ratio: f64,
    pub enhanced: String,
    pub enhanced_ratio: f64,
    pub steps: usize,
}

impl CommentContrastReport {
    pub fn improvement_percent(&self) -> f64 {
        (self.enhanced_ratio / self.original_ratio - 1.0) * 100.0
    }

    pub fn meets_target(&self) -> bool {
        self.enhanced_ratio >= contrast::ENHANCED_MIN_CONTRAST_RATIO
    }
}

/// Report for the first comment rule with a foreground, or `None` when the
/// theme colors no comments.
pub fn comment_contrast_report(
    theme: &ThemeColorDefinition,
) -> Result<Option<CommentContrastReport>, ThemeError> {
    let background = theme
        .editor_background()
        .ok_or(ThemeError::MissingBackground)?;
    let Some(original) = theme.comment_foreground() else {
        return Ok(None);
    };

    let adjustment = enforce_contrast(
        original,
        background,
        contrast::ENHANCED_MIN_CONTRAST_RATIO,
    )?;

    Ok(Some(CommentContrastReport {
        background: background.to_string(),
        original: original.to_string(),
        original_ratio: contrast_ratio(original, background)?,
        enhanced: adjustment.color,
        enhanced_ratio: adjustment.ratio,
        steps: adjustment.steps,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::catalog::CatalogRegistry;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn theme(value: serde_json::Value) -> ThemeColorDefinition {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn ruby_red_comments_reach_target_ratio() {
        let registry = CatalogRegistry::builtin().unwrap();
        let (_, ruby) = registry.find_colors("Ruby Red").unwrap();
        let before = ruby.clone();

        let enhanced = enhance_dark_theme_contrast(ruby).unwrap();
        let comment = enhanced.comment_foreground().unwrap();

        assert_eq!(comment, "#af7575");
        assert!(contrast_ratio(comment, "#1a0000").unwrap() >= 5.0);
        assert_eq!(ruby, &before);
        assert_eq!(ruby.comment_foreground(), Some("#664444"));
    }

    #[test]
    fn only_comment_rules_change() {
        let original = theme(json!({
            "workbench": { "editor.background": "#282c34", "editor.foreground": "#c5c8d1" },
            "tokenColors": [
                { "scope": "string", "settings": { "foreground": "#333333" } },
                { "scope": "comment", "settings": { "foreground": "#7f848e", "fontStyle": "italic" } },
                { "scope": ["punctuation.definition.comment"], "settings": { "fontStyle": "italic" } }
            ]
        }));

        let enhanced = enhance_dark_theme_contrast(&original).unwrap();

        assert_eq!(enhanced.token_colors[0], original.token_colors[0]);
        assert_eq!(enhanced.token_colors[2], original.token_colors[2]);
        assert_eq!(
            enhanced.token_colors[1].settings.foreground.as_deref(),
            Some("#9aa1ac")
        );
        assert_eq!(
            enhanced.token_colors[1].settings.font_style.as_deref(),
            Some("italic")
        );
        assert_eq!(enhanced.workbench, original.workbench);
    }

    #[test]
    fn input_colors_are_backfilled() {
        let original = theme(json!({
            "workbench": {
                "editor.background": "#1c1e26",
                "editor.foreground": "#d5d8da",
                "sideBar.background": "#16181f"
            },
            "tokenColors": []
        }));

        let before = original.clone();
        let enhanced = enhance_dark_theme_contrast(&original).unwrap();

        assert_eq!(original, before);
        assert_eq!(
            enhanced.input,
            Some(ColorPair {
                background: Some("#16181f".into()),
                foreground: Some("#d5d8da".into()),
            })
        );
        assert_eq!(enhanced.search_highlight.as_deref(), Some("#d5d8da"));
        assert_eq!(original.input, None);
    }

    #[test]
    fn input_background_falls_back_to_editor() {
        let original = theme(json!({
            "workbench": { "editor.background": "#000000" },
            "tokenColors": []
        }));

        let before = original.clone();
        let enhanced = enhance_dark_theme_contrast(&original).unwrap();

        assert_eq!(original, before);
        assert_eq!(
            enhanced.input,
            Some(ColorPair {
                background: Some("#000000".into()),
                foreground: None,
            })
        );
        assert_eq!(enhanced.search_highlight, None);
    }

    #[test]
    fn missing_background_or_bad_color_fails() {
        let no_background = theme(json!({ "workbench": {}, "tokenColors": [] }));
        assert!(matches!(
            enhance_dark_theme_contrast(&no_background),
            Err(ThemeError::MissingBackground)
        ));

        let bad_comment = theme(json!({
            "workbench": { "editor.background": "#000000" },
            "tokenColors": [{ "scope": "comment", "settings": { "foreground": "grey" } }]
        }));
        assert!(matches!(
            enhance_dark_theme_contrast(&bad_comment),
            Err(ThemeError::Color(_))
        ));
    }

    #[test]
    fn report_describes_the_adjustment() {
        let registry = CatalogRegistry::builtin().unwrap();
        let (_, horizon) = registry.find_colors("Horizon").unwrap();

        let report = comment_contrast_report(horizon).unwrap().unwrap();

        assert_eq!(report.background, "#1c1e26");
        assert_eq!(report.original, "#6c6f93");
        assert_eq!(report.enhanced, "#8a8ebc");
        assert_eq!(report.steps, 5);
        assert!(report.meets_target());
        assert!(report.improvement_percent() > 50.0);
    }
}
