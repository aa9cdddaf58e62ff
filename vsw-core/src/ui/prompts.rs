//! Interactive selection prompts.
//!
//! Command handlers depend on [`ThemePrompter`] rather than on dialoguer so
//! they can be driven by a scripted prompter in tests. `Ok(None)` always
//! means the user dismissed the prompt.

use anyhow::Result;
use dialoguer::Select;
use vsw_config::ThemeType;

/// One selectable line: what the user sees and the theme name it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeChoice {
    pub label: String,
    pub name: String,
}

impl ThemeChoice {
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
        }
    }
}

pub trait ThemePrompter {
    /// Pick one of `choices`; returns the chosen theme name.
    fn select_theme(
        &self,
        prompt: &str,
        choices: &[ThemeChoice],
        default: Option<usize>,
    ) -> Result<Option<String>>;

    fn select_theme_type(&self, prompt: &str) -> Result<Option<ThemeType>>;
}

/// Terminal prompts backed by `dialoguer::Select`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl ThemePrompter for DialoguerPrompter {
    fn select_theme(
        &self,
        prompt: &str,
        choices: &[ThemeChoice],
        default: Option<usize>,
    ) -> Result<Option<String>> {
        if choices.is_empty() {
            return Ok(None);
        }

        let labels: Vec<&str> = choices.iter().map(|choice| choice.label.as_str()).collect();
        let selection = Select::new()
            .with_prompt(prompt)
            .default(default.unwrap_or(0))
            .items(&labels)
            .interact_opt()?;

        Ok(selection
            .and_then(|index| choices.get(index))
            .map(|choice| choice.name.clone()))
    }

    fn select_theme_type(&self, prompt: &str) -> Result<Option<ThemeType>> {
        let labels: Vec<&str> = ThemeType::ALL.iter().map(|theme_type| theme_type.label()).collect();
        let selection = Select::new()
            .with_prompt(prompt)
            .default(0)
            .items(&labels)
            .interact_opt()?;

        Ok(selection.and_then(|index| ThemeType::ALL.get(index).copied()))
    }
}
