//! Color payload of a custom-colored theme.

use super::ThemeError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use vsw_config::constants::{scopes, surfaces};

/// Colors applied to the editor when a custom-colored theme is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColorDefinition {
    /// UI surface key (`editor.background`, `sideBar.background`, ...) to hex color.
    pub workbench: IndexMap<String, String>,
    #[serde(default)]
    pub token_colors: Vec<TokenColorRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<ColorPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<ColorPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_highlight: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
}

/// One TextMate token rule, written verbatim into `textMateRules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenColorRule {
    pub scope: ScopeSelector,
    #[serde(default)]
    pub settings: TokenSettings,
}

/// A rule targets a single scope or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopeSelector {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

impl ScopeSelector {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let scopes: &[String] = match self {
            ScopeSelector::Single(scope) => std::slice::from_ref(scope),
            ScopeSelector::Multiple(list) => list,
        };
        scopes.iter().map(String::as_str)
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.iter().any(|candidate| candidate == scope)
    }
}

impl TokenColorRule {
    /// Whether any scope is `comment` or `punctuation.definition.comment`.
    pub fn is_comment_rule(&self) -> bool {
        self.scope
            .iter()
            .any(|scope| scopes::COMMENT_SCOPES.contains(&scope))
    }
}

impl ThemeColorDefinition {
    pub fn surface(&self, key: &str) -> Option<&str> {
        self.workbench.get(key).map(String::as_str)
    }

    pub fn editor_background(&self) -> Option<&str> {
        self.surface(surfaces::EDITOR_BACKGROUND)
    }

    pub fn editor_foreground(&self) -> Option<&str> {
        self.surface(surfaces::EDITOR_FOREGROUND)
    }

    /// First comment rule that carries a foreground color.
    pub fn comment_foreground(&self) -> Option<&str> {
        self.token_colors
            .iter()
            .filter(|rule| rule.is_comment_rule())
            .find_map(|rule| rule.settings.foreground.as_deref())
    }

    /// The `workbench.colorCustomizations` object for this theme: every
    /// workbench surface followed by the optional terminal, input (mirrored to
    /// quick input) and search highlight colors.
    pub fn color_customizations(&self) -> Map<String, Value> {
        let mut colors: Map<String, Value> = self
            .workbench
            .iter()
            .map(|(key, color)| (key.clone(), Value::String(color.clone())))
            .collect();

        let mut put = |key: &str, color: Option<&String>| {
            if let Some(color) = color {
                colors.insert(key.to_string(), Value::String(color.clone()));
            }
        };

        if let Some(terminal) = &self.terminal {
            put(surfaces::TERMINAL_BACKGROUND, terminal.background.as_ref());
            put(surfaces::TERMINAL_FOREGROUND, terminal.foreground.as_ref());
        }

        if let Some(input) = &self.input {
            put(surfaces::INPUT_BACKGROUND, input.background.as_ref());
            put(surfaces::INPUT_FOREGROUND, input.foreground.as_ref());
            put(surfaces::QUICK_INPUT_BACKGROUND, input.background.as_ref());
            put(surfaces::QUICK_INPUT_FOREGROUND, input.foreground.as_ref());
        }

        put(
            surfaces::SEARCH_HIGHLIGHT_FOREGROUND,
            self.search_highlight.as_ref(),
        );

        colors
    }

    /// Token rules as the JSON array stored under `textMateRules`.
    pub fn text_mate_rules(&self) -> Result<Value, ThemeError> {
        serde_json::to_value(&self.token_colors).map_err(ThemeError::TokenRules)
    }
}
