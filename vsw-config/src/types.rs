use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Whether a theme is meant for dark or light backgrounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
}

impl ThemeType {
    pub const ALL: [ThemeType; 2] = [ThemeType::Dark, ThemeType::Light];

    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeType::Dark => "dark",
            ThemeType::Light => "light",
        }
    }

    /// Capitalized label for prompts and headings.
    pub const fn label(self) -> &'static str {
        match self {
            ThemeType::Dark => "Dark",
            ThemeType::Light => "Light",
        }
    }
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme type '{0}', expected 'dark' or 'light'")]
pub struct ParseThemeTypeError(pub String);

impl FromStr for ThemeType {
    type Err = ParseThemeTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeType::Dark),
            "light" => Ok(ThemeType::Light),
            _ => Err(ParseThemeTypeError(value.to_string())),
        }
    }
}

/// A theme the user pinned for quick switching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteTheme {
    pub name: String,
    #[serde(rename = "type")]
    pub theme_type: ThemeType,
}

impl FavoriteTheme {
    pub fn new(name: impl Into<String>, theme_type: ThemeType) -> Self {
        Self {
            name: name.into(),
            theme_type,
        }
    }
}

impl fmt::Display for FavoriteTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.theme_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_type_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeType>(), Ok(ThemeType::Dark));
        assert_eq!(" light ".parse::<ThemeType>(), Ok(ThemeType::Light));
        assert!("dim".parse::<ThemeType>().is_err());
    }

    #[test]
    fn favorite_serializes_with_type_key() {
        let favorite = FavoriteTheme::new("Horizon", ThemeType::Dark);
        let json = serde_json::to_string(&favorite).unwrap();
        assert_eq!(json, r#"{"name":"Horizon","type":"dark"}"#);
        assert_eq!(favorite.to_string(), "Horizon (dark)");
    }
}
