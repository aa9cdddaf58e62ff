//! Static theme catalogs
//!
//! Three families ship with the binary as embedded JSON tables. Lookups go
//! through the [`ThemeCatalog`] trait so the registry (and tests) can treat
//! every family the same way. Registry order decides which family wins when
//! the same name appears twice.

use super::ThemeError;
use super::definition::ThemeColorDefinition;
use serde::{Deserialize, Serialize};
use std::fmt;
use vsw_config::ThemeType;

const PASTEL_THEMES: &str = include_str!("../../assets/themes/pastel.json");
const VIVID_THEMES: &str = include_str!("../../assets/themes/vivid.json");
const COLOR_THEMES: &str = include_str!("../../assets/themes/color.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeFamily {
    Pastel,
    Vivid,
    Color,
}

impl ThemeFamily {
    /// Lookup priority, highest first.
    pub const ALL: [ThemeFamily; 3] = [ThemeFamily::Pastel, ThemeFamily::Vivid, ThemeFamily::Color];

    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeFamily::Pastel => "pastel",
            ThemeFamily::Vivid => "vivid",
            ThemeFamily::Color => "color",
        }
    }

    const fn embedded_source(self) -> &'static str {
        match self {
            ThemeFamily::Pastel => PASTEL_THEMES,
            ThemeFamily::Vivid => VIVID_THEMES,
            ThemeFamily::Color => COLOR_THEMES,
        }
    }
}

impl fmt::Display for ThemeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name, type and blurb of a catalog theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeIdentity {
    pub name: String,
    #[serde(rename = "type", default)]
    pub theme_type: ThemeType,
    #[serde(default)]
    pub description: String,
}

impl fmt::Display for ThemeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.theme_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub identity: ThemeIdentity,
    #[serde(default)]
    pub colors: Option<ThemeColorDefinition>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    family: ThemeFamily,
    themes: Vec<CatalogEntry>,
}

/// Read access to one family of themes.
pub trait ThemeCatalog: Send + Sync {
    fn family(&self) -> ThemeFamily;

    fn entries(&self) -> &[CatalogEntry];

    fn themes(&self) -> Vec<&ThemeIdentity> {
        self.entries().iter().map(|entry| &entry.identity).collect()
    }

    fn themes_by_type(&self, theme_type: ThemeType) -> Vec<&ThemeIdentity> {
        self.entries()
            .iter()
            .map(|entry| &entry.identity)
            .filter(|identity| identity.theme_type == theme_type)
            .collect()
    }

    fn identity(&self, name: &str) -> Option<&ThemeIdentity> {
        self.entries()
            .iter()
            .map(|entry| &entry.identity)
            .find(|identity| identity.name == name)
    }

    fn colors(&self, name: &str) -> Option<&ThemeColorDefinition> {
        self.entries()
            .iter()
            .find(|entry| entry.identity.name == name)
            .and_then(|entry| entry.colors.as_ref())
    }
}

/// Catalog backed by a JSON table.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    family: ThemeFamily,
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    pub fn from_json(family: ThemeFamily, source: &str) -> Result<Self, ThemeError> {
        let document: CatalogDocument =
            serde_json::from_str(source).map_err(|source| ThemeError::Catalog { family, source })?;

        if document.family != family {
            return Err(ThemeError::FamilyMismatch {
                expected: family,
                found: document.family,
            });
        }

        tracing::debug!(%family, themes = document.themes.len(), "loaded theme catalog");
        Ok(Self {
            family,
            entries: document.themes,
        })
    }

    /// The table compiled into the binary for `family`.
    pub fn embedded(family: ThemeFamily) -> Result<Self, ThemeError> {
        Self::from_json(family, family.embedded_source())
    }
}

impl ThemeCatalog for StaticCatalog {
    fn family(&self) -> ThemeFamily {
        self.family
    }

    fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

/// Ordered list of catalogs; earlier providers win name collisions.
pub struct CatalogRegistry {
    providers: Vec<Box<dyn ThemeCatalog>>,
}

impl fmt::Debug for CatalogRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.providers.iter().map(|provider| provider.family()))
            .finish()
    }
}

impl CatalogRegistry {
    pub fn new(providers: Vec<Box<dyn ThemeCatalog>>) -> Self {
        Self { providers }
    }

    /// Pastel, vivid and color tables, in that order.
    pub fn builtin() -> Result<Self, ThemeError> {
        let providers = ThemeFamily::ALL
            .into_iter()
            .map(|family| {
                StaticCatalog::embedded(family).map(|catalog| Box::new(catalog) as Box<dyn ThemeCatalog>)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(providers))
    }

    pub fn providers(&self) -> impl Iterator<Item = &dyn ThemeCatalog> {
        self.providers.iter().map(|provider| provider.as_ref())
    }

    pub fn catalog(&self, family: ThemeFamily) -> Option<&dyn ThemeCatalog> {
        self.providers().find(|provider| provider.family() == family)
    }

    /// First color definition registered under `name`, with its family.
    pub fn find_colors(&self, name: &str) -> Option<(ThemeFamily, &ThemeColorDefinition)> {
        self.providers()
            .find_map(|provider| provider.colors(name).map(|colors| (provider.family(), colors)))
    }

    pub fn find_identity(&self, name: &str) -> Option<&ThemeIdentity> {
        self.providers().find_map(|provider| provider.identity(name))
    }

    pub fn theme_type(&self, name: &str) -> Option<ThemeType> {
        self.find_identity(name).map(|identity| identity.theme_type)
    }

    /// Every entry that carries a color definition, in registry order.
    pub fn custom_themes(&self) -> impl Iterator<Item = (&ThemeIdentity, &ThemeColorDefinition)> {
        self.providers()
            .flat_map(|provider| provider.entries())
            .filter_map(|entry| entry.colors.as_ref().map(|colors| (&entry.identity, colors)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CatalogRegistry {
        CatalogRegistry::builtin().expect("embedded catalogs parse")
    }

    #[test]
    fn embedded_tables_load_with_expected_sizes() {
        let registry = registry();
        let sizes: Vec<(ThemeFamily, usize)> = registry
            .providers()
            .map(|provider| (provider.family(), provider.entries().len()))
            .collect();
        assert_eq!(
            sizes,
            [
                (ThemeFamily::Pastel, 10),
                (ThemeFamily::Vivid, 5),
                (ThemeFamily::Color, 12),
            ]
        );
        assert_eq!(registry.custom_themes().count(), 27);
    }

    #[test]
    fn lookups_resolve_identity_and_colors() {
        let registry = registry();

        let (family, colors) = registry.find_colors("Ruby Red").unwrap();
        assert_eq!(family, ThemeFamily::Color);
        assert_eq!(colors.editor_background(), Some("#1a0000"));
        assert_eq!(colors.comment_foreground(), Some("#664444"));

        assert_eq!(registry.theme_type("Pastel Light"), Some(ThemeType::Light));
        assert_eq!(registry.theme_type("Horizon"), Some(ThemeType::Dark));
        assert_eq!(registry.theme_type("Monokai"), None);
        assert!(registry.find_colors("Monokai").is_none());
    }

    #[test]
    fn filters_by_type() {
        let registry = registry();
        let vivid = registry.catalog(ThemeFamily::Vivid).unwrap();
        let light: Vec<&str> = vivid
            .themes_by_type(ThemeType::Light)
            .into_iter()
            .map(|identity| identity.name.as_str())
            .collect();
        assert_eq!(light, ["Tropical", "Candy"]);
    }

    #[test]
    fn earlier_provider_wins_on_collision() {
        let first = StaticCatalog::from_json(
            ThemeFamily::Pastel,
            r##"{"family":"pastel","themes":[{"name":"Twin","type":"light","description":"a",
                "colors":{"workbench":{"editor.background":"#ffffff"},"tokenColors":[]}}]}"##,
        )
        .unwrap();
        let second = StaticCatalog::from_json(
            ThemeFamily::Vivid,
            r##"{"family":"vivid","themes":[{"name":"Twin","type":"dark","description":"b",
                "colors":{"workbench":{"editor.background":"#000000"},"tokenColors":[]}}]}"##,
        )
        .unwrap();
        let registry = CatalogRegistry::new(vec![Box::new(first), Box::new(second)]);

        let (family, colors) = registry.find_colors("Twin").unwrap();
        assert_eq!(family, ThemeFamily::Pastel);
        assert_eq!(colors.editor_background(), Some("#ffffff"));
        assert_eq!(registry.theme_type("Twin"), Some(ThemeType::Light));
    }

    #[test]
    fn malformed_or_mislabeled_tables_are_rejected() {
        assert!(matches!(
            StaticCatalog::from_json(ThemeFamily::Color, "{ \"family\": \"color\", "),
            Err(ThemeError::Catalog {
                family: ThemeFamily::Color,
                ..
            })
        ));
        assert!(matches!(
            StaticCatalog::from_json(ThemeFamily::Color, r#"{"family":"vivid","themes":[]}"#),
            Err(ThemeError::FamilyMismatch { .. })
        ));
    }

    #[test]
    fn missing_type_defaults_to_dark() {
        let catalog = StaticCatalog::from_json(
            ThemeFamily::Pastel,
            r#"{"family":"pastel","themes":[{"name":"Untyped"}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.themes()[0].theme_type, ThemeType::Dark);
        assert!(catalog.colors("Untyped").is_none());
    }
}
