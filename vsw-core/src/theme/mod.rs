//! Theme model, embedded catalogs, contrast enhancement and the manager that
//! ties them to the persistence stores.

pub mod catalog;
pub mod definition;
pub mod enhancer;
pub mod manager;

use crate::utils::color_utils::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme colors have no '{}' entry", vsw_config::constants::surfaces::EDITOR_BACKGROUND)]
    MissingBackground,

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("failed to parse the embedded {family} theme catalog: {source}")]
    Catalog {
        family: catalog::ThemeFamily,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog table declares family '{found}' but was loaded as '{expected}'")]
    FamilyMismatch {
        expected: catalog::ThemeFamily,
        found: catalog::ThemeFamily,
    },

    #[error("failed to serialize token color rules: {0}")]
    TokenRules(#[source] serde_json::Error),
}
