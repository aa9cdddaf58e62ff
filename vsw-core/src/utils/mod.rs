//! Shared helpers.
//!
//! ### Colors (`color_utils`)
//! - **Hex conversion**: `#rgb`, `#rrggbb` and `#rrggbbaa` input, lowercase `#rrggbb` output
//! - **WCAG math**: relative luminance and contrast ratio
//! - **Adjustment**: percentage lighten/darken and minimum-contrast enforcement

pub mod color_utils;
