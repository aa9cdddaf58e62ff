//! Color utilities for theme contrast
//!
//! Hex strings are the exchange format with the editor settings, so every
//! public helper accepts and returns hex. The `rgb_*` variants work on
//! [`RgbColor`] directly for callers that already parsed a value.

use anstyle::RgbColor;
use thiserror::Error;
use vsw_config::constants::contrast;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color '{0}', expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidHex(String),
}

/// Outcome of [`enforce_contrast`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastAdjustment {
    /// Final foreground, or the untouched input when no step was needed.
    pub color: String,
    /// Contrast ratio of `color` against the background.
    pub ratio: f64,
    /// Number of lighten/darken steps applied.
    pub steps: usize,
}

impl ContrastAdjustment {
    pub fn is_adjusted(&self) -> bool {
        self.steps > 0
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional). Alpha is ignored.
pub fn parse_hex(hex: &str) -> Result<RgbColor, ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.chars().take(6).collect(),
        _ => return Err(invalid()),
    };

    let channel = |range: std::ops::Range<usize>| -> Result<u8, ColorError> {
        expanded
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(invalid)
    };

    Ok(RgbColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Render channels as lowercase `#rrggbb`, rounding and clamping each one first.
pub fn format_hex(r: f64, g: f64, b: f64) -> String {
    let channel = |value: f64| -> u8 {
        value
            .round()
            .clamp(contrast::CHANNEL_MIN, contrast::CHANNEL_MAX) as u8
    };
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

pub fn to_hex(color: RgbColor) -> String {
    format_hex(
        f64::from(color.r()),
        f64::from(color.g()),
        f64::from(color.b()),
    )
}

/// WCAG 2.x relative luminance in `[0, 1]`.
pub fn rgb_luminance(color: RgbColor) -> f64 {
    fn channel(value: u8) -> f64 {
        let c = f64::from(value) / contrast::CHANNEL_MAX;
        if c <= contrast::RELATIVE_LUMINANCE_CUTOFF {
            c / contrast::RELATIVE_LUMINANCE_LOW_FACTOR
        } else {
            ((c + contrast::RELATIVE_LUMINANCE_OFFSET) / (1.0 + contrast::RELATIVE_LUMINANCE_OFFSET))
                .powf(contrast::RELATIVE_LUMINANCE_EXPONENT)
        }
    }

    contrast::RED_LUMINANCE_COEFFICIENT * channel(color.r())
        + contrast::GREEN_LUMINANCE_COEFFICIENT * channel(color.g())
        + contrast::BLUE_LUMINANCE_COEFFICIENT * channel(color.b())
}

pub fn relative_luminance(hex: &str) -> Result<f64, ColorError> {
    parse_hex(hex).map(rgb_luminance)
}

/// Symmetric WCAG contrast ratio in `[1, 21]`.
pub fn rgb_contrast_ratio(first: RgbColor, second: RgbColor) -> f64 {
    let first = rgb_luminance(first);
    let second = rgb_luminance(second);
    let (lighter, darker) = if first > second {
        (first, second)
    } else {
        (second, first)
    };
    (lighter + contrast::CONTRAST_RATIO_OFFSET) / (darker + contrast::CONTRAST_RATIO_OFFSET)
}

pub fn contrast_ratio(foreground: &str, background: &str) -> Result<f64, ColorError> {
    Ok(rgb_contrast_ratio(
        parse_hex(foreground)?,
        parse_hex(background)?,
    ))
}

fn scale(color: RgbColor, factor: f64) -> String {
    format_hex(
        f64::from(color.r()) * factor,
        f64::from(color.g()) * factor,
        f64::from(color.b()) * factor,
    )
}

/// Multiply each channel by `1 + percent / 100`. Zero channels stay zero.
pub fn lighten(hex: &str, percent: f64) -> Result<String, ColorError> {
    Ok(scale(parse_hex(hex)?, 1.0 + percent / 100.0))
}

/// Multiply each channel by `1 - percent / 100`.
pub fn darken(hex: &str, percent: f64) -> Result<String, ColorError> {
    Ok(scale(parse_hex(hex)?, 1.0 - percent / 100.0))
}

/// Step `foreground` away from `background` until the pair reaches `min_ratio`.
///
/// The direction is fixed up front: lighten when the background is darker
/// than the foreground, otherwise darken. Each step scales the previous
/// result by [`contrast::ADJUSTMENT_STEP_PERCENT`], for at most
/// [`contrast::MAX_ADJUSTMENT_ITERATIONS`] steps. When the budget runs out the
/// last color reached is returned.
pub fn enforce_contrast(
    foreground: &str,
    background: &str,
    min_ratio: f64,
) -> Result<ContrastAdjustment, ColorError> {
    let fg = parse_hex(foreground)?;
    let bg = parse_hex(background)?;

    let initial_ratio = rgb_contrast_ratio(fg, bg);
    if initial_ratio >= min_ratio {
        return Ok(ContrastAdjustment {
            color: foreground.to_string(),
            ratio: initial_ratio,
            steps: 0,
        });
    }

    let should_lighten = rgb_luminance(bg) < rgb_luminance(fg);
    let mut current = to_hex(fg);
    let mut ratio = initial_ratio;
    let mut steps = 0;

    while steps < contrast::MAX_ADJUSTMENT_ITERATIONS && ratio < min_ratio {
        current = if should_lighten {
            lighten(&current, contrast::ADJUSTMENT_STEP_PERCENT)?
        } else {
            darken(&current, contrast::ADJUSTMENT_STEP_PERCENT)?
        };
        ratio = rgb_contrast_ratio(parse_hex(&current)?, bg);
        steps += 1;
    }

    tracing::debug!(
        foreground,
        background,
        adjusted = %current,
        ratio,
        steps,
        "adjusted foreground for contrast"
    );

    Ok(ContrastAdjustment {
        color: current,
        ratio,
        steps,
    })
}

/// Like [`enforce_contrast`] but returns only the resulting color.
pub fn ensure_minimum_contrast(
    foreground: &str,
    background: &str,
    min_ratio: f64,
) -> Result<String, ColorError> {
    enforce_contrast(foreground, background, min_ratio).map(|adjustment| adjustment.color)
}
