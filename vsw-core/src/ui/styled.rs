use crate::utils::color_utils::parse_hex;
use anstream::println as styled_println;
use anstyle::{AnsiColor, Color, Effects, Reset, Style};

/// Style presets for console output
pub struct Styles;

impl Styles {
    /// Info marker style (blue)
    pub fn info() -> Style {
        Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)))
    }

    /// Success marker style (green)
    pub fn success() -> Style {
        Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)))
    }

    /// Warning marker style (yellow)
    pub fn warning() -> Style {
        Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)))
    }

    /// Error marker style (red)
    pub fn error() -> Style {
        Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)))
    }

    /// Theme entry marker style (magenta)
    pub fn theme() -> Style {
        Style::new().fg_color(Some(Color::Ansi(AnsiColor::Magenta)))
    }

    pub fn header() -> Style {
        Style::new().effects(Effects::BOLD)
    }

    pub fn render(style: &Style) -> String {
        style.to_string()
    }

    pub fn render_reset() -> String {
        Reset.to_string()
    }
}

fn marked(style: &Style, marker: &str, message: &str) {
    styled_println!(
        "{}{}{} {}",
        Styles::render(style),
        marker,
        Styles::render_reset(),
        message
    );
}

pub fn info(message: &str) {
    marked(&Styles::info(), "ℹ", message);
}

pub fn success(message: &str) {
    marked(&Styles::success(), "✓", message);
}

pub fn warning(message: &str) {
    marked(&Styles::warning(), "⚠", message);
}

pub fn error(message: &str) {
    marked(&Styles::error(), "✗", message);
}

/// One theme entry in a listing.
pub fn theme(message: &str) {
    marked(&Styles::theme(), "🎨", message);
}

pub fn header(message: &str) {
    styled_println!(
        "{}{}{}",
        Styles::render(&Styles::header()),
        message,
        Styles::render_reset()
    );
}

/// `hex` preceded by a block painted in that color. Unparseable input is
/// returned as-is.
pub fn swatch(hex: &str) -> String {
    match parse_hex(hex) {
        Ok(rgb) => format!(
            "{}  {} {}",
            Style::new().bg_color(Some(Color::Rgb(rgb))),
            Reset,
            hex
        ),
        Err(_) => hex.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles() {
        // These should not panic
        info("Test info");
        success("Test success");
        warning("Test warning");
        error("Test error");
        theme("Test theme");
        header("Test header");
    }

    #[test]
    fn swatch_keeps_the_hex_text() {
        assert!(swatch("#1a0000").ends_with(" #1a0000"));
        assert_eq!(swatch("oops"), "oops");
    }
}
