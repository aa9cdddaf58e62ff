/// Default names and locations.
pub mod defaults {
    pub const PRODUCT_NAME: &str = "vsw";
    pub const CONFIG_DIR_NAME: &str = ".vsw";
    pub const CONFIG_FILE_NAME: &str = "config.json";
    pub const SETTINGS_DIR_NAME: &str = ".vscode";
    pub const SETTINGS_FILE_NAME: &str = "settings.json";
}

/// Environment variables consulted when the matching CLI flag is absent.
pub mod env {
    pub const WORKSPACE: &str = "VSW_WORKSPACE";
    pub const CONFIG_DIR: &str = "VSW_CONFIG_DIR";
}

/// Top-level keys in the workspace settings document.
pub mod settings_keys {
    pub const COLOR_THEME: &str = "workbench.colorTheme";
    pub const COLOR_CUSTOMIZATIONS: &str = "workbench.colorCustomizations";
    pub const TOKEN_COLOR_CUSTOMIZATIONS: &str = "editor.tokenColorCustomizations";
    pub const TEXT_MATE_RULES: &str = "textMateRules";
}

/// Editor UI surface identifiers used inside color customizations.
pub mod surfaces {
    pub const EDITOR_BACKGROUND: &str = "editor.background";
    pub const EDITOR_FOREGROUND: &str = "editor.foreground";
    pub const SIDE_BAR_BACKGROUND: &str = "sideBar.background";
    pub const TERMINAL_BACKGROUND: &str = "terminal.background";
    pub const TERMINAL_FOREGROUND: &str = "terminal.foreground";
    pub const INPUT_BACKGROUND: &str = "input.background";
    pub const INPUT_FOREGROUND: &str = "input.foreground";
    pub const QUICK_INPUT_BACKGROUND: &str = "quickInput.background";
    pub const QUICK_INPUT_FOREGROUND: &str = "quickInput.foreground";
    pub const SEARCH_HIGHLIGHT_FOREGROUND: &str = "list.highlightForeground";
}

/// Token scopes treated as comments by the contrast enhancer.
pub mod scopes {
    pub const COMMENT: &str = "comment";
    pub const COMMENT_PUNCTUATION: &str = "punctuation.definition.comment";
    pub const COMMENT_SCOPES: [&str; 2] = [COMMENT, COMMENT_PUNCTUATION];
}

/// WCAG colorimetry and contrast-adjustment constants.
pub mod contrast {
    /// WCAG AA minimum for normal text.
    pub const DEFAULT_MIN_CONTRAST_RATIO: f64 = 4.5;
    /// Target used for comments and input text in dark themes.
    pub const ENHANCED_MIN_CONTRAST_RATIO: f64 = 5.0;
    pub const ADJUSTMENT_STEP_PERCENT: f64 = 5.0;
    pub const MAX_ADJUSTMENT_ITERATIONS: usize = 20;

    pub const RELATIVE_LUMINANCE_CUTOFF: f64 = 0.03928;
    pub const RELATIVE_LUMINANCE_LOW_FACTOR: f64 = 12.92;
    pub const RELATIVE_LUMINANCE_OFFSET: f64 = 0.055;
    pub const RELATIVE_LUMINANCE_EXPONENT: f64 = 2.4;
    pub const CONTRAST_RATIO_OFFSET: f64 = 0.05;
    pub const RED_LUMINANCE_COEFFICIENT: f64 = 0.2126;
    pub const GREEN_LUMINANCE_COEFFICIENT: f64 = 0.7152;
    pub const BLUE_LUMINANCE_COEFFICIENT: f64 = 0.0722;

    pub const CHANNEL_MAX: f64 = 255.0;
    pub const CHANNEL_MIN: f64 = 0.0;
}
