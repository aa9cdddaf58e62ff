//! Argument parsing for the `vsw` command.

use crate::theme::catalog::ThemeFamily;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vsw_config::ThemeType;
use vsw_config::constants::env;

#[derive(Debug, Parser)]
#[command(name = "vsw", about = "VSCode theme switcher", version)]
pub struct Cli {
    /// Workspace whose `.vscode/settings.json` is edited
    #[arg(long, global = true, value_name = "PATH", env = env::WORKSPACE)]
    pub workspace: Option<PathBuf>,

    /// Directory holding `config.json` (defaults to `~/.vsw`)
    #[arg(long, global = true, value_name = "PATH", env = env::CONFIG_DIR)]
    pub config_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub color: colorchoice_clap::Color,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Set VSCode theme
    Set {
        /// Theme name to set; pick from favorites when omitted
        theme: Option<String>,
    },

    /// List favorite themes
    List {
        /// Show all themes (default)
        #[arg(short, long, conflicts_with_all = ["dark", "light"])]
        all: bool,

        #[command(flatten)]
        filter: TypeFlags,
    },

    /// Add a theme to favorites
    Add {
        /// Theme name to add
        theme: String,

        #[command(flatten)]
        kind: TypeFlags,
    },

    /// Remove a theme from favorites
    Remove {
        /// Theme name to remove; pick from favorites when omitted
        theme: Option<String>,
    },

    /// Show current theme
    Current,

    /// Switch to a dark theme
    Dark,

    /// Switch to a light theme
    Light,

    /// Pastel theme options
    Pastel(CatalogArgs),

    /// Vivid theme options
    Vivid(CatalogArgs),

    /// Color theme options
    Color(CatalogArgs),

    /// Show comment contrast before and after enhancement
    Contrast {
        /// Theme to inspect; every dark custom theme when omitted
        theme: Option<String>,
    },
}

/// Mutually exclusive `--dark` / `--light` selector.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct TypeFlags {
    /// Dark themes
    #[arg(short, long, conflicts_with = "light")]
    pub dark: bool,

    /// Light themes
    #[arg(short, long)]
    pub light: bool,
}

impl TypeFlags {
    pub fn theme_type(self) -> Option<ThemeType> {
        match (self.dark, self.light) {
            (true, _) => Some(ThemeType::Dark),
            (_, true) => Some(ThemeType::Light),
            _ => None,
        }
    }
}

/// Flags shared by the `pastel`, `vivid` and `color` commands.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct CatalogArgs {
    /// List all themes of this family
    #[arg(short, long)]
    pub list: bool,

    /// List dark themes of this family
    #[arg(short, long)]
    pub dark: bool,

    /// List light themes of this family
    #[arg(short = 'i', long)]
    pub light: bool,

    /// Pick a theme of this family, apply it and add it to favorites
    #[arg(short, long)]
    pub set: bool,
}

/// What a family command should do, in flag precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAction {
    ListAll,
    ListType(ThemeType),
    Select,
}

impl CatalogArgs {
    pub fn action(self) -> CatalogAction {
        if self.list {
            CatalogAction::ListAll
        } else if self.dark {
            CatalogAction::ListType(ThemeType::Dark)
        } else if self.light {
            CatalogAction::ListType(ThemeType::Light)
        } else {
            CatalogAction::Select
        }
    }
}

impl Commands {
    /// Family for the `pastel` / `vivid` / `color` commands.
    pub fn catalog(&self) -> Option<(ThemeFamily, CatalogArgs)> {
        match self {
            Commands::Pastel(args) => Some((ThemeFamily::Pastel, *args)),
            Commands::Vivid(args) => Some((ThemeFamily::Vivid, *args)),
            Commands::Color(args) => Some((ThemeFamily::Color, *args)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vsw").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_reads_type_flags() {
        let cli = parse(&["add", "Horizon", "--dark"]);
        match cli.command {
            Some(Commands::Add { theme, kind }) => {
                assert_eq!(theme, "Horizon");
                assert_eq!(kind.theme_type(), Some(ThemeType::Dark));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = parse(&["add", "Ayu Light"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Add { kind, .. }) if kind.theme_type().is_none()
        ));
    }

    #[test]
    fn dark_and_light_conflict() {
        assert!(Cli::try_parse_from(["vsw", "list", "-d", "-l"]).is_err());
    }

    #[test]
    fn catalog_flags_map_to_actions() {
        let cli = parse(&["pastel", "-i"]);
        let (family, args) = cli.command.as_ref().and_then(Commands::catalog).unwrap();
        assert_eq!(family, ThemeFamily::Pastel);
        assert_eq!(args.action(), CatalogAction::ListType(ThemeType::Light));

        let cli = parse(&["color"]);
        let (_, args) = cli.command.as_ref().and_then(Commands::catalog).unwrap();
        assert_eq!(args.action(), CatalogAction::Select);

        let cli = parse(&["vivid", "--set", "--list"]);
        let (_, args) = cli.command.as_ref().and_then(Commands::catalog).unwrap();
        assert_eq!(args.action(), CatalogAction::ListAll);
    }

    #[test]
    fn global_paths_work_after_subcommand() {
        let cli = parse(&["current", "--workspace", "/tmp/project", "-v"]);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/project")));
        assert!(cli.verbose);
    }
}
