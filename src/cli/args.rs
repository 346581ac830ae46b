//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

/// Page URL used when neither `--url` nor the config file names one
pub(crate) const DEFAULT_PAGE_URL: &str = "http://localhost:8000/index.html";

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "datasrc")]
#[command(about = "Resolve which repository a static site reads its data from", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Page URL to resolve for (hostname, path and ?source= are used)
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) url: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Fallback repository owner when the URL is not a GitHub Pages host
    #[arg(long, global = true, value_name = "OWNER")]
    pub(crate) owner: Option<String>,

    /// Fallback repository name when the URL is not a GitHub Pages host
    #[arg(long, global = true, value_name = "NAME")]
    pub(crate) repo: Option<String>,

    /// Branch holding the data files
    #[arg(long, global = true, value_name = "BRANCH")]
    pub(crate) branch: Option<String>,

    /// Preference storage file (default: ~/.cache/datasrc/storage.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) storage: Option<PathBuf>,

    /// Read settings from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if let Some(color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // String options: only apply if CLI didn't set them
        if self.url.is_none() {
            self.url = config.page_url.clone();
        }
        if self.owner.is_none() {
            self.owner = config.repo_owner.clone();
        }
        if self.repo.is_none() {
            self.repo = config.repo_name.clone();
        }
        if self.branch.is_none() {
            self.branch = config.data_branch.clone();
        }
        if self.storage.is_none() {
            self.storage = config.storage_path.clone();
        }

        self
    }

    pub(crate) fn page_url(&self) -> &str {
        self.url.as_deref().unwrap_or(DEFAULT_PAGE_URL)
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("datasrc").chain(args.iter().copied()))
    }

    fn config(toml_src: &str) -> Config {
        toml::from_str(toml_src).unwrap()
    }

    #[test]
    fn cli_flags_beat_config() {
        let config = config(
            r#"
repo_owner = "cfg-owner"
repo_name = "cfg-repo"
page_url = "https://b.github.io/"
"#,
        );
        let cli = parse(&["--owner", "cli-owner", "--url", "https://a.github.io/r/"])
            .with_config(&config);
        assert_eq!(cli.owner.as_deref(), Some("cli-owner"));
        assert_eq!(cli.repo.as_deref(), Some("cfg-repo"));
        assert_eq!(cli.page_url(), "https://a.github.io/r/");
    }

    #[test]
    fn default_page_url_when_unset() {
        let cli = parse(&[]).with_config(&Config::default());
        assert_eq!(cli.page_url(), DEFAULT_PAGE_URL);
        assert!(cli.command.is_none());
        assert_eq!(cli.page_url(), "http://localhost:8000/index.html");
    }

    #[test]
    fn config_page_url_used_without_flag() {
        let cli = parse(&[]).with_config(&config("page_url = \"https://b.github.io/\""));
        assert_eq!(cli.page_url(), "https://b.github.io/");
    }

    #[test]
    fn config_color_applies_only_at_auto() {
        let cli = parse(&["--color", "always"]).with_config(&config("color = \"never\""));
        assert_eq!(cli.color, ColorMode::Always);
        let cli = parse(&[]).with_config(&config("color = \"never\""));
        assert!(!cli.use_color());
    }

    #[test]
    fn subcommand_arguments() {
        let cli = parse(&["data-url", "data/2025-01-01.jsonl", "--json"]);
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Some(Commands::DataUrl { ref path }) if path == "data/2025-01-01.jsonl"
        ));
    }
}
