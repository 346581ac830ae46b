use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Deployment settings. Every field is optional; unset values keep the
/// built-in defaults.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) repo_owner: Option<String>,
    #[serde(default)]
    pub(crate) repo_name: Option<String>,
    #[serde(default)]
    pub(crate) data_branch: Option<String>,
    #[serde(default)]
    pub(crate) page_url: Option<String>,
    #[serde(default)]
    pub(crate) storage_path: Option<PathBuf>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Some(config) = Self::load_from(&path)
            {
                return config;
            }
        }
        Self::default()
    }

    /// Parse one file. Read or parse failures are reported and yield `None`.
    pub(crate) fn load_from(path: &Path) -> Option<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return None;
            }
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/datasrc/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("datasrc").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/datasrc/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("datasrc").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.datasrc.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".datasrc.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::defaults;
    use crate::cli::Cli;
    use clap::Parser;
    use datasrc::Defaults;

    fn merged(config: &Config) -> Defaults {
        defaults(&Cli::parse_from(["datasrc"]).with_config(config))
    }

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("datasrc")));
    }

    #[test]
    fn parse_full_config() {
        let config: Config = toml::from_str(
            r#"
repo_owner = "carol"
repo_name = "papers"
data_branch = "gh-data"
page_url = "https://carol.github.io/papers/"
storage_path = "/tmp/datasrc.json"
color = "never"
"#,
        )
        .unwrap();
        let defaults = merged(&config);
        assert_eq!(defaults.repo_owner, "carol");
        assert_eq!(defaults.repo_name, "papers");
        assert_eq!(defaults.data_branch, "gh-data");
        assert_eq!(
            config.page_url.as_deref(),
            Some("https://carol.github.io/papers/")
        );
        assert!(matches!(config.color, Some(ConfigColorMode::Never)));
    }

    #[test]
    fn empty_config_keeps_builtin_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(merged(&config), Defaults::default());
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "repo_owner = [").unwrap();
        assert!(Config::load_from(&path).is_none());

        fs::write(&path, "repo_owner = \"dave\"").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.repo_owner.as_deref(), Some("dave"));
    }
}
