//! # xkcd Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, expands and validates the xkcd configuration. The
//! configuration decides which external programs are used to fetch comic
//! metadata and to display images, and the default on/off state of the
//! boolean command-line options.
//!
//! ## Architecture
//!
//! Configuration sources (first match wins, no merging):
//! 1. A file named by `--config <PATH>` or the `XKCD_CONFIG` environment variable
//!    (it is an error if that file does not exist)
//! 2. The user file `config.toml` in the platform config directory
//!    (e.g. `~/.config/xkcd/config.toml` on Linux)
//! 3. Default values defined in the code
//!
//! After loading, `~` in program paths is expanded and the result is
//! validated before being handed to the command handler.
//!
//! ## Example
//!
//! ```toml
//! [fetcher]
//! program = "curl"
//! args = ["--silent", "--show-error", "--fail", "--location"]
//! url_template = "https://xkcd.com/{number}/info.0.json"
//!
//! [viewer]
//! program = "feh"
//! args = ["-Z"]
//!
//! [defaults]
//! open = true
//! print = true
//! ```
//!
use crate::core::error::{Result, XkcdError};
use anyhow::{anyhow, bail, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Placeholder substituted with the comic number in `fetcher.url_template`.
pub const NUMBER_PLACEHOLDER: &str = "{number}";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub defaults: OptionDefaults,
}

/// The program that downloads the comic metadata and writes it to stdout.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FetcherConfig {
    /// Executable name or path (can use ~). Will be expanded.
    #[serde(default = "default_fetcher_program")]
    pub program: String,
    /// Arguments placed before the URL.
    #[serde(default = "default_fetcher_args")]
    pub args: Vec<String>,
    /// URL (or any final argument) with `{number}` substituted.
    #[serde(default = "default_url_template")]
    pub url_template: String,
}

/// The image viewer launched on the comic's `img` link.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ViewerConfig {
    /// Executable name or path (can use ~). Will be expanded.
    #[serde(default = "default_viewer_program")]
    pub program: String,
    /// Arguments placed before the image link.
    #[serde(default = "default_viewer_args")]
    pub args: Vec<String>,
}

/// Values used when neither the positive nor the negated flag is given.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OptionDefaults {
    #[serde(default = "default_true")]
    pub open: bool,
    #[serde(default = "default_true")]
    pub print: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            program: default_fetcher_program(),
            args: default_fetcher_args(),
            url_template: default_url_template(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            program: default_viewer_program(),
            args: default_viewer_args(),
        }
    }
}

impl Default for OptionDefaults {
    fn default() -> Self {
        Self {
            open: true,
            print: true,
        }
    }
}

fn default_fetcher_program() -> String {
    "curl".to_string()
}
fn default_fetcher_args() -> Vec<String> {
    ["--silent", "--show-error", "--fail", "--location"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_url_template() -> String {
    "https://xkcd.com/{number}/info.0.json".to_string()
}
fn default_viewer_program() -> String {
    "feh".to_string()
}
fn default_viewer_args() -> Vec<String> {
    vec!["-Z".to_string()]
}
fn default_true() -> bool {
    true
}

impl FetcherConfig {
    /// Renders the URL template for the given comic number.
    pub fn url_for(&self, number: u32) -> String {
        self.url_template.replace(NUMBER_PLACEHOLDER, &number.to_string())
    }
}

const USER_CONFIG_FILENAME: &str = "config.toml";

/// Loads the configuration, preferring an explicitly named file.
///
/// ## Arguments
///
/// * `explicit` - Path from `--config` / `XKCD_CONFIG`, if any.
///
/// ## Returns
///
/// * `Result<Config>` - The expanded, validated configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!(XkcdError::Config(format!(
                    "Configuration file '{}' does not exist.",
                    path.display()
                )));
            }
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => load_user_config()?.unwrap_or_default(),
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(config_path) = user_config_path() else {
        debug!("Could not determine user config directory, using defaults.");
        return Ok(None);
    };
    if config_path.exists() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "xkcd", "xkcd")
        .map(|dirs| dirs.config_dir().join(USER_CONFIG_FILENAME))
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_config_paths(config: &mut Config) {
    config.fetcher.program = shellexpand::tilde(&config.fetcher.program).into_owned();
    config.viewer.program = shellexpand::tilde(&config.viewer.program).into_owned();
    debug!(
        "Expanded programs: fetcher={}, viewer={}",
        config.fetcher.program, config.viewer.program
    );
}

fn validate_config(config: &Config) -> Result<()> {
    if config.fetcher.program.trim().is_empty() {
        return Err(anyhow!(XkcdError::Config(
            "fetcher.program cannot be empty.".to_string()
        )));
    }
    if config.viewer.program.trim().is_empty() {
        return Err(anyhow!(XkcdError::Config(
            "viewer.program cannot be empty.".to_string()
        )));
    }
    if !config.fetcher.url_template.contains(NUMBER_PLACEHOLDER) {
        return Err(anyhow!(XkcdError::Config(format!(
            "fetcher.url_template '{}' must contain {}.",
            config.fetcher.url_template, NUMBER_PLACEHOLDER
        ))));
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [fetcher]
            program = "wget"
            args = ["-qO-"]

            [viewer]
            program = "sxiv"
            args = []

            [defaults]
            print = false
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.fetcher.program, "wget");
        assert_eq!(config.fetcher.args, vec!["-qO-"]);
        // Unset field keeps its default.
        assert_eq!(config.fetcher.url_template, default_url_template());
        assert_eq!(config.viewer.program, "sxiv");
        assert!(config.viewer.args.is_empty());
        assert!(config.defaults.open);
        assert!(!config.defaults.print);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.fetcher.program, "curl");
        assert_eq!(config.viewer.args, vec!["-Z"]);
    }

    #[test]
    fn test_deserialize_unknown_field_fails() {
        let result: std::result::Result<Config, _> = toml::from_str(
            r#"
            [viewer]
            programme = "feh"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_url_for_substitutes_number() {
        let fetcher = FetcherConfig::default();
        assert_eq!(fetcher.url_for(353), "https://xkcd.com/353/info.0.json");
    }

    #[test]
    fn test_expand_config_paths() {
        let mut config = Config {
            fetcher: FetcherConfig {
                program: "~/bin/fetch".to_string(),
                ..Default::default()
            },
            viewer: ViewerConfig {
                program: "/usr/bin/feh".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        expand_config_paths(&mut config);

        let base_dirs = directories::BaseDirs::new().unwrap();
        assert_eq!(
            config.fetcher.program,
            base_dirs.home_dir().join("bin/fetch").to_string_lossy()
        );
        assert_eq!(config.viewer.program, "/usr/bin/feh"); // Absolute path unchanged
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_missing_placeholder() {
        let config = Config {
            fetcher: FetcherConfig {
                url_template: "https://xkcd.com/info.0.json".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must contain {number}"));
    }

    #[test]
    fn test_validate_config_empty_program() {
        let config = Config {
            viewer: ViewerConfig {
                program: "  ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("viewer.program cannot be empty"));
    }

    #[test]
    fn test_load_config_explicit_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("xkcd.toml");
        fs::write(&path, "[defaults]\nopen = false\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(!config.defaults.open);
        assert!(config.defaults.print);
    }

    #[test]
    fn test_load_config_explicit_file_missing() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("absent.toml");

        let result = load_config(Some(&path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_config_explicit_file_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[fetcher\nprogram = ").unwrap();

        let result = load_config(Some(&path));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse TOML"));
    }
}
