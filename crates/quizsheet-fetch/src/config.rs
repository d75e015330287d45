//! Configuration loading and fetcher factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizsheet_core::collate::CollateOptions;
use quizsheet_core::model::{ScanStrategy, SortOrder};
use quizsheet_core::traits::ContentFetcher;

use crate::drive::{DriveFetcher, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Settings for the remote fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Where download requests are sent.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Top-level quizsheet configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizsheetConfig {
    /// Directory holding respondent files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Order in which respondent files are collated.
    #[serde(default)]
    pub sort_order: SortOrder,
    /// How question blocks are located in a sheet.
    #[serde(default)]
    pub scan_strategy: ScanStrategy,
    #[serde(default)]
    pub fetch: FetchConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for QuizsheetConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            sort_order: SortOrder::default(),
            scan_strategy: ScanStrategy::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl QuizsheetConfig {
    pub fn collate_options(&self) -> CollateOptions {
        CollateOptions {
            sort_order: self.sort_order,
            scan_strategy: self.scan_strategy,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Apply `QUIZSHEET_*` overrides, then expand `${VAR}` references.
fn apply_overrides(config: &mut QuizsheetConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(dir) = var("QUIZSHEET_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Some(url) = var("QUIZSHEET_FETCH_BASE_URL") {
        config.fetch.base_url = url;
    }

    config.data_dir = PathBuf::from(resolve_env_vars(&config.data_dir.to_string_lossy()));
    config.fetch.base_url = resolve_env_vars(&config.fetch.base_url);
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizsheet.toml` in the current directory
/// 2. `~/.config/quizsheet/config.toml`
///
/// Environment variable overrides: `QUIZSHEET_DATA_DIR`, `QUIZSHEET_FETCH_BASE_URL`.
pub fn load_config() -> Result<QuizsheetConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizsheetConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizsheet.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizsheetConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizsheetConfig::default(),
    };

    apply_overrides(&mut config, |k| std::env::var(k).ok());
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizsheet"))
}

/// Create the remote fetcher described by `config`.
pub fn create_fetcher(config: &FetchConfig) -> Result<Box<dyn ContentFetcher>> {
    Ok(Box::new(DriveFetcher::new(
        &config.base_url,
        config.timeout_secs,
    )?))
}
