//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizgrade configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizgradeConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Show the correct choice for incorrectly answered questions.
    #[serde(default = "default_true")]
    pub show_correct_answers: bool,
    /// Exit with status 1 when a reviewed percentage is below this value.
    #[serde(default)]
    pub fail_below: Option<f64>,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for QuizgradeConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            show_correct_answers: true,
            fail_below: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizgrade.toml` in the current directory
/// 2. `~/.config/quizgrade/config.toml`
///
/// `QUIZGRADE_FORMAT` overrides `default_format`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizgradeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizgrade.toml");
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
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizgradeConfig::default(),
    };

    if let Ok(format) = std::env::var("QUIZGRADE_FORMAT") {
        if !format.trim().is_empty() {
            config.default_format = format.trim().to_string();
        }
    }

    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn parse_config(content: &str) -> Result<QuizgradeConfig> {
    Ok(toml::from_str::<QuizgradeConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizgrade"))
}
