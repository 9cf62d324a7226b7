//! # musestat-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings types for the analyze and verify pipelines, plus the
//! TOML configuration file that sets their defaults.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Default values
//! * Loading `musestat.toml` / the user config file
//!
//! ## What does NOT belong here
//! * Clap parsing (see the `musestat` binary)
//! * Analysis logic
//!
//! ## Example
//! ```toml
//! [analyze]
//! top_words = 30
//! language = "de"
//!
//! [analyze.stopwords]
//! extra = ["sagte"]
//! aggressive = true
//!
//! [verify]
//! extra_patterns = ["^## Chapter"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Project-local configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "musestat.toml";
/// Default ignore file name for verification.
pub const DEFAULT_IGNORE_FILE: &str = ".musestatignore";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Controls for building a stopword set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StopwordSettings {
    /// Words added to the set.
    pub extra: Vec<String>,
    /// Words removed from the set.
    pub exclude: Vec<String>,
    /// Add common adverbs and particles for the language.
    pub aggressive: bool,
    /// Treat bare digits `0`-`9` as stopwords.
    pub include_digits: bool,
    /// Use the English inventory when the language is unknown.
    pub fallback_to_english: bool,
}

impl Default for StopwordSettings {
    fn default() -> Self {
        Self {
            extra: Vec::new(),
            exclude: Vec::new(),
            aggressive: false,
            include_digits: true,
            fallback_to_english: true,
        }
    }
}

/// Settings for `musestat analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalyzeSettings {
    /// Run dialogue, pacing, readability and language detection.
    pub advanced: bool,
    /// Number of frequent words to report.
    pub top_words: usize,
    /// Minimum characters for a word to be ranked.
    pub min_word_length: usize,
    /// Language code; detected (advanced) or English when unset.
    pub language: Option<String>,
    pub stopwords: StopwordSettings,
}

impl Default for AnalyzeSettings {
    fn default() -> Self {
        Self {
            advanced: false,
            top_words: 20,
            min_word_length: 3,
            language: None,
            stopwords: StopwordSettings::default(),
        }
    }
}

/// Settings for `musestat verify`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VerifySettings {
    /// Ignore file, relative to the working directory.
    pub ignore_file: PathBuf,
    /// Patterns applied in addition to the ignore file.
    pub extra_patterns: Vec<String>,
}

impl Default for VerifySettings {
    fn default() -> Self {
        Self {
            ignore_file: PathBuf::from(DEFAULT_IGNORE_FILE),
            extra_patterns: Vec::new(),
        }
    }
}

/// Top-level `musestat.toml` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MusestatConfig {
    pub analyze: AnalyzeSettings,
    pub verify: VerifySettings,
}

impl MusestatConfig {
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Find and load configuration for `cwd`.
    ///
    /// Looks for `musestat.toml` in `cwd`, then `musestat/config.toml` under
    /// the user config directory. Falls back to defaults when neither exists.
    pub fn discover(cwd: &Path) -> Result<Self, SettingsError> {
        Self::discover_in(cwd, user_config_path().as_deref())
    }

    /// [`discover`](Self::discover) with an explicit user config path.
    pub fn discover_in(cwd: &Path, user_config: Option<&Path>) -> Result<Self, SettingsError> {
        let project = cwd.join(PROJECT_CONFIG_FILE);
        let candidates = std::iter::once(project.as_path()).chain(user_config);
        for path in candidates {
            if path.is_file() {
                debug!(path = %path.display(), "loading config");
                return Self::from_file(path);
            }
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }
}

/// `<config_dir>/musestat/config.toml`, when the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("musestat").join("config.toml"))
}
