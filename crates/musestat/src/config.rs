//! Configuration resolution: config file first, CLI flags on top.

use anyhow::{Context, Result};
use musestat_settings::{AnalyzeSettings, MusestatConfig, VerifySettings};
use tracing::debug;

use crate::cli::{AnalyzeArgs, GlobalArgs, VerifyArgs};

/// Load the explicit `--config` file, or discover one from the working directory.
pub(crate) fn load(global: &GlobalArgs) -> Result<MusestatConfig> {
    if let Some(path) = &global.config {
        debug!(path = %path.display(), "using explicit config");
        return MusestatConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    MusestatConfig::discover(&cwd).context("Failed to load musestat.toml")
}

/// Limits of 0 from either source are raised to 1.
pub(crate) fn resolve_analyze(args: &AnalyzeArgs, base: &AnalyzeSettings) -> AnalyzeSettings {
    AnalyzeSettings {
        advanced: args.advanced || base.advanced,
        top_words: args.top.unwrap_or(base.top_words).max(1),
        min_word_length: args.min_length.unwrap_or(base.min_word_length).max(1),
        language: args.lang.clone().or_else(|| base.language.clone()),
        stopwords: base.stopwords.clone(),
    }
}

pub(crate) fn resolve_verify(args: &VerifyArgs, base: &VerifySettings) -> VerifySettings {
    let mut extra_patterns = base.extra_patterns.clone();
    extra_patterns.extend(args.ignore.iter().cloned());
    VerifySettings {
        ignore_file: args.ignore_file.clone().unwrap_or_else(|| base.ignore_file.clone()),
        extra_patterns,
    }
}
