//! # musestat-ignore
//!
//! **Tier 1 (Pattern Matching)**
//!
//! Line-suppression patterns for `musestat verify`.
//!
//! ## Pattern kinds
//! * **Wildcard**: contains `*` or `?`. `*` spans any run of characters,
//!   `?` matches one character. Literal parts must appear in order.
//! * **Prefix**: starts with `^`. The rest must begin the line.
//! * **Text**: anything else. Substring match, then a regex search if the
//!   pattern is a valid regex.
//!
//! All matching is case-insensitive. The first matching pattern wins.
//!
//! ## What belongs here
//! * Pattern parsing and matching
//! * Ignore-file loading and template writing
//! * The per-pass match cache ([`IgnoreMatcher`])

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};
use thiserror::Error;
use tracing::debug;

/// Starter contents for a new ignore file.
pub const IGNORE_TEMPLATE: &str = r#"# .musestatignore
# Lines matching any pattern below are skipped by `musestat verify`.
# Blank lines and lines starting with '#' are not patterns.
# Matching is case-insensitive.
#
# Pattern kinds:
#
#   Plain text    TODO(editor)    lines containing the text (or matching it as a regex)
#   Starts with   ^## Chapter     lines beginning with the text after '^'
#   Wildcards     *Author*        '*' spans any characters, '?' exactly one
#
# Examples (remove the leading '# ' to enable):
#
# ^## Chapter
# ^> Epigraph
# *copyright*
# Draft v?
"#;

#[derive(Debug, Error)]
pub enum IgnoreError {
    #[error("Failed to read ignore file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write ignore file: {0}")]
    Write(#[from] std::io::Error),

    #[error("Directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("{} already exists. Use --force to overwrite, or --print to just view the template.", .0.display())]
    AlreadyExists(PathBuf),
}

/// A `*`-free segment of a wildcard pattern.
#[derive(Debug, Clone)]
pub enum WildcardPart {
    Literal(String),
    /// A part containing `?`, compiled with `?` as `.`.
    Single(Regex),
}

/// One parsed ignore pattern.
#[derive(Debug, Clone)]
pub enum IgnorePattern {
    Wildcard(Vec<WildcardPart>),
    Prefix(String),
    Text {
        needle: String,
        regex: Option<Regex>,
    },
}

impl IgnorePattern {
    pub fn parse(raw: &str) -> Self {
        if raw.contains('*') || raw.contains('?') {
            let parts = raw
                .to_lowercase()
                .split('*')
                .filter(|part| !part.is_empty())
                .map(|part| {
                    if !part.contains('?') {
                        return WildcardPart::Literal(part.to_string());
                    }
                    let escaped: Vec<String> = part.split('?').map(regex::escape).collect();
                    match Regex::new(&escaped.join(".")) {
                        Ok(re) => WildcardPart::Single(re),
                        // Escaped literals always compile; keep the text as a fallback.
                        Err(_) => WildcardPart::Literal(part.to_string()),
                    }
                })
                .collect();
            IgnorePattern::Wildcard(parts)
        } else if let Some(rest) = raw.strip_prefix('^') {
            IgnorePattern::Prefix(rest.to_lowercase())
        } else {
            IgnorePattern::Text {
                needle: raw.to_lowercase(),
                regex: RegexBuilder::new(raw).case_insensitive(true).build().ok(),
            }
        }
    }

    /// Match against `line`; `lowered` must be `line.to_lowercase()`.
    fn matches(&self, line: &str, lowered: &str) -> bool {
        match self {
            IgnorePattern::Wildcard(parts) => {
                let mut pos = 0;
                for part in parts {
                    let rest = &lowered[pos..];
                    let end = match part {
                        WildcardPart::Literal(lit) => rest.find(lit.as_str()).map(|i| i + lit.len()),
                        WildcardPart::Single(re) => re.find(rest).map(|m| m.end()),
                    };
                    match end {
                        Some(end) => pos += end,
                        None => return false,
                    }
                }
                true
            }
            IgnorePattern::Prefix(prefix) => lowered.starts_with(prefix.as_str()),
            IgnorePattern::Text { needle, regex } => {
                lowered.contains(needle.as_str()) || regex.as_ref().is_some_and(|re| re.is_match(line))
            }
        }
    }
}

/// An ordered, immutable list of ignore patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    raw: Vec<String>,
    patterns: Vec<IgnorePattern>,
}

impl IgnoreList {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        list.extend(patterns);
        list
    }

    /// Parse ignore-file contents: one pattern per line, skipping blank
    /// lines and `#` comments. Patterns are trimmed.
    pub fn parse(content: &str) -> Self {
        Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load an ignore file. A missing file yields an empty list.
    pub fn load(path: &Path) -> Result<Self, IgnoreError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let list = Self::parse(&content);
                debug!(path = %path.display(), patterns = list.len(), "loaded ignore file");
                Ok(list)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no ignore file");
                Ok(Self::default())
            }
            Err(source) => Err(IgnoreError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Append patterns, dropping empty ones and exact duplicates.
    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() || self.raw.iter().any(|p| p == pattern) {
                continue;
            }
            self.raw.push(pattern.to_string());
            self.patterns.push(IgnorePattern::parse(pattern));
        }
    }

    /// Raw pattern strings in order.
    pub fn patterns(&self) -> &[String] {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[must_use]
    pub fn should_ignore(&self, line: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let lowered = line.to_lowercase();
        self.patterns.iter().any(|p| p.matches(line, &lowered))
    }

    /// A fresh matcher with an empty cache, for one verification pass.
    pub fn matcher(&self) -> IgnoreMatcher<'_> {
        IgnoreMatcher {
            list: self,
            cache: BTreeMap::new(),
        }
    }
}

/// Memoizes [`IgnoreList::should_ignore`] by line number for one pass.
#[derive(Debug)]
pub struct IgnoreMatcher<'a> {
    list: &'a IgnoreList,
    cache: BTreeMap<usize, bool>,
}

impl IgnoreMatcher<'_> {
    pub fn is_ignored(&mut self, line_number: usize, line: &str) -> bool {
        if self.list.is_empty() {
            return false;
        }
        *self
            .cache
            .entry(line_number)
            .or_insert_with(|| self.list.should_ignore(line))
    }
}

/// Write [`IGNORE_TEMPLATE`] to `path`, refusing to overwrite unless `force`.
pub fn write_template(path: &Path, force: bool) -> Result<PathBuf, IgnoreError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty())
        && !dir.exists()
    {
        return Err(IgnoreError::MissingDirectory(dir.to_path_buf()));
    }
    if path.exists() && !force {
        return Err(IgnoreError::AlreadyExists(path.to_path_buf()));
    }
    fs::write(path, IGNORE_TEMPLATE)?;
    Ok(path.to_path_buf())
}
