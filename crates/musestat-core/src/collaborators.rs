//! Seams for the capabilities the core delegates to external libraries.

use std::path::Path;

use musestat_types::ReadabilityScores;
use tracing::{debug, warn};

/// Turns a manuscript file into text.
///
/// Readers never fail: anything that cannot be read yields an empty string,
/// which the analyzer treats as "nothing to analyze".
pub trait ManuscriptReader {
    fn read(&self, path: &Path) -> String;
}

/// Identifies the language of a text sample.
///
/// Implementations answer an ISO 639-1 code, or `"unknown"`.
pub trait LanguageDetector {
    fn detect(&self, text: &str) -> String;
}

/// Computes readability formulas over normalized text.
pub trait ReadabilityEngine {
    /// `None` when scores are unavailable for this text or engine.
    fn score(&self, normalized: &str) -> Option<ReadabilityScores>;
}

/// Reads Markdown and plain-text files from disk.
///
/// `.docx` and `.rtf` need a dedicated decoder and come back empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextReader;

impl ManuscriptReader for PlainTextReader {
    fn read(&self, path: &Path) -> String {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("md" | "markdown" | "txt") => {}
            Some(kind @ ("docx" | "rtf")) => {
                warn!(path = %path.display(), kind, "no reader available for this format");
                return String::new();
            }
            other => {
                warn!(
                    path = %path.display(),
                    extension = other.unwrap_or(""),
                    "unrecognized extension, reading as plain text"
                );
            }
        }

        match std::fs::read(path) {
            Ok(bytes) => {
                debug!(path = %path.display(), bytes = bytes.len(), "read manuscript");
                String::from_utf8_lossy(&bytes).into_owned()
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read manuscript");
                String::new()
            }
        }
    }
}

/// Detector used when no language identification library is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLanguageDetector;

impl LanguageDetector for NoLanguageDetector {
    fn detect(&self, _text: &str) -> String {
        "unknown".to_string()
    }
}

/// Readability engine that never produces scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReadability;

impl ReadabilityEngine for NoReadability {
    fn score(&self, _normalized: &str) -> Option<ReadabilityScores> {
        None
    }
}
