//! # musestat-core
//!
//! The **primary library interface** for `musestat`. It coordinates the
//! counting, segmentation and enrichment crates to produce a
//! [`ManuscriptStats`] aggregate for one manuscript.
//!
//! Language detection, readability formulas and document decoding are
//! delegated through the traits in [`collaborators`]; the defaults answer
//! "unavailable" so the analyzer runs with no extra libraries.
//!
//! ## Example
//!
//! ```rust
//! use musestat_core::Analyzer;
//! use musestat_core::settings::AnalyzeSettings;
//!
//! let analyzer = Analyzer::new(AnalyzeSettings::default());
//! let stats = analyzer
//!     .analyze("# Chapter 1\n\nIt was a dark night.", None, None)
//!     .expect("non-empty text");
//! assert_eq!(stats.total_words, 7);
//! assert_eq!(stats.chapters.len(), 1);
//! ```

pub mod collaborators;
pub mod snapshot;

use std::path::Path;

use musestat_stopwords::{NoCorpus, StopwordCorpus};
use musestat_types::{ManuscriptStats, Snapshot};
use tracing::{debug, warn};

pub use musestat_settings as settings;
pub use musestat_types as types;

use collaborators::{
    LanguageDetector, ManuscriptReader, NoLanguageDetector, NoReadability, PlainTextReader,
    ReadabilityEngine,
};
use settings::AnalyzeSettings;

/// Characters of normalized text handed to the language detector.
pub const LANGUAGE_SAMPLE_CHARS: usize = 5000;

/// Runs the full analysis pipeline with a fixed set of collaborators.
pub struct Analyzer {
    settings: AnalyzeSettings,
    reader: Box<dyn ManuscriptReader>,
    detector: Box<dyn LanguageDetector>,
    readability: Box<dyn ReadabilityEngine>,
    corpus: Box<dyn StopwordCorpus>,
}

impl Analyzer {
    pub fn new(settings: AnalyzeSettings) -> Self {
        Self {
            settings,
            reader: Box::new(PlainTextReader),
            detector: Box::new(NoLanguageDetector),
            readability: Box::new(NoReadability),
            corpus: Box::new(NoCorpus),
        }
    }

    pub fn with_reader(mut self, reader: impl ManuscriptReader + 'static) -> Self {
        self.reader = Box::new(reader);
        self
    }

    pub fn with_language_detector(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    pub fn with_readability(mut self, engine: impl ReadabilityEngine + 'static) -> Self {
        self.readability = Box::new(engine);
        self
    }

    pub fn with_stopword_corpus(mut self, corpus: impl StopwordCorpus + 'static) -> Self {
        self.corpus = Box::new(corpus);
        self
    }

    pub fn settings(&self) -> &AnalyzeSettings {
        &self.settings
    }

    /// Read `path` with the configured reader and analyze its contents.
    pub fn analyze_path(&self, path: &Path, previous: Option<&Snapshot>) -> Option<ManuscriptStats> {
        let text = self.reader.read(path);
        self.analyze(&text, Some(&path.display().to_string()), previous)
    }

    /// Analyze `text`.
    ///
    /// Returns `None` for empty or whitespace-only input. `previous` feeds the
    /// milestone badge so only milestones crossed since that snapshot are
    /// reported as new.
    pub fn analyze(
        &self,
        text: &str,
        source: Option<&str>,
        previous: Option<&Snapshot>,
    ) -> Option<ManuscriptStats> {
        if text.trim().is_empty() {
            debug!(source, "nothing to analyze");
            return None;
        }

        let normalized = musestat_text::normalize(text);
        let total_words = musestat_text::word_tokens(&normalized).count();
        let total_characters = normalized.chars().count();
        let total_characters_no_spaces =
            normalized.chars().filter(|c| !c.is_whitespace()).count();
        let total_sentences = musestat_text::split_sentences(&normalized).len();
        let total_paragraphs = musestat_text::count_paragraphs(text);
        debug!(total_words, total_sentences, total_paragraphs, "counted");

        let chapters = musestat_chapters::extract_chapters(text);
        let chapter_stats = musestat_chapters::chapter_statistics(&chapters);
        debug!(chapters = chapters.len(), "segmented");

        let language = self.language_for(&normalized);
        let stopwords =
            musestat_stopwords::resolve(&language, &self.settings.stopwords, &*self.corpus);
        debug!(
            %language,
            stopwords = stopwords.len(),
            resolved = %stopwords.language,
            "stopwords resolved"
        );
        let common_words = musestat_text::most_common_words(
            text,
            self.settings.top_words,
            &stopwords.words,
            self.settings.min_word_length,
        );

        let avg_words_per_sentence = if total_sentences == 0 {
            0.0
        } else {
            total_words as f64 / total_sentences as f64
        };

        let prev_words = previous.map(|s| s.total_words).unwrap_or(0);
        let badge = musestat_milestones::achievement_badge(total_words, prev_words);
        let reading_time = musestat_milestones::estimate_reading_time(total_words);

        let (dialogue, pacing, readability) = if self.settings.advanced {
            let readability = self.readability.score(&normalized);
            if readability.is_none() {
                warn!("readability scores unavailable");
            }
            (
                Some(musestat_dialogue::analyze_dialogue(text)),
                Some(musestat_pacing::analyze_pacing(text)),
                readability,
            )
        } else {
            (None, None, None)
        };

        Some(ManuscriptStats {
            source: source.map(str::to_string),
            language,
            total_words,
            total_characters,
            total_characters_no_spaces,
            total_sentences,
            total_paragraphs,
            avg_words_per_sentence,
            chapters,
            chapter_stats,
            common_words,
            reading_time,
            badge,
            dialogue,
            pacing,
            readability,
        })
    }

    /// Configured language first; otherwise detection when advanced, else English.
    fn language_for(&self, normalized: &str) -> String {
        if let Some(lang) = self.settings.language.as_deref()
            && !lang.trim().is_empty()
        {
            return lang.trim().to_string();
        }
        if self.settings.advanced {
            let sample = match normalized.char_indices().nth(LANGUAGE_SAMPLE_CHARS) {
                Some((idx, _)) => &normalized[..idx],
                None => normalized,
            };
            let detected = self.detector.detect(sample);
            debug!(%detected, "language detected");
            return detected;
        }
        musestat_stopwords::FALLBACK_LANGUAGE.to_string()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzeSettings::default())
    }
}
