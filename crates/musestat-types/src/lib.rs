//! # musestat-types
//!
//! **Tier 0 (Core Types)**
//!
//! Pure data contracts shared by the musestat analysis crates: chapter
//! records, aggregate statistics, verification findings and snapshots.
//!
//! ## What belongs here
//! * Value objects with Serde derives
//! * Lossless conversions between records (stats -> snapshot)
//!
//! ## What does NOT belong here
//! * Text scanning or regex logic
//! * File I/O
//! * CLI argument parsing

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in [`Issue::line_preview`].
pub const LINE_PREVIEW_CHARS: usize = 70;

// -----------
// Chapters
// -----------

/// A contiguous span of manuscript text introduced by a recognized heading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    pub content: String,
    pub word_count: usize,
    pub scene_break_count: usize,
}

/// Descriptive statistics over chapter word counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChapterStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
    pub range: usize,
    pub coefficient_of_variation: f64,
    pub shortest_chapter_title: String,
    pub longest_chapter_title: String,
}

// ----------------
// Word frequency
// ----------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

impl WordFrequency {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

// ---------------------
// Verification issues
// ---------------------

/// Issue severity. Ordered `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        })
    }
}

/// A single verification finding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub category: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    pub fn new(severity: Severity, category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            category: category.into(),
            message: message.into(),
            line_number: None,
            line_preview: None,
            suggestion: None,
        }
    }

    /// Attach a 1-based line number.
    #[must_use]
    pub fn on_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// Attach a trimmed preview of `line`, capped at [`LINE_PREVIEW_CHARS`].
    #[must_use]
    pub fn with_preview(mut self, line: &str) -> Self {
        self.line_preview = Some(line_preview(line));
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Trim `line` and keep at most [`LINE_PREVIEW_CHARS`] characters.
#[must_use]
pub fn line_preview(line: &str) -> String {
    line.trim().chars().take(LINE_PREVIEW_CHARS).collect()
}

/// Severity tallies for a set of issues.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueSummary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    /// `true` when no error-level issue was found.
    pub passed: bool,
}

impl IssueSummary {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let count = |severity: Severity| issues.iter().filter(|i| i.severity == severity).count();
        let errors = count(Severity::Error);
        Self {
            errors,
            warnings: count(Severity::Warning),
            infos: count(Severity::Info),
            passed: errors == 0,
        }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos
    }
}

// ----------------------
// Dialogue and pacing
// ----------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DialogueStats {
    pub dialogue_line_count: usize,
    pub dialogue_word_count: usize,
    pub dialogue_ratio_percent: f64,
}

/// A 1-based position in a sentence or paragraph sequence and its word count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexedCount {
    pub index: usize,
    pub word_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PacingStats {
    pub long_sentences: Vec<IndexedCount>,
    pub long_paragraphs: Vec<IndexedCount>,
    pub short_paragraphs: Vec<IndexedCount>,
    pub avg_sentence_length: f64,
    pub avg_paragraph_length: f64,
}

// -------------
// Readability
// -------------

/// Scores supplied by an external readability engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReadabilityScores {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
    pub coleman_liau_index: f64,
    pub automated_readability_index: f64,
}

// ---------------------------
// Reading time and milestones
// ---------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct HoursMinutes {
    pub hours: u64,
    pub minutes: u64,
}

impl HoursMinutes {
    pub fn total_minutes(&self) -> u64 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadingTime {
    pub fast: HoursMinutes,
    pub average: HoursMinutes,
    pub slow: HoursMinutes,
    pub pages_min: u64,
    pub pages_max: u64,
    pub pages_avg: u64,
    pub range_str: String,
    pub pages_str: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MilestoneBadge {
    pub threshold: usize,
    pub title: String,
    pub icon: String,
    pub message: String,
    pub unlocked: bool,
    #[serde(default)]
    pub newly_unlocked: bool,
}

// ------------------------
// Aggregate statistics
// ------------------------

/// The top-level statistics record for one manuscript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManuscriptStats {
    pub source: Option<String>,
    pub language: String,
    pub total_words: usize,
    pub total_characters: usize,
    pub total_characters_no_spaces: usize,
    pub total_sentences: usize,
    pub total_paragraphs: usize,
    pub avg_words_per_sentence: f64,
    pub chapters: Vec<Chapter>,
    pub chapter_stats: Option<ChapterStatistics>,
    pub common_words: Vec<WordFrequency>,
    pub reading_time: ReadingTime,
    pub badge: MilestoneBadge,
    pub dialogue: Option<DialogueStats>,
    pub pacing: Option<PacingStats>,
    pub readability: Option<ReadabilityScores>,
}

// ----------
// Snapshots
// ----------

/// Flat, persisted subset of [`ManuscriptStats`] used for progress comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub timestamp: String,
    pub file: String,
    pub total_words: usize,
    pub total_characters: usize,
    pub total_sentences: usize,
    pub total_paragraphs: usize,
    pub chapters: usize,
    pub dialogue_words: usize,
}

impl Snapshot {
    pub fn capture(stats: &ManuscriptStats, file: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            file: file.into(),
            total_words: stats.total_words,
            total_characters: stats.total_characters,
            total_sentences: stats.total_sentences,
            total_paragraphs: stats.total_paragraphs,
            chapters: stats.chapters.len(),
            dialogue_words: stats
                .dialogue
                .as_ref()
                .map(|d| d.dialogue_word_count)
                .unwrap_or(0),
        }
    }
}

/// Signed change between two snapshots (`current - previous`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotDelta {
    pub words: i64,
    pub characters: i64,
    pub sentences: i64,
    pub paragraphs: i64,
    pub chapters: i64,
    pub dialogue_words: i64,
}

impl SnapshotDelta {
    pub fn between(previous: &Snapshot, current: &Snapshot) -> Self {
        let diff = |cur: usize, prev: usize| cur as i64 - prev as i64;
        Self {
            words: diff(current.total_words, previous.total_words),
            characters: diff(current.total_characters, previous.total_characters),
            sentences: diff(current.total_sentences, previous.total_sentences),
            paragraphs: diff(current.total_paragraphs, previous.total_paragraphs),
            chapters: diff(current.chapters, previous.chapters),
            dialogue_words: diff(current.dialogue_words, previous.dialogue_words),
        }
    }
}
