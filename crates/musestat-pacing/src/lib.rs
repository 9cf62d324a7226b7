//! # musestat-pacing
//!
//! **Tier 2 (Analysis)**
//!
//! Flags sentences and paragraphs whose length tends to slow or speed up
//! the reading pace.
//!
//! Sentences come from the normalized text, paragraphs from the raw text,
//! using the same splitting as `musestat-text` counts.

#![forbid(unsafe_code)]

use musestat_math::mean;
use musestat_text::{normalize, split_paragraphs, split_sentences};
use musestat_types::{IndexedCount, PacingStats};

/// Sentences with more words than this are long.
pub const LONG_SENTENCE_WORDS: usize = 40;
/// Paragraphs with more words than this are long.
pub const LONG_PARAGRAPH_WORDS: usize = 200;
/// Non-empty paragraphs with fewer words than this are short.
pub const SHORT_PARAGRAPH_WORDS: usize = 10;
/// Maximum entries reported per category.
pub const MAX_REPORTED: usize = 10;

fn flag(lengths: &[usize], pred: impl Fn(usize) -> bool) -> Vec<IndexedCount> {
    lengths
        .iter()
        .enumerate()
        .filter(|&(_, &words)| pred(words))
        .take(MAX_REPORTED)
        .map(|(i, &word_count)| IndexedCount {
            index: i + 1,
            word_count,
        })
        .collect()
}

#[must_use]
pub fn analyze_pacing(text: &str) -> PacingStats {
    let normalized = normalize(text);
    let sentence_lengths: Vec<usize> = split_sentences(&normalized)
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect();
    let paragraph_lengths: Vec<usize> = split_paragraphs(text)
        .iter()
        .map(|p| p.split_whitespace().count())
        .collect();

    PacingStats {
        long_sentences: flag(&sentence_lengths, |w| w > LONG_SENTENCE_WORDS),
        long_paragraphs: flag(&paragraph_lengths, |w| w > LONG_PARAGRAPH_WORDS),
        short_paragraphs: flag(&paragraph_lengths, |w| w > 0 && w < SHORT_PARAGRAPH_WORDS),
        avg_sentence_length: mean(&sentence_lengths),
        avg_paragraph_length: mean(&paragraph_lengths),
    }
}
