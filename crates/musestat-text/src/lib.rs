//! # musestat-text
//!
//! **Tier 1 (Text Primitives)**
//!
//! Markup normalization and the counting primitives every other analysis
//! crate builds on.
//!
//! ## What belongs here
//! * [`normalize`]: strip markdown/HTML markup to a plain-text view
//! * Word, character, sentence and paragraph counts
//! * Word frequency ranking with stopword filtering
//!
//! ## What does NOT belong here
//! * Stopword inventories (see `musestat-stopwords`)
//! * Chapter segmentation (see `musestat-chapters`)

#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use musestat_types::WordFrequency;
use regex::Regex;

/// Ordered markup removal rules. Images must run before links.
static MARKUP_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?s)```.*?```", ""),
        (r"`[^`]+`", ""),
        (r"!\[[^\]]*\]\([^)]+\)", ""),
        (r"\[([^\]]+)\]\([^)]+\)", "$1"),
        (r"<[^>]+>", ""),
        (r"(?m)^#+\s+", ""),
        (r"[*_]{1,3}([^*_]+)[*_]{1,3}", "$1"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid regex literal"), replacement))
    .collect()
});

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex literal"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex literal"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex literal"));

fn normalize_once(text: &str) -> String {
    let mut out = text.to_string();
    for (re, replacement) in MARKUP_RULES.iter() {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out
}

/// Strip markup and return the plain-text view used for counting.
///
/// Rules apply in a fixed order: fenced code, inline code, images, links
/// (kept as their text), HTML tags, heading markers, emphasis markers. The
/// sequence is repeated until the output stops changing, so
/// `normalize(normalize(t)) == normalize(t)` for every input.
#[must_use]
pub fn normalize(text: &str) -> String {
    // Every rule either shrinks the text or leaves it untouched, so this terminates.
    let mut current = normalize_once(text);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Word tokens (maximal runs of Unicode word characters) in `text`, as-is.
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

/// Number of word tokens in the normalized view of `text`.
#[must_use]
pub fn count_words(text: &str) -> usize {
    word_tokens(&normalize(text)).count()
}

/// Number of characters in the normalized view of `text`.
///
/// With `include_spaces == false` every Unicode whitespace character is skipped.
#[must_use]
pub fn count_characters(text: &str, include_spaces: bool) -> usize {
    let normalized = normalize(text);
    if include_spaces {
        normalized.chars().count()
    } else {
        normalized.chars().filter(|c| !c.is_whitespace()).count()
    }
}

/// Split already-normalized text into trimmed, non-empty sentences.
pub fn split_sentences(normalized: &str) -> Vec<&str> {
    SENTENCE_END
        .split(normalized)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split raw text on blank-line boundaries into trimmed, non-empty paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

#[must_use]
pub fn count_sentences(text: &str) -> usize {
    split_sentences(&normalize(text)).len()
}

/// Paragraph count over the raw (un-normalized) text.
#[must_use]
pub fn count_paragraphs(text: &str) -> usize {
    split_paragraphs(text).len()
}

/// The `n` most frequent words, most frequent first.
///
/// Tokens are lowercased; tokens in `stopwords` or shorter than `min_length`
/// characters are dropped. Equal counts keep first-seen order.
#[must_use]
pub fn most_common_words(
    text: &str,
    n: usize,
    stopwords: &BTreeSet<String>,
    min_length: usize,
) -> Vec<WordFrequency> {
    let lowered = normalize(text).to_lowercase();

    let mut ranked: Vec<WordFrequency> = Vec::new();
    let mut positions: BTreeMap<&str, usize> = BTreeMap::new();
    for token in word_tokens(&lowered) {
        if token.chars().count() < min_length || stopwords.contains(token) {
            continue;
        }
        match positions.get(token) {
            Some(&idx) => ranked[idx].count += 1,
            None => {
                positions.insert(token, ranked.len());
                ranked.push(WordFrequency::new(token, 1));
            }
        }
    }

    // `sort_by` is stable, so ties stay in first-seen order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}
