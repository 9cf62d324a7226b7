//! # musestat-dialogue
//!
//! **Tier 2 (Analysis)**
//!
//! Counts lines that carry quoted speech and the words inside the quotes.
//! Straight (`"` `'`) and curly (`“ ” ‘ ’`) quote marks are interchangeable:
//! any opening mark pairs with the nearest following mark.

#![forbid(unsafe_code)]

use std::sync::LazyLock;

use musestat_math::safe_percent;
use musestat_types::DialogueStats;
use regex::Regex;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["“”'‘’](.*?)["“”'‘’]"#).expect("valid regex literal"));

/// Contents of every minimal quoted span in `line`.
pub fn quoted_spans(line: &str) -> impl Iterator<Item = &str> {
    QUOTED
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[must_use]
pub fn analyze_dialogue(text: &str) -> DialogueStats {
    let mut total_lines = 0;
    let mut dialogue_lines = 0;
    let mut dialogue_words = 0;

    for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        total_lines += 1;
        let mut spans = quoted_spans(line).peekable();
        if spans.peek().is_none() {
            continue;
        }
        dialogue_lines += 1;
        dialogue_words += spans.map(|s| s.split_whitespace().count()).sum::<usize>();
    }

    DialogueStats {
        dialogue_line_count: dialogue_lines,
        dialogue_word_count: dialogue_words,
        dialogue_ratio_percent: safe_percent(dialogue_lines, total_lines),
    }
}
