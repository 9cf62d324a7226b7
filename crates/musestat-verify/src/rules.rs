//! Per-line checks. Each check is pure over the line and pushes into the
//! bucket for its group.

use std::sync::LazyLock;

use musestat_types::{Issue, Severity};
use regex::Regex;

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*\s").expect("valid regex literal"));
static SCENE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*\*\*\s*$").expect("valid regex literal"));
static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+_\w+").expect("valid regex literal"));

static REPEATED_WORDS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ["the", "a", "and", "to", "of", "in", "it"]
        .into_iter()
        .map(|word| {
            let re = Regex::new(&format!(r"\b{word}\s+{word}\b")).expect("valid regex literal");
            (re, word)
        })
        .collect()
});

static REPEATED_MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!?]{2,}").expect("valid regex literal"));
static SPACE_BEFORE_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s[.,!?;:]").expect("valid regex literal"));
static LONG_ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{4,}").expect("valid regex literal"));
static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("valid regex literal"));

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})(?:[^#].*)?$").expect("valid regex literal"));
static WELL_FORMED_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+\S").expect("valid regex literal"));

static STRAIGHT_DIALOGUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\w+\s+"[^"]+"\s+\w+"#).expect("valid regex literal"));

const MARKERS: [&str; 8] = ["TODO", "FIXME", "XXX", "HACK", "NOTE:", "TK", "TBD", "PLACEHOLDER"];
const PLACEHOLDER_OPENERS: [&str; 3] = ["[INSERT", "[ADD", "[EDIT"];

/// Lines longer than this many characters are flagged.
pub const MAX_LINE_CHARS: usize = 1000;

/// Number of maximal runs of `ch` that are exactly `len` long.
pub(crate) fn count_runs(line: &str, ch: char, len: usize) -> usize {
    let mut runs = 0;
    let mut current = 0;
    for c in line.chars().chain(std::iter::once('\0')) {
        if c == ch {
            current += 1;
        } else {
            if current == len {
                runs += 1;
            }
            current = 0;
        }
    }
    runs
}

fn at(severity: Severity, category: &str, message: impl Into<String>, n: usize, line: &str) -> Issue {
    Issue::new(severity, category, message).on_line(n).with_preview(line)
}

pub(crate) fn emphasis(line: &str, n: usize, out: &mut Vec<Issue>) {
    const CATEGORY: &str = "Markdown Formatting";

    if count_runs(line, '*', 1) % 2 != 0 && !BULLET.is_match(line) {
        out.push(
            at(Severity::Error, CATEGORY, "Unmatched asterisk (*) - italic formatting incomplete", n, line)
                .with_suggestion("Ensure all * have matching pairs"),
        );
    }
    if count_runs(line, '*', 2) % 2 != 0 {
        out.push(
            at(Severity::Error, CATEGORY, "Unmatched double asterisk (**) - bold formatting incomplete", n, line)
                .with_suggestion("Ensure all ** have matching pairs"),
        );
    }
    if line.contains("***") && !SCENE_BREAK.is_match(line) {
        out.push(
            at(Severity::Warning, CATEGORY, "Triple asterisk (***) found - may be formatting error", n, line)
                .with_suggestion("Use ** for bold or * for italic, or *** for scene break"),
        );
    }
    if count_runs(line, '_', 1) % 2 != 0 && !SNAKE_CASE.is_match(line) {
        out.push(
            at(Severity::Warning, CATEGORY, "Unmatched underscore (_) - incomplete emphasis", n, line)
                .with_suggestion("Ensure all _ have matching pairs"),
        );
    }
}

pub(crate) fn markers(line: &str, n: usize, out: &mut Vec<Issue>) {
    let upper = line.to_uppercase();
    if let Some(marker) = MARKERS.iter().find(|m| upper.contains(*m)) {
        out.push(
            at(
                Severity::Error,
                "Pre-publish",
                format!("'{marker}' marker found - should be resolved before publishing"),
                n,
                line,
            )
            .with_suggestion("Complete or remove this marker"),
        );
    }
}

pub(crate) fn repeated_words(line: &str, n: usize, out: &mut Vec<Issue>) {
    let lowered = line.to_lowercase();
    for (re, word) in REPEATED_WORDS.iter() {
        if re.is_match(&lowered) {
            out.push(
                at(Severity::Warning, "Typos", format!("Repeated '{word} {word}'"), n, line)
                    .with_suggestion("Remove duplicate word"),
            );
        }
    }
}

pub(crate) fn punctuation(line: &str, n: usize, out: &mut Vec<Issue>) {
    const CATEGORY: &str = "Punctuation";

    if REPEATED_MARKS.is_match(line) {
        out.push(
            at(Severity::Warning, CATEGORY, "Multiple consecutive exclamation/question marks", n, line)
                .with_suggestion("Use single punctuation for professional writing"),
        );
    }
    if SPACE_BEFORE_MARK.is_match(line) {
        out.push(
            at(Severity::Error, CATEGORY, "Space before punctuation mark", n, line)
                .with_suggestion("Remove space before punctuation"),
        );
    }
    if LONG_ELLIPSIS.is_match(line) {
        out.push(
            at(Severity::Warning, CATEGORY, "Too many dots in ellipsis (should be 3)", n, line)
                .with_suggestion("Use three dots (...) or unicode ellipsis (…)"),
        );
    }
    if line.contains(" - ") {
        out.push(
            at(Severity::Info, CATEGORY, "Spaced hyphen found - consider em-dash", n, line)
                .with_suggestion("Use em-dash (—) without spaces for professional formatting"),
        );
    }
}

pub(crate) fn whitespace(line: &str, n: usize, out: &mut Vec<Issue>) {
    const CATEGORY: &str = "Whitespace";

    if line.ends_with(' ') || line.ends_with('\t') {
        out.push(
            Issue::new(Severity::Info, CATEGORY, "Trailing whitespace at end of line")
                .on_line(n)
                .with_suggestion("Remove trailing spaces/tabs"),
        );
    }

    let trimmed = line.trim();
    let widest = SPACE_RUN.find_iter(trimmed).map(|m| m.len()).max().unwrap_or(0);
    if widest > 2 {
        out.push(
            at(Severity::Warning, CATEGORY, format!("Multiple consecutive spaces ({widest}) found"), n, line)
                .with_suggestion("Use single spaces between words"),
        );
    }

    if line.contains('\t') && !trimmed.is_empty() {
        out.push(
            at(Severity::Info, CATEGORY, "Tab character found in content", n, line)
                .with_suggestion("Use spaces instead of tabs"),
        );
    }
}

/// Checks a heading line; `prev_level` carries across the whole document.
pub(crate) fn heading(line: &str, n: usize, prev_level: &mut usize, out: &mut Vec<Issue>) {
    let Some(level) = HEADING.captures(line).and_then(|c| c.get(1)).map(|m| m.len()) else {
        return;
    };

    if !WELL_FORMED_HEADING.is_match(line) {
        out.push(
            at(Severity::Error, "Heading Format", "Missing space after # in heading", n, line)
                .with_suggestion("Add space: '# Title' not '#Title'"),
        );
    }
    if *prev_level > 0 && level > *prev_level + 1 {
        out.push(
            at(
                Severity::Warning,
                "Heading Hierarchy",
                format!("Heading level skipped (H{prev_level} to H{level})"),
                n,
                line,
            )
            .with_suggestion("Use proper heading hierarchy without skipping levels"),
        );
    }
    *prev_level = level;
}

pub(crate) fn brackets(line: &str, n: usize, out: &mut Vec<Issue>) {
    if !(line.contains('[') && line.contains(']')) {
        return;
    }
    if line.matches('[').count() != line.matches(']').count() {
        out.push(
            at(Severity::Error, "Markdown Links", "Unmatched square brackets [ ]", n, line)
                .with_suggestion("Ensure all brackets are properly paired"),
        );
    }
}

pub(crate) fn line_length(line: &str, n: usize, out: &mut Vec<Issue>) {
    let chars = line.chars().count();
    if chars > MAX_LINE_CHARS {
        out.push(
            Issue::new(Severity::Warning, "Line Length", format!("Very long line ({chars} characters)"))
                .on_line(n)
                .with_suggestion("Consider breaking into multiple lines"),
        );
    }
}

pub(crate) fn straight_dialogue(line: &str, n: usize, out: &mut Vec<Issue>) {
    if line.contains('"') && STRAIGHT_DIALOGUE.is_match(line) {
        out.push(
            at(Severity::Info, "Smart Quotes", "Straight quote in primarily curly-quote document", n, line)
                .with_suggestion("Consider using curly quotes for consistency"),
        );
    }
}

pub(crate) fn placeholders(line: &str, n: usize, out: &mut Vec<Issue>) {
    const CATEGORY: &str = "Incomplete Content";

    let upper = line.to_uppercase();
    if PLACEHOLDER_OPENERS.iter().any(|p| upper.contains(p)) {
        out.push(
            at(Severity::Error, CATEGORY, "Placeholder text found", n, line)
                .with_suggestion("Replace with actual content before publishing"),
        );
    }
    if line.to_lowercase().contains("lorem ipsum") {
        out.push(
            at(Severity::Error, CATEGORY, "Lorem Ipsum placeholder text found", n, line)
                .with_suggestion("Replace with actual content"),
        );
    }
}
