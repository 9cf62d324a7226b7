//! # musestat-verify
//!
//! **Tier 3 (Verification)**
//!
//! Pre-publication checks over raw manuscript text.
//!
//! One forward scan over the lines keeps three pieces of state: whether the
//! scan is inside a fenced code block, the level of the last heading seen,
//! and the length of the current run of blank lines. Each line is fed to
//! the per-line checks, and every check group collects into its own bucket.
//! Buckets are concatenated in a fixed order, so issues come out grouped by
//! check and in document order within a group.
//!
//! Lines matching an [`IgnoreList`] pattern are skipped by every per-line
//! check. Blank-line runs and the document-wide quote census see all lines.
//!
//! ## Example
//! ```ignore
//! use musestat_ignore::IgnoreList;
//! use musestat_verify::verify_manuscript;
//!
//! let report = verify_manuscript(text, &IgnoreList::new(["^## Chapter"]));
//! if !report.summary.passed {
//!     eprintln!("{} errors", report.summary.errors);
//! }
//! ```

#![forbid(unsafe_code)]

mod rules;

use musestat_ignore::IgnoreList;
use musestat_types::{Issue, IssueSummary, Severity};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use rules::MAX_LINE_CHARS;

/// Straight and curly double quotes must both exceed this count to be "mixed".
pub const MIXED_QUOTE_THRESHOLD: usize = 10;
/// Runs of more than this many blank lines are reported.
pub const MAX_BLANK_RUN: usize = 2;

/// Check groups in output order.
#[derive(Debug, Clone, Copy)]
enum Group {
    Formatting,
    PrePublish,
    Typos,
    Punctuation,
    Whitespace,
    Headings,
    MixedQuotes,
    Links,
    Spacing,
    LineLength,
    StraightQuotes,
    Placeholders,
}

const GROUP_COUNT: usize = Group::Placeholders as usize + 1;

struct Buckets([Vec<Issue>; GROUP_COUNT]);

impl Buckets {
    fn new() -> Self {
        Self(std::array::from_fn(|_| Vec::new()))
    }

    fn get(&mut self, group: Group) -> &mut Vec<Issue> {
        &mut self.0[group as usize]
    }

    fn into_issues(self) -> Vec<Issue> {
        self.0.into_iter().flatten().collect()
    }
}

/// Document-wide double-quote counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteCensus {
    pub straight: usize,
    pub curly: usize,
}

impl QuoteCensus {
    pub fn of(text: &str) -> Self {
        Self {
            straight: text.matches('"').count(),
            curly: text.matches(['“', '”']).count(),
        }
    }

    pub fn is_mixed(&self) -> bool {
        self.straight > MIXED_QUOTE_THRESHOLD && self.curly > MIXED_QUOTE_THRESHOLD
    }

    pub fn mostly_curly(&self) -> bool {
        self.curly > self.straight * 2
    }
}

/// Result of verifying one manuscript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationReport {
    pub issues: Vec<Issue>,
    pub summary: IssueSummary,
}

impl VerificationReport {
    pub fn new(issues: Vec<Issue>) -> Self {
        let summary = IssueSummary::from_issues(&issues);
        Self { issues, summary }
    }

    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Issue> {
        self.issues.iter().filter(move |i| i.category == category)
    }
}

fn is_fence(line: &str) -> bool {
    line.trim().starts_with("```")
}

/// Run every check over `text`.
///
/// The ignore cache lives only for this call.
#[must_use]
pub fn verify_manuscript(text: &str, ignore: &IgnoreList) -> VerificationReport {
    let census = QuoteCensus::of(text);
    let mut matcher = ignore.matcher();
    let mut buckets = Buckets::new();

    let mut in_code_block = false;
    let mut prev_heading_level = 0;
    let mut blank_run = 0;

    for (idx, line) in text.split('\n').enumerate() {
        let n = idx + 1;

        let fence = is_fence(line);
        if fence {
            in_code_block = !in_code_block;
        }
        // Opening fences leave the flag set; closing fences are caught by `fence`.
        let code = fence || in_code_block;

        if line.trim().is_empty() {
            blank_run += 1;
        } else {
            if blank_run > MAX_BLANK_RUN {
                buckets.get(Group::Spacing).push(
                    Issue::new(Severity::Info, "Spacing", format!("{blank_run} consecutive blank lines"))
                        .on_line(n - 1)
                        .with_suggestion("Use single blank line between paragraphs"),
                );
            }
            blank_run = 0;
        }

        if matcher.is_ignored(n, line) {
            continue;
        }

        if !code {
            rules::emphasis(line, n, buckets.get(Group::Formatting));
        }
        rules::heading(line, n, &mut prev_heading_level, buckets.get(Group::Headings));
        rules::markers(line, n, buckets.get(Group::PrePublish));
        rules::repeated_words(line, n, buckets.get(Group::Typos));
        rules::punctuation(line, n, buckets.get(Group::Punctuation));
        rules::whitespace(line, n, buckets.get(Group::Whitespace));
        rules::brackets(line, n, buckets.get(Group::Links));
        rules::line_length(line, n, buckets.get(Group::LineLength));
        if census.mostly_curly() {
            rules::straight_dialogue(line, n, buckets.get(Group::StraightQuotes));
        }
        rules::placeholders(line, n, buckets.get(Group::Placeholders));
    }

    if census.is_mixed() {
        buckets.get(Group::MixedQuotes).push(
            Issue::new(
                Severity::Warning,
                "Smart Quotes",
                format!("Mixed straight ({}) and curly ({}) quotes", census.straight, census.curly),
            )
            .with_suggestion("Use consistent quote style throughout manuscript"),
        );
    }

    let report = VerificationReport::new(buckets.into_issues());
    debug!(
        issues = report.issues.len(),
        errors = report.summary.errors,
        warnings = report.summary.warnings,
        ignore_patterns = ignore.len(),
        "verification finished"
    );
    report
}
