//! # musestat-chapters
//!
//! **Tier 2 (Structure)**
//!
//! Splits raw manuscript text into chapters and summarizes their lengths.
//!
//! Recognized headings, tested in this order (first match wins):
//!
//! | Pattern            | Example              |
//! |--------------------|----------------------|
//! | `# Title`          | `# The Storm`        |
//! | `## Title`         | `## The Storm`       |
//! | `Chapter N: Title` | `Chapter 3: Storm`   |
//! | `CHAPTER N: Title` | `CHAPTER 3 Storm`    |
//! | `Ch. N: Title`     | `Ch.3: Storm`        |
//!
//! Lines holding only `***` or `---` are scene breaks. Text before the
//! first heading is not part of any chapter.

#![forbid(unsafe_code)]

use std::sync::LazyLock;

use musestat_math::{coefficient_of_variation, mean, population_std_dev};
use musestat_text::count_words;
use musestat_types::{Chapter, ChapterStatistics};
use regex::Regex;
use tracing::debug;

static HEADINGS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        r"^#\s+(.+)$",
        r"^##\s+(.+)$",
        r"^Chapter\s+\d+[:\s]+(.+)",
        r"^CHAPTER\s+\d+[:\s]+(.+)",
        r"^Ch\.\s*\d+[:\s]+(.+)",
    ]
    .map(|p| Regex::new(p).expect("valid regex literal"))
});

static SCENE_BREAKS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [r"^\s*\*\*\*\s*$", r"^\s*---\s*$"].map(|p| Regex::new(p).expect("valid regex literal"))
});

/// Title of the chapter this line opens, if it is a heading. May be empty
/// for a heading with only whitespace after the marker.
#[must_use]
pub fn heading_title(line: &str) -> Option<&str> {
    HEADINGS
        .iter()
        .find_map(|re| re.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

#[must_use]
pub fn is_scene_break(line: &str) -> bool {
    SCENE_BREAKS.iter().any(|re| re.is_match(line))
}

/// Chapter currently being accumulated.
struct OpenChapter<'a> {
    title: &'a str,
    lines: Vec<&'a str>,
    scene_breaks: usize,
}

impl OpenChapter<'_> {
    fn close(self) -> Chapter {
        let content = self.lines.join("\n");
        Chapter {
            title: self.title.to_string(),
            word_count: count_words(&content),
            content,
            scene_break_count: self.scene_breaks,
        }
    }
}

enum Segmenter<'a> {
    Idle,
    InChapter(OpenChapter<'a>),
}

impl<'a> Segmenter<'a> {
    fn feed(self, line: &'a str, out: &mut Vec<Chapter>) -> Self {
        if let Some(title) = heading_title(line) {
            if let Segmenter::InChapter(open) = self {
                out.push(open.close());
            }
            // A blank title ends the open chapter without starting a new one.
            if title.is_empty() {
                return Segmenter::Idle;
            }
            return Segmenter::InChapter(OpenChapter {
                title,
                lines: Vec::new(),
                scene_breaks: 0,
            });
        }

        match self {
            Segmenter::Idle => Segmenter::Idle,
            Segmenter::InChapter(mut open) => {
                if is_scene_break(line) {
                    open.scene_breaks += 1;
                } else {
                    open.lines.push(line);
                }
                Segmenter::InChapter(open)
            }
        }
    }

    fn finish(self, out: &mut Vec<Chapter>) {
        if let Segmenter::InChapter(open) = self {
            out.push(open.close());
        }
    }
}

/// Partition `text` into chapters in document order.
///
/// Returns an empty vector when no heading is recognized.
#[must_use]
pub fn extract_chapters(text: &str) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut state = Segmenter::Idle;
    for line in text.split('\n') {
        state = state.feed(line, &mut chapters);
    }
    state.finish(&mut chapters);
    debug!(chapters = chapters.len(), "segmented manuscript");
    chapters
}

/// Descriptive statistics over chapter word counts; `None` for no chapters.
///
/// Ties for shortest or longest go to the earliest chapter.
#[must_use]
pub fn chapter_statistics(chapters: &[Chapter]) -> Option<ChapterStatistics> {
    let first = chapters.first()?;
    let counts: Vec<usize> = chapters.iter().map(|c| c.word_count).collect();

    let mut shortest = first;
    let mut longest = first;
    for chapter in &chapters[1..] {
        if chapter.word_count < shortest.word_count {
            shortest = chapter;
        }
        if chapter.word_count > longest.word_count {
            longest = chapter;
        }
    }

    let mu = mean(&counts);
    let std_dev = population_std_dev(&counts);
    Some(ChapterStatistics {
        mean: mu,
        std_dev,
        min: shortest.word_count,
        max: longest.word_count,
        range: longest.word_count - shortest.word_count,
        coefficient_of_variation: coefficient_of_variation(std_dev, mu),
        shortest_chapter_title: shortest.title.clone(),
        longest_chapter_title: longest.title.clone(),
    })
}
