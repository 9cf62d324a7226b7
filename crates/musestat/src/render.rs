//! Plain-text rendering of analysis and verification results.

use std::fmt::Write;

use musestat_milestones::group_thousands;
use musestat_types::{ManuscriptStats, Severity, SnapshotDelta};
use musestat_verify::VerificationReport;

fn n(value: usize) -> String {
    group_thousands(value as u64)
}

fn signed(value: i64) -> String {
    let magnitude = group_thousands(value.unsigned_abs());
    if value < 0 {
        format!("-{magnitude}")
    } else {
        format!("+{magnitude}")
    }
}

pub(crate) fn analysis_text(stats: &ManuscriptStats, delta: Option<&SnapshotDelta>) -> String {
    let mut out = String::new();
    if let Some(source) = &stats.source {
        let _ = writeln!(out, "Manuscript:    {source}");
    }
    let _ = writeln!(out, "Language:      {}", stats.language);
    let _ = writeln!(out, "Words:         {}", n(stats.total_words));
    let _ = writeln!(
        out,
        "Characters:    {} ({} without spaces)",
        n(stats.total_characters),
        n(stats.total_characters_no_spaces)
    );
    let _ = writeln!(out, "Sentences:     {}", n(stats.total_sentences));
    let _ = writeln!(out, "Paragraphs:    {}", n(stats.total_paragraphs));
    let _ = writeln!(out, "Words/sentence: {:.1}", stats.avg_words_per_sentence);
    let _ = writeln!(out, "Reading time:  {}", stats.reading_time.range_str);
    let _ = writeln!(out, "Pages:         {}", stats.reading_time.pages_str);

    let badge = &stats.badge;
    let marker = if badge.newly_unlocked { " (new!)" } else { "" };
    if badge.unlocked {
        let _ = writeln!(out, "Badge:         {} {}{marker} - {}", badge.icon, badge.title, badge.message);
    } else {
        let _ = writeln!(out, "Badge:         {}", badge.message);
    }

    if !stats.chapters.is_empty() {
        let _ = writeln!(out, "\nChapters ({}):", stats.chapters.len());
        for (i, chapter) in stats.chapters.iter().enumerate() {
            let _ = write!(out, "  {:>2}. {} ({} words", i + 1, chapter.title, n(chapter.word_count));
            if chapter.scene_break_count > 0 {
                let _ = write!(out, ", {} scene breaks", chapter.scene_break_count);
            }
            out.push_str(")\n");
        }
        if let Some(cs) = &stats.chapter_stats {
            let _ = writeln!(
                out,
                "  mean {:.0}, std dev {:.0}, range {} ({} to {}), variation {:.1}%",
                cs.mean,
                cs.std_dev,
                n(cs.range),
                n(cs.min),
                n(cs.max),
                cs.coefficient_of_variation
            );
            let _ = writeln!(
                out,
                "  shortest: {}; longest: {}",
                cs.shortest_chapter_title, cs.longest_chapter_title
            );
        }
    }

    if !stats.common_words.is_empty() {
        let words: Vec<String> = stats
            .common_words
            .iter()
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect();
        let _ = writeln!(out, "\nFrequent words: {}", words.join(", "));
    }

    if let Some(dialogue) = &stats.dialogue {
        let _ = writeln!(
            out,
            "\nDialogue:      {} lines, {} words ({:.1}% of lines)",
            n(dialogue.dialogue_line_count),
            n(dialogue.dialogue_word_count),
            dialogue.dialogue_ratio_percent
        );
    }
    if let Some(pacing) = &stats.pacing {
        let _ = writeln!(
            out,
            "Pacing:        avg sentence {:.1} words, avg paragraph {:.1} words",
            pacing.avg_sentence_length, pacing.avg_paragraph_length
        );
        let _ = writeln!(
            out,
            "               {} long sentences, {} long paragraphs, {} short paragraphs",
            pacing.long_sentences.len(),
            pacing.long_paragraphs.len(),
            pacing.short_paragraphs.len()
        );
    }
    if stats.dialogue.is_some() {
        match &stats.readability {
            Some(r) => {
                let _ = writeln!(
                    out,
                    "Readability:   Flesch {:.1}, grade {:.1}, fog {:.1}, Coleman-Liau {:.1}, ARI {:.1}",
                    r.flesch_reading_ease,
                    r.flesch_kincaid_grade,
                    r.gunning_fog,
                    r.coleman_liau_index,
                    r.automated_readability_index
                );
            }
            None => {
                let _ = writeln!(out, "Readability:   unavailable");
            }
        }
    }

    if let Some(d) = delta {
        let _ = writeln!(
            out,
            "\nSince snapshot: {} words, {} characters, {} sentences, {} paragraphs, {} chapters, {} dialogue words",
            signed(d.words),
            signed(d.characters),
            signed(d.sentences),
            signed(d.paragraphs),
            signed(d.chapters),
            signed(d.dialogue_words)
        );
    }
    out
}

pub(crate) fn verification_text(report: &VerificationReport) -> String {
    let mut out = String::new();
    for severity in [Severity::Error, Severity::Warning, Severity::Info] {
        for issue in report.with_severity(severity) {
            let _ = write!(out, "{:<7} [{}]", issue.severity, issue.category);
            if let Some(line) = issue.line_number {
                let _ = write!(out, " line {line}");
            }
            let _ = writeln!(out, ": {}", issue.message);
            if let Some(preview) = &issue.line_preview {
                let _ = writeln!(out, "        > {preview}");
            }
            if let Some(suggestion) = &issue.suggestion {
                let _ = writeln!(out, "        fix: {suggestion}");
            }
        }
    }

    let s = &report.summary;
    let verdict = if s.passed { "PASSED" } else { "FAILED" };
    let _ = writeln!(
        out,
        "{} errors, {} warnings, {} infos: {verdict}",
        s.errors, s.warnings, s.infos
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use musestat_types::Issue;

    #[test]
    fn signed_keeps_sign_and_grouping() {
        assert_eq!(signed(1234), "+1,234");
        assert_eq!(signed(-56), "-56");
        assert_eq!(signed(0), "+0");
    }

    #[test]
    fn verification_lists_errors_first() {
        let report = VerificationReport::new(vec![
            Issue::new(Severity::Info, "Whitespace", "Trailing whitespace").on_line(3),
            Issue::new(Severity::Error, "Pre-publish", "TODO marker found")
                .on_line(1)
                .with_preview("TODO: rewrite")
                .with_suggestion("Resolve before publishing"),
        ]);
        let text = verification_text(&report);
        let error_at = text.find("ERROR").unwrap();
        let info_at = text.find("INFO").unwrap();
        assert!(error_at < info_at);
        assert!(text.contains("> TODO: rewrite"));
        assert!(text.ends_with("1 errors, 0 warnings, 1 infos: FAILED\n"));
    }
}
