//! BDD-style scenarios for snapshot and verification contracts.

use musestat_types::*;

fn sample_stats() -> ManuscriptStats {
    ManuscriptStats {
        source: Some("draft.md".into()),
        language: "en".into(),
        total_words: 1200,
        total_characters: 6400,
        total_characters_no_spaces: 5200,
        total_sentences: 80,
        total_paragraphs: 20,
        avg_words_per_sentence: 15.0,
        chapters: vec![Chapter {
            title: "Opening".into(),
            content: "Once upon a time".into(),
            word_count: 4,
            scene_break_count: 0,
        }],
        chapter_stats: None,
        common_words: vec![WordFrequency::new("time", 3)],
        reading_time: ReadingTime {
            fast: HoursMinutes { hours: 0, minutes: 4 },
            average: HoursMinutes { hours: 0, minutes: 4 },
            slow: HoursMinutes { hours: 0, minutes: 6 },
            pages_min: 3,
            pages_max: 4,
            pages_avg: 4,
            range_str: "0h 4m - 0h 6m".into(),
            pages_str: "3-4 pages (~4 avg)".into(),
        },
        badge: MilestoneBadge {
            threshold: 1000,
            title: "First Thousand".into(),
            icon: "🌱".into(),
            message: "Every journey begins with a single word.".into(),
            unlocked: true,
            newly_unlocked: false,
        },
        dialogue: None,
        pacing: None,
        readability: None,
    }
}

mod snapshot {
    use super::*;

    #[test]
    fn scenario_missing_dialogue_captures_zero_dialogue_words() {
        // Given stats computed without dialogue analysis
        let stats = sample_stats();
        // When a snapshot is captured
        let snap = Snapshot::capture(&stats, "draft.md", "2026-01-01T00:00:00Z");
        // Then dialogue words default to zero and chapters are counted
        assert_eq!(snap.dialogue_words, 0);
        assert_eq!(snap.chapters, 1);
        assert_eq!(snap.total_words, 1200);
        assert_eq!(snap.file, "draft.md");
    }

    #[test]
    fn scenario_dialogue_present_is_carried_into_snapshot() {
        // Given stats with dialogue analysis
        let mut stats = sample_stats();
        stats.dialogue = Some(DialogueStats {
            dialogue_line_count: 3,
            dialogue_word_count: 42,
            dialogue_ratio_percent: 30.0,
        });
        // When a snapshot is captured
        let snap = Snapshot::capture(&stats, "draft.md", "t");
        // Then the dialogue word count is recorded
        assert_eq!(snap.dialogue_words, 42);
    }

    #[test]
    fn scenario_shrinking_manuscript_yields_negative_delta() {
        // Given a previous snapshot larger than the current one
        let stats = sample_stats();
        let previous = Snapshot::capture(&stats, "draft.md", "t0");
        let mut smaller = stats.clone();
        smaller.total_words = 1000;
        smaller.chapters.clear();
        let current = Snapshot::capture(&smaller, "draft.md", "t1");
        // When the delta is computed
        let delta = SnapshotDelta::between(&previous, &current);
        // Then removed words and chapters show as negative
        assert_eq!(delta.words, -200);
        assert_eq!(delta.chapters, -1);
        assert_eq!(delta.sentences, 0);
    }

    #[test]
    fn scenario_snapshot_round_trips_through_json() {
        let snap = Snapshot::capture(&sample_stats(), "draft.md", "t");
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
        assert!(json.contains("\"dialogue_words\":0"));
    }
}

mod issues {
    use super::*;

    #[test]
    fn scenario_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn scenario_document_level_issue_omits_line_fields() {
        // Given an issue with no line number
        let issue = Issue::new(Severity::Warning, "Smart Quotes", "Mixed quotes");
        // When serialized
        let json = serde_json::to_value(&issue).unwrap();
        // Then optional fields are absent
        assert!(json.get("line_number").is_none());
        assert!(json.get("line_preview").is_none());
    }

    #[test]
    fn scenario_only_info_and_warning_pass() {
        let issues = vec![
            Issue::new(Severity::Info, "Spacing", "3 consecutive blank lines"),
            Issue::new(Severity::Warning, "Punctuation", "Multiple ! or ?"),
        ];
        let summary = IssueSummary::from_issues(&issues);
        assert_eq!(summary.infos, 1);
        assert_eq!(summary.warnings, 1);
        assert!(summary.passed);
    }
}
