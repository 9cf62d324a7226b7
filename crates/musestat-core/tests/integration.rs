use std::fs;

use musestat_core::settings::AnalyzeSettings;
use musestat_core::types::SnapshotDelta;
use musestat_core::{Analyzer, snapshot};

const MANUSCRIPT: &str = "\
# Chapter One

The rain fell on the harbor. \"Come inside,\" Mara said.

***

The lamps burned low. The harbor was quiet.

# Chapter Two

Morning came. The harbor woke, and the gulls returned to the harbor wall.
";

#[test]
fn analyze_path_reads_and_summarizes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("novel.md");
    fs::write(&path, MANUSCRIPT).unwrap();

    let stats = Analyzer::default().analyze_path(&path, None).unwrap();

    assert_eq!(stats.source.as_deref(), Some(path.display().to_string().as_str()));
    assert_eq!(stats.chapters.len(), 2);
    assert_eq!(stats.chapters[0].title, "Chapter One");
    assert_eq!(stats.chapters[0].scene_break_count, 1);
    assert_eq!(stats.common_words[0].word, "harbor");
    assert_eq!(stats.common_words[0].count, 4);
    let chapter_stats = stats.chapter_stats.unwrap();
    assert_eq!(chapter_stats.shortest_chapter_title, "Chapter Two");
}

#[test]
fn missing_file_yields_no_stats() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Analyzer::default().analyze_path(&dir.path().join("gone.md"), None).is_none());
}

#[test]
fn snapshot_round_trip_and_delta() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("novel.md");
    fs::write(&path, MANUSCRIPT).unwrap();

    let settings = AnalyzeSettings {
        advanced: true,
        ..AnalyzeSettings::default()
    };
    let analyzer = Analyzer::new(settings);
    let before = analyzer.analyze_path(&path, None).unwrap();
    let snap_path = snapshot::snapshot_path(&path);
    let saved = snapshot::capture(&before, &path);
    snapshot::save(&saved, &snap_path).unwrap();
    assert!(snap_path.ends_with("novel.stats.json"));

    fs::write(&path, format!("{MANUSCRIPT}\n# Chapter Three\n\nOne more line here.\n")).unwrap();
    let previous = snapshot::load(&snap_path).unwrap();
    assert_eq!(previous, saved);
    assert_eq!(previous.dialogue_words, 2);

    let after = analyzer.analyze_path(&path, Some(&previous)).unwrap();
    let delta = SnapshotDelta::between(&previous, &snapshot::capture(&after, &path));
    assert_eq!(delta.chapters, 1);
    assert_eq!(delta.words, 6);
    assert_eq!(delta.paragraphs, 2);
    assert_eq!(delta.dialogue_words, 0);
}
