//! BDD-style scenarios for pacing signals.

use musestat_pacing::analyze_pacing;

#[test]
fn given_rapid_fire_paragraphs_when_analyzed_then_all_are_short() {
    let text = "Bang.\n\nHe ran.\n\nThe door slammed shut.";
    let stats = analyze_pacing(text);
    let indexes: Vec<usize> = stats.short_paragraphs.iter().map(|p| p.index).collect();
    assert_eq!(indexes, [1, 2, 3]);
    assert!(stats.long_paragraphs.is_empty());
}

#[test]
fn given_markup_in_sentences_when_analyzed_then_it_is_not_counted() {
    // Code blocks vanish from the sentence view.
    let text = "Short one.\n\n```\nnot prose at all here\n```";
    let stats = analyze_pacing(text);
    assert_eq!(stats.avg_sentence_length, 2.0);
}

#[test]
fn given_a_rambling_sentence_when_analyzed_then_it_is_flagged_once() {
    let sentence = vec!["and"; 45].join(" ");
    let text = format!("Fine. {sentence}. Fine again.");
    let stats = analyze_pacing(&text);
    assert_eq!(stats.long_sentences.len(), 1);
    assert_eq!(stats.long_sentences[0].index, 2);
    assert_eq!(stats.long_sentences[0].word_count, 45);
}
