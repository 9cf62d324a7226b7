use musestat_pacing::{MAX_REPORTED, analyze_pacing};
use musestat_text::count_paragraphs;
use proptest::prelude::*;

proptest! {
    #[test]
    fn lists_are_capped_and_ordered(text in "[a-z .\n]{0,600}") {
        let stats = analyze_pacing(&text);
        for list in [&stats.long_sentences, &stats.long_paragraphs, &stats.short_paragraphs] {
            prop_assert!(list.len() <= MAX_REPORTED);
            prop_assert!(list.windows(2).all(|w| w[0].index < w[1].index));
        }
    }

    #[test]
    fn paragraph_indexes_stay_within_paragraph_count(text in "[a-z .\n]{0,600}") {
        let stats = analyze_pacing(&text);
        let paragraphs = count_paragraphs(&text);
        prop_assert!(stats.short_paragraphs.iter().all(|p| p.index >= 1 && p.index <= paragraphs));
    }

    #[test]
    fn averages_are_non_negative(text in "\\PC{0,300}") {
        let stats = analyze_pacing(&text);
        prop_assert!(stats.avg_sentence_length >= 0.0);
        prop_assert!(stats.avg_paragraph_length >= 0.0);
    }
}
