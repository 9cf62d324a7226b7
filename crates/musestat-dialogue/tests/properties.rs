use musestat_dialogue::analyze_dialogue;
use proptest::prelude::*;

proptest! {
    #[test]
    fn ratio_is_a_percentage(text in "[a-z \"'\n]{0,300}") {
        let stats = analyze_dialogue(&text);
        prop_assert!((0.0..=100.0).contains(&stats.dialogue_ratio_percent));
    }

    #[test]
    fn text_without_quote_marks_has_no_dialogue(text in "[a-z .,\n]{0,300}") {
        let stats = analyze_dialogue(&text);
        prop_assert_eq!(stats.dialogue_line_count, 0);
        prop_assert_eq!(stats.dialogue_word_count, 0);
    }

    #[test]
    fn dialogue_lines_never_exceed_non_blank_lines(text in "[a-z \"\n]{0,300}") {
        let non_blank = text.split('\n').filter(|l| !l.trim().is_empty()).count();
        prop_assert!(analyze_dialogue(&text).dialogue_line_count <= non_blank);
    }
}
