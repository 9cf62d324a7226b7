//! BDD-style scenarios for manuscript verification.

use musestat_ignore::IgnoreList;
use musestat_types::Severity;
use musestat_verify::verify_manuscript;

fn no_ignores() -> IgnoreList {
    IgnoreList::default()
}

mod formatting {
    use super::*;

    #[test]
    fn scenario_unmatched_italic_marker() {
        // Given a line with a single unmatched asterisk
        let text = "She said *hello";
        // When the manuscript is verified
        let report = verify_manuscript(text, &no_ignores());
        // Then exactly one formatting error is reported
        let errors: Vec<_> = report
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Error && i.category == "Markdown Formatting")
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line_preview.as_deref(), Some("She said *hello"));
        assert_eq!(errors[0].suggestion.as_deref(), Some("Ensure all * have matching pairs"));
    }

    #[test]
    fn scenario_bullet_list_item() {
        // Given a markdown bullet
        let text = "* bullet point";
        // When verified
        let report = verify_manuscript(text, &no_ignores());
        // Then no formatting error is reported
        assert_eq!(report.in_category("Markdown Formatting").count(), 0);
    }

    #[test]
    fn scenario_scene_break_is_not_a_formatting_error() {
        let report = verify_manuscript("Before.\n\n***\n\nAfter.", &no_ignores());
        assert!(report.issues.is_empty());
    }
}

mod ignoring {
    use super::*;

    #[test]
    fn scenario_chapter_headings_are_suppressed() {
        // Given a chapter heading with a marker and a body line with the same marker
        let text = "## Chapter 1: TODO title\nBody text TODO";
        let ignore = IgnoreList::new(["^## Chapter"]);
        // When verified with the prefix pattern
        let report = verify_manuscript(text, &ignore);
        // Then only the body line is reported
        let lines: Vec<Option<usize>> = report.issues.iter().map(|i| i.line_number).collect();
        assert_eq!(lines, [Some(2)]);
    }

    #[test]
    fn scenario_prefix_match_is_case_insensitive() {
        let text = "## CHAPTER 2 ... TODO";
        let ignore = IgnoreList::new(["^## Chapter"]);
        assert!(verify_manuscript(text, &ignore).issues.is_empty());
    }

    #[test]
    fn scenario_non_matching_lines_are_still_checked() {
        let text = "# Chapter 3 TODO";
        let ignore = IgnoreList::new(["^## Chapter"]);
        assert_eq!(verify_manuscript(text, &ignore).summary.errors, 1);
    }

    #[test]
    fn scenario_ignored_fence_still_opens_code_block() {
        // Given an ignored fence line
        let text = "``` ignored\n*not prose\n```";
        let ignore = IgnoreList::new(["ignored"]);
        // When verified
        let report = verify_manuscript(text, &ignore);
        // Then the block contents are still treated as code
        assert_eq!(report.in_category("Markdown Formatting").count(), 0);
    }
}

mod prepublish {
    use super::*;

    #[test]
    fn scenario_editorial_leftovers_fail_the_manuscript() {
        // Given a draft with a TK marker and a placeholder
        let text = "The city of TK was quiet.\n[INSERT MAP HERE]";
        // When verified
        let report = verify_manuscript(text, &no_ignores());
        // Then the summary fails
        assert!(!report.summary.passed);
        assert_eq!(report.in_category("Pre-publish").count(), 1);
        assert_eq!(report.in_category("Incomplete Content").count(), 1);
    }

    #[test]
    fn scenario_style_warnings_do_not_fail() {
        let text = "Wait!! What happened?";
        let report = verify_manuscript(text, &no_ignores());
        assert_eq!(report.summary.warnings, 1);
        assert!(report.summary.passed);
    }
}
