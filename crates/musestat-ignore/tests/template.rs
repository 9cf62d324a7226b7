//! Snapshot of the generated ignore-file template.

use musestat_ignore::{IGNORE_TEMPLATE, IgnoreList};

#[test]
fn template_snapshot() {
    insta::assert_snapshot!(IGNORE_TEMPLATE, @r"
    # .musestatignore
    # Lines matching any pattern below are skipped by `musestat verify`.
    # Blank lines and lines starting with '#' are not patterns.
    # Matching is case-insensitive.
    #
    # Pattern kinds:
    #
    #   Plain text    TODO(editor)    lines containing the text (or matching it as a regex)
    #   Starts with   ^## Chapter     lines beginning with the text after '^'
    #   Wildcards     *Author*        '*' spans any characters, '?' exactly one
    #
    # Examples (remove the leading '# ' to enable):
    #
    # ^## Chapter
    # ^> Epigraph
    # *copyright*
    # Draft v?
    ");
}

#[test]
fn template_examples_work_once_uncommented() {
    let examples: String = IGNORE_TEMPLATE
        .lines()
        .skip_while(|line| !line.starts_with("# Examples"))
        .skip(2)
        .map(|line| line.trim_start_matches("# "))
        .collect::<Vec<_>>()
        .join("\n");
    let list = IgnoreList::parse(&examples);
    assert_eq!(list.len(), 4);
    assert!(list.should_ignore("## Chapter 9"));
    assert!(list.should_ignore("> Epigraph: the sea"));
    assert!(list.should_ignore("All rights reserved. Copyright 2026."));
    assert!(list.should_ignore("Draft v3"));
}
