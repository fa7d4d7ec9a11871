use word_diff::{diff_words, FragmentKind, WordDiff, WordDiffSnapshot};

#[test]
fn test_whitespace_only_change() {
    // Texts differing only in whitespace width
    let fragments = diff_words("a b", "a  b").unwrap();

    let kinds: Vec<FragmentKind> = fragments.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FragmentKind::Unchanged,
            FragmentKind::Removed,
            FragmentKind::Added,
            FragmentKind::Unchanged,
        ]
    );
    assert_eq!(fragments[1].value, " ");
    assert_eq!(fragments[2].value, "  ");
}

#[test]
fn test_whitespace_only_inputs() {
    // Whitespace-only strings are compared like any other token
    let diff = WordDiff::new("   ", "\t").unwrap();
    let snapshot = diff.snapshot();

    assert!(snapshot.has_changes());
    assert_eq!(snapshot.old_view(), "   ");
    assert_eq!(snapshot.new_view(), "\t");
}

#[test]
fn test_mixed_whitespace_runs() {
    // Tabs and newlines inside a run stay part of one token
    let old = "first\n\tsecond";
    let new = "first\n\tthird";

    let fragments = diff_words(old, new).unwrap();

    assert_eq!(fragments.len(), 3);
    assert_eq!(fragments[0].value, "first\n\t");
    assert!(fragments[1].is_removed());
    assert!(fragments[2].is_added());
}

#[test]
fn test_leading_and_trailing_whitespace() {
    let old = "  padded text  ";
    let new = "padded text";

    let snapshot = WordDiff::new(old, new).unwrap().snapshot();

    assert!(snapshot.has_changes());
    assert_eq!(snapshot.old_view(), old);
    assert_eq!(snapshot.new_view(), new);
}

#[test]
fn test_unicode_text() {
    let old = "caf\u{e9} au lait \u{1f680}";
    let new = "caf\u{e9} au lait \u{1f389}";

    let fragments = diff_words(old, new).unwrap();

    assert_eq!(fragments[0].value, "caf\u{e9} au lait ");
    assert!(fragments[0].is_unchanged());
    assert_eq!(fragments[1].value, "\u{1f680}");
    assert!(fragments[1].is_removed());
    assert_eq!(fragments[2].value, "\u{1f389}");
    assert!(fragments[2].is_added());
}

#[test]
fn test_case_sensitivity() {
    // Token equality is exact; case differences count as changes
    let fragments = diff_words("Hello world", "hello world").unwrap();

    assert!(fragments.iter().any(|f| f.is_removed()));
    assert!(fragments.iter().any(|f| f.is_added()));
}

#[test]
fn test_large_inputs() {
    let mut old = String::new();
    let mut new = String::new();

    // 500 words, every tenth one different
    for i in 0..500 {
        old.push_str(&format!("word{} ", i));
        if i % 10 == 0 {
            new.push_str(&format!("changed{} ", i));
        } else {
            new.push_str(&format!("word{} ", i));
        }
    }

    let snapshot = WordDiff::new(&old, &new).unwrap().snapshot();

    assert!(snapshot.has_changes());
    assert_eq!(snapshot.added_tokens(), 50);
    assert_eq!(snapshot.removed_tokens(), 50);
    assert_eq!(snapshot.old_view(), old);
    assert_eq!(snapshot.new_view(), new);
}

#[test]
fn test_empty_snapshot() {
    let snapshot = WordDiffSnapshot::empty();

    assert_eq!(snapshot.fragment_count(), 0);
    assert_eq!(snapshot.added_tokens(), 0);
    assert_eq!(snapshot.removed_tokens(), 0);
    assert_eq!(snapshot.kept_tokens(), 0);
    assert!(!snapshot.has_changes());
}

#[test]
fn test_snapshot_clone() {
    let diff = WordDiff::new("shared old words", "shared new words").unwrap();
    let snapshot1 = diff.snapshot();
    let snapshot2 = snapshot1.clone();

    assert_eq!(snapshot1.fragments(), snapshot2.fragments());
    assert_eq!(snapshot1.added_tokens(), snapshot2.added_tokens());
    assert_eq!(snapshot1.removed_tokens(), snapshot2.removed_tokens());
    assert_eq!(snapshot1.kept_tokens(), snapshot2.kept_tokens());
}
