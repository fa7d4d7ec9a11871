use anyhow::Result;
use word_diff::WordDiff;

fn main() -> Result<()> {
    // The two views a renderer needs: the old text with removals highlighted
    // and the new text with additions highlighted, both filtered from the
    // same fragment sequence.
    let original = "Explain quantum computing to me.";
    let refined = "Explain quantum computing to a curious high school student.";

    let snapshot = WordDiff::new(original, refined)?.snapshot();

    println!("Old-text view (additions filtered out):");
    for fragment in snapshot.fragments().iter().filter(|f| !f.is_added()) {
        if fragment.is_removed() {
            print!("\x1b[31m{}\x1b[0m", fragment.value);
        } else {
            print!("{}", fragment.value);
        }
    }
    println!();

    println!("\nNew-text view (removals filtered out):");
    for fragment in snapshot.fragments().iter().filter(|f| !f.is_removed()) {
        if fragment.is_added() {
            print!("\x1b[32m{}\x1b[0m", fragment.value);
        } else {
            print!("{}", fragment.value);
        }
    }
    println!();

    // The filtered concatenations reproduce the inputs exactly
    assert_eq!(snapshot.old_view(), original);
    assert_eq!(snapshot.new_view(), refined);
    println!("\nBoth views round-trip to their source text.");

    Ok(())
}
