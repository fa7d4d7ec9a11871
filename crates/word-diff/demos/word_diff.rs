use anyhow::Result;
use word_diff::{FragmentKind, WordDiff};

fn main() -> Result<()> {
    // A prompt before and after an AI refinement pass
    let original = "Write a story about a dog.";
    let refined =
        "Write a short, heartwarming story about a loyal dog who finds its way home.";

    let diff = WordDiff::new(original, refined)?;
    let snapshot = diff.snapshot();

    // Print the diff inline with color-coded fragments
    println!("Inline diff:");
    for fragment in snapshot.fragments() {
        match fragment.kind {
            FragmentKind::Removed => print!("\x1b[31m{}\x1b[0m", fragment.value),
            FragmentKind::Added => print!("\x1b[32m{}\x1b[0m", fragment.value),
            FragmentKind::Unchanged => print!("{}", fragment.value),
        }
    }
    println!();

    // Print diff statistics
    println!("\nDiff statistics:");
    println!("  Total fragments: {}", snapshot.fragment_count());
    println!("  Added tokens: {}", snapshot.added_tokens());
    println!("  Removed tokens: {}", snapshot.removed_tokens());
    println!("  Kept tokens: {}", snapshot.kept_tokens());

    // Print each fragment with its kind
    println!("\nFragments:");
    for (i, fragment) in snapshot.fragments().iter().enumerate() {
        println!("  {}: {} {:?}", i, fragment.kind, fragment.value);
    }

    Ok(())
}
