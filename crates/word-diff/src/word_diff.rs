use anyhow::Result;

use crate::alignment::{backtrack, AlignmentTable, EditKind};
use crate::fragment::{merge_edits, DiffFragment};
use crate::tokenize::tokenize;

/// Represents a word-level diff between two texts
#[derive(Debug, Clone)]
pub struct WordDiff {
    /// The old version of the text
    old_text: String,

    /// The new version of the text
    new_text: String,

    /// The fragments in this diff
    fragments: Vec<DiffFragment>,

    /// Number of tokens common to both texts
    kept_tokens: usize,

    /// Number of tokens only present in the new text
    added_tokens: usize,

    /// Number of tokens only present in the old text
    removed_tokens: usize,
}

/// An immutable snapshot of a word diff
#[derive(Debug, Clone)]
pub struct WordDiffSnapshot {
    /// The fragments in this diff
    pub fragments: Vec<DiffFragment>,

    /// Number of tokens common to both texts
    pub kept_tokens: usize,

    /// Number of tokens only present in the new text
    pub added_tokens: usize,

    /// Number of tokens only present in the old text
    pub removed_tokens: usize,
}

impl WordDiff {
    /// Create a new word diff between two texts.
    ///
    /// Runs in O(m * n) time and space where m and n are the token counts of
    /// the two inputs. Pathologically large inputs should be truncated or
    /// chunked by the caller before diffing.
    pub fn new(old_text: &str, new_text: &str) -> Result<Self> {
        let old_tokens = tokenize(old_text);
        let new_tokens = tokenize(new_text);

        let table = AlignmentTable::build(&old_tokens, &new_tokens);
        let ops = backtrack(&table, &old_tokens, &new_tokens);

        let mut kept_tokens = 0;
        let mut added_tokens = 0;
        let mut removed_tokens = 0;
        for op in &ops {
            match op.kind {
                EditKind::Keep => kept_tokens += 1,
                EditKind::Insert => added_tokens += 1,
                EditKind::Delete => removed_tokens += 1,
            }
        }

        let fragments = merge_edits(&ops);

        Ok(Self {
            old_text: old_text.to_string(),
            new_text: new_text.to_string(),
            fragments,
            kept_tokens,
            added_tokens,
            removed_tokens,
        })
    }

    /// Get the old text
    pub fn old_text(&self) -> &str {
        &self.old_text
    }

    /// Get the new text
    pub fn new_text(&self) -> &str {
        &self.new_text
    }

    /// Get the fragments
    pub fn fragments(&self) -> &[DiffFragment] {
        &self.fragments
    }

    /// Get the number of fragments
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Get a fragment by index
    pub fn fragment(&self, index: usize) -> Option<&DiffFragment> {
        self.fragments.get(index)
    }

    /// Get a snapshot of the current diff
    pub fn snapshot(&self) -> WordDiffSnapshot {
        WordDiffSnapshot {
            fragments: self.fragments.clone(),
            kept_tokens: self.kept_tokens,
            added_tokens: self.added_tokens,
            removed_tokens: self.removed_tokens,
        }
    }
}

impl WordDiffSnapshot {
    /// Create a new empty diff snapshot
    pub fn empty() -> Self {
        Self {
            fragments: Vec::new(),
            kept_tokens: 0,
            added_tokens: 0,
            removed_tokens: 0,
        }
    }

    /// Get the fragments
    pub fn fragments(&self) -> &[DiffFragment] {
        &self.fragments
    }

    /// Get the number of fragments
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Get a fragment by index
    pub fn fragment(&self, index: usize) -> Option<&DiffFragment> {
        self.fragments.get(index)
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.fragments.iter().any(|f| !f.is_unchanged())
    }

    /// Get the number of tokens common to both texts
    pub fn kept_tokens(&self) -> usize {
        self.kept_tokens
    }

    /// Get the number of added tokens
    pub fn added_tokens(&self) -> usize {
        self.added_tokens
    }

    /// Get the number of removed tokens
    pub fn removed_tokens(&self) -> usize {
        self.removed_tokens
    }

    /// Reconstruct the old text by skipping added fragments
    pub fn old_view(&self) -> String {
        self.fragments
            .iter()
            .filter(|f| !f.is_added())
            .map(|f| f.value.as_str())
            .collect()
    }

    /// Reconstruct the new text by skipping removed fragments
    pub fn new_view(&self) -> String {
        self.fragments
            .iter()
            .filter(|f| !f.is_removed())
            .map(|f| f.value.as_str())
            .collect()
    }
}

/// Diff two texts at word granularity and return the merged fragments.
///
/// Convenience wrapper for callers that only need the fragment sequence.
pub fn diff_words(old_text: &str, new_text: &str) -> Result<Vec<DiffFragment>> {
    let diff = WordDiff::new(old_text, new_text)?;
    Ok(diff.fragments)
}
