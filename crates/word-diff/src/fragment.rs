use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::alignment::{EditKind, EditOp};

/// Represents how a fragment relates to the two input texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FragmentKind {
    /// The fragment only exists in the new text
    #[display(fmt = "Added")]
    Added,

    /// The fragment only exists in the old text
    #[display(fmt = "Removed")]
    Removed,

    /// The fragment exists unchanged in both texts
    #[display(fmt = "Unchanged")]
    Unchanged,
}

impl From<EditKind> for FragmentKind {
    fn from(kind: EditKind) -> Self {
        match kind {
            EditKind::Keep => FragmentKind::Unchanged,
            EditKind::Insert => FragmentKind::Added,
            EditKind::Delete => FragmentKind::Removed,
        }
    }
}

/// A contiguous run of same-kind tokens in a word diff
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffFragment {
    /// The text of this fragment (tokens concatenated in order)
    pub value: String,

    /// Whether the fragment was added, removed, or left unchanged
    pub kind: FragmentKind,
}

impl DiffFragment {
    /// Create a new fragment
    pub fn new(value: impl Into<String>, kind: FragmentKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    /// Check if this fragment only exists in the new text
    pub fn is_added(&self) -> bool {
        self.kind == FragmentKind::Added
    }

    /// Check if this fragment only exists in the old text
    pub fn is_removed(&self) -> bool {
        self.kind == FragmentKind::Removed
    }

    /// Check if this fragment is common to both texts
    pub fn is_unchanged(&self) -> bool {
        self.kind == FragmentKind::Unchanged
    }
}

/// Coalesce consecutive same-kind edit operations into fragments.
///
/// Token order is preserved and merging is maximal: the output never contains
/// two adjacent fragments of the same kind. An empty edit script produces an
/// empty fragment sequence.
pub(crate) fn merge_edits(ops: &[EditOp<'_>]) -> Vec<DiffFragment> {
    let mut fragments: Vec<DiffFragment> = Vec::new();

    for op in ops {
        let kind = FragmentKind::from(op.kind);
        match fragments.last_mut() {
            Some(last) if last.kind == kind => last.value.push_str(op.token),
            _ => fragments.push(DiffFragment::new(op.token, kind)),
        }
    }

    fragments
}
