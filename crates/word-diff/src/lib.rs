// Word-level diff engine for comparing a prompt against its refined version
// This crate provides diff calculation and fragment representation

mod alignment;
mod fragment;
mod tokenize;
mod word_diff;

pub use fragment::{DiffFragment, FragmentKind};
pub use tokenize::tokenize;
pub use word_diff::{diff_words, WordDiff, WordDiffSnapshot};
