/// The kind of a single edit step in the alignment between two token
/// sequences. Substitution is not a primitive; it appears in the edit script
/// as a `Delete` followed by an `Insert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditKind {
    /// Token present in both sequences
    Keep,

    /// Token present only in the new sequence
    Insert,

    /// Token present only in the old sequence
    Delete,
}

/// One step of the edit script, carrying the token it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EditOp<'a> {
    pub kind: EditKind,
    pub token: &'a str,
}

/// Dense (m+1) x (n+1) edit-distance table over two token sequences.
///
/// `cell(i, j)` is the minimum number of single-token insertions, deletions,
/// and substitutions (all unit cost) needed to turn the first `i` old tokens
/// into the first `j` new tokens. The table is fully materialized because the
/// backtracker needs every cell, stored as a flat vector with computed
/// indexing.
pub(crate) struct AlignmentTable {
    cells: Vec<usize>,
    width: usize,
}

impl AlignmentTable {
    /// Build the table with the standard Levenshtein recurrence over tokens.
    pub fn build(old_tokens: &[&str], new_tokens: &[&str]) -> Self {
        let m = old_tokens.len();
        let n = new_tokens.len();
        let width = n + 1;

        let mut table = Self {
            cells: vec![0; (m + 1) * width],
            width,
        };

        for i in 0..=m {
            table.set(i, 0, i);
        }
        for j in 0..=n {
            table.set(0, j, j);
        }

        for i in 1..=m {
            for j in 1..=n {
                let value = if old_tokens[i - 1] == new_tokens[j - 1] {
                    table.cell(i - 1, j - 1)
                } else {
                    let deletion = table.cell(i - 1, j);
                    let insertion = table.cell(i, j - 1);
                    let substitution = table.cell(i - 1, j - 1);
                    1 + deletion.min(insertion).min(substitution)
                };
                table.set(i, j, value);
            }
        }

        table
    }

    pub fn cell(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.width + j] = value;
    }
}

/// Recover a left-to-right edit script from the alignment table.
///
/// Walks from `(m, n)` back to `(0, 0)`, emitting one op per step, then
/// reverses the emission order. Several minimum-cost paths can exist through
/// the table; the branch order below decides which one is surfaced and is
/// deliberately fixed: substitution framing wins over an independent
/// insert/delete pair when costs tie, and insertion is checked before
/// deletion. Changing this order would still yield a minimum-cost script but
/// a different-looking diff.
pub(crate) fn backtrack<'a>(
    table: &AlignmentTable,
    old_tokens: &[&'a str],
    new_tokens: &[&'a str],
) -> Vec<EditOp<'a>> {
    let mut ops = Vec::new();
    let mut i = old_tokens.len();
    let mut j = new_tokens.len();

    while i > 0 || j > 0 {
        let substitution = i > 0
            && j > 0
            && old_tokens[i - 1] != new_tokens[j - 1]
            && table.cell(i, j) == table.cell(i - 1, j - 1) + 1;

        if substitution {
            // Pushed insert-first so that after the reversal the delete
            // precedes the insert in reading order.
            ops.push(EditOp {
                kind: EditKind::Insert,
                token: new_tokens[j - 1],
            });
            ops.push(EditOp {
                kind: EditKind::Delete,
                token: old_tokens[i - 1],
            });
            i -= 1;
            j -= 1;
        } else if i > 0 && j > 0 && old_tokens[i - 1] == new_tokens[j - 1] {
            ops.push(EditOp {
                kind: EditKind::Keep,
                token: old_tokens[i - 1],
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.cell(i, j) == table.cell(i, j - 1) + 1) {
            ops.push(EditOp {
                kind: EditKind::Insert,
                token: new_tokens[j - 1],
            });
            j -= 1;
        } else if i > 0 && (j == 0 || table.cell(i, j) == table.cell(i - 1, j) + 1) {
            ops.push(EditOp {
                kind: EditKind::Delete,
                token: old_tokens[i - 1],
            });
            i -= 1;
        } else {
            // Unreachable on a well-formed table; drain whatever is left so
            // the walk always terminates.
            if j > 0 {
                ops.push(EditOp {
                    kind: EditKind::Insert,
                    token: new_tokens[j - 1],
                });
                j -= 1;
            }
            if i > 0 {
                ops.push(EditOp {
                    kind: EditKind::Delete,
                    token: old_tokens[i - 1],
                });
                i -= 1;
            }
        }
    }

    ops.reverse();
    ops
}
