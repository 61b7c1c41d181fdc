//! Edit-script reconstruction from an [`LcsTable`].

use crate::lcs::LcsTable;
use crate::line::Line;

/// Compute the full edit script turning `old` into `new`.
///
/// Builds the LCS table and walks it back from the bottom-right corner. The
/// result covers every input line, in document order.
pub fn edit_script<S: AsRef<str>, T: AsRef<str>>(old: &[S], new: &[T]) -> Vec<Line> {
    let table = LcsTable::build(old, new);
    backtrack(old, new, &table)
}

/// Walk `table` from `(m, n)` to `(0, 0)` and emit classified lines.
///
/// When the two candidate moves have equal LCS length the walk emits the
/// added line first. Because lines are collected back to front, a replaced
/// line therefore reads `-old` followed by `+new` in the final script.
pub fn backtrack<S: AsRef<str>, T: AsRef<str>>(
    old: &[S],
    new: &[T],
    table: &LcsTable,
) -> Vec<Line> {
    debug_assert_eq!(table.rows(), old.len() + 1);
    debug_assert_eq!(table.cols(), new.len() + 1);

    let mut reversed = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (old.len(), new.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1].as_ref() == new[j - 1].as_ref() {
            reversed.push(Line::context(old[i - 1].as_ref()));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            reversed.push(Line::added(new[j - 1].as_ref()));
            j -= 1;
        } else {
            reversed.push(Line::removed(old[i - 1].as_ref()));
            i -= 1;
        }
    }

    reversed.reverse();
    reversed
}
