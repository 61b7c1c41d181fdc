//! Longest-common-subsequence length table.
//!
//! [`LcsTable`] holds the classic `(m+1) x (n+1)` dynamic-programming matrix
//! for two line sequences. Cell `(i, j)` is the LCS length of the first `i`
//! lines of the old sequence and the first `j` lines of the new one. Row 0 and
//! column 0 are always zero.
//!
//! Building the table is `O(m * n)` in both time and memory. Callers that need
//! a bound on resource use must cap input sizes before calling in.

/// Dynamic-programming table of LCS lengths between two line sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcsTable {
    /// Number of columns (`n + 1`).
    width: usize,
    /// Row-major cells, `(m + 1) * (n + 1)` entries.
    cells: Vec<usize>,
}

impl LcsTable {
    /// Build the table for `old` (length m) against `new` (length n).
    ///
    /// Lines are compared with exact string equality; no normalization is
    /// applied here.
    pub fn build<S: AsRef<str>, T: AsRef<str>>(old: &[S], new: &[T]) -> Self {
        let width = new.len() + 1;
        let mut cells = vec![0usize; (old.len() + 1) * width];

        for i in 1..=old.len() {
            let a = old[i - 1].as_ref();
            for j in 1..=new.len() {
                cells[i * width + j] = if a == new[j - 1].as_ref() {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
            }
        }

        Self { width, cells }
    }

    /// Number of rows (`m + 1`).
    pub fn rows(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Number of columns (`n + 1`).
    pub fn cols(&self) -> usize {
        self.width
    }

    /// LCS length of `old[..i]` and `new[..j]`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(j < self.width, "column {j} out of range");
        self.cells[i * self.width + j]
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.cells.last().copied().unwrap_or(0)
    }
}
