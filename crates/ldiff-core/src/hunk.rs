//! Hunk grouping: split a flat edit script into context-bounded hunks.
//!
//! Each hunk carries at most `context` unchanged lines before and after its
//! changes. Two change regions separated by fewer than `2 * context`
//! unchanged lines end up in the same hunk.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::line::{count_lines, Line, LineKind};

/// A contiguous region of changes with its surrounding context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    /// Line number in the old sequence where this hunk starts (1-based).
    pub old_start: usize,
    /// Number of context and removed lines.
    pub old_count: usize,
    /// Line number in the new sequence where this hunk starts (1-based).
    pub new_start: usize,
    /// Number of context and added lines.
    pub new_count: usize,
    /// The lines of this hunk, in document order.
    pub lines: Vec<Line>,
}

impl Hunk {
    /// Number of added lines.
    pub fn additions(&self) -> usize {
        self.lines.iter().filter(|l| l.kind == LineKind::Added).count()
    }

    /// Number of removed lines.
    pub fn deletions(&self) -> usize {
        self.lines.iter().filter(|l| l.kind == LineKind::Removed).count()
    }

    /// The `@@ -a,b +c,d @@` header line.
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_count, self.new_start, self.new_count
        )
    }

    fn trailing_context(&self) -> usize {
        self.lines.iter().rev().take_while(|l| l.is_context()).count()
    }

    /// Drop trailing context beyond `keep` lines and recompute the counts.
    fn finish(mut self, keep: usize) -> Self {
        let trailing = self.trailing_context();
        if trailing > keep {
            self.lines.truncate(self.lines.len() - (trailing - keep));
        }
        (self.old_count, self.new_count) = count_lines(&self.lines);
        self
    }
}

/// Streaming state for grouping an edit script into hunks.
///
/// Lines are fed in document order through [`push`](Self::push); the
/// grouped result is taken with [`finish`](Self::finish).
#[derive(Debug)]
pub struct HunkGrouper {
    context: usize,
    /// Old-sequence lines consumed so far.
    pos1: usize,
    /// New-sequence lines consumed so far.
    pos2: usize,
    /// Most recent context lines seen while no hunk is open.
    buffer: VecDeque<Line>,
    open: Option<Hunk>,
    hunks: Vec<Hunk>,
}

impl HunkGrouper {
    pub fn new(context: usize) -> Self {
        Self {
            context,
            pos1: 0,
            pos2: 0,
            buffer: VecDeque::with_capacity(context),
            open: None,
            hunks: Vec::new(),
        }
    }

    /// Feed the next line of the edit script.
    pub fn push(&mut self, line: Line) {
        let kind = line.kind;

        if kind.is_change() {
            let mut hunk = match self.open.take() {
                Some(hunk) => hunk,
                None => {
                    let buffered = self.buffer.len();
                    Hunk {
                        old_start: self.pos1.saturating_sub(buffered) + 1,
                        old_count: 0,
                        new_start: self.pos2.saturating_sub(buffered) + 1,
                        new_count: 0,
                        lines: self.buffer.drain(..).collect(),
                    }
                }
            };
            hunk.lines.push(line);
            self.open = Some(hunk);
        } else if let Some(mut hunk) = self.open.take() {
            hunk.lines.push(line);
            if hunk.trailing_context() >= self.context * 2 {
                self.emit(hunk);
                self.buffer.clear();
            } else {
                self.open = Some(hunk);
            }
        } else if self.context > 0 {
            if self.buffer.len() == self.context {
                self.buffer.pop_front();
            }
            self.buffer.push_back(line);
        }

        self.pos1 += usize::from(kind.in_old());
        self.pos2 += usize::from(kind.in_new());
    }

    /// Close any open hunk and return every hunk in document order.
    pub fn finish(mut self) -> Vec<Hunk> {
        if let Some(hunk) = self.open.take() {
            self.emit(hunk);
        }
        self.hunks
    }

    fn emit(&mut self, hunk: Hunk) {
        let hunk = hunk.finish(self.context);
        trace!(
            old_start = hunk.old_start,
            old_count = hunk.old_count,
            new_start = hunk.new_start,
            new_count = hunk.new_count,
            "hunk closed"
        );
        self.hunks.push(hunk);
    }
}

/// Group a complete edit script into hunks with `context` lines of context.
pub fn group_hunks(lines: impl IntoIterator<Item = Line>, context: usize) -> Vec<Hunk> {
    let mut grouper = HunkGrouper::new(context);
    for line in lines {
        grouper.push(line);
    }
    grouper.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(tokens: &str) -> Vec<Line> {
        tokens
            .split_whitespace()
            .map(|token| {
                let (marker, content) = token.split_at(1);
                match marker {
                    "-" => Line::removed(content),
                    "+" => Line::added(content),
                    _ => Line::context(token),
                }
            })
            .collect()
    }

    #[test]
    fn all_context_yields_no_hunks() {
        assert!(group_hunks(script("a b c d"), 3).is_empty());
        assert!(group_hunks(Vec::new(), 3).is_empty());
    }

    #[test]
    fn single_replacement_with_full_context() {
        let hunks = group_hunks(script("a -b +x c"), 3);
        assert_eq!(hunks.len(), 1);
        let h = &hunks[0];
        assert_eq!((h.old_start, h.old_count, h.new_start, h.new_count), (1, 3, 1, 3));
        assert_eq!(h.lines, script("a -b +x c"));
    }

    #[test]
    fn leading_context_is_bounded() {
        let hunks = group_hunks(script("a b c d e -f"), 2);
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].lines, script("d e -f"));
        assert_eq!(hunks[0].old_start, 4);
        assert_eq!(hunks[0].new_start, 4);
        assert_eq!((hunks[0].old_count, hunks[0].new_count), (3, 2));
    }

    #[test]
    fn trailing_context_is_trimmed_at_end_of_input() {
        let hunks = group_hunks(script("+x a b c d"), 2);
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].lines, script("+x a b"));
        assert_eq!((hunks[0].old_count, hunks[0].new_count), (2, 3));
    }

    #[test]
    fn distant_changes_split_into_two_hunks() {
        let hunks = group_hunks(script("a -b +B c d e f g -h +H i"), 1);
        assert_eq!(hunks.len(), 2);

        assert_eq!(hunks[0].lines, script("a -b +B c"));
        assert_eq!(
            (hunks[0].old_start, hunks[0].old_count, hunks[0].new_start, hunks[0].new_count),
            (1, 3, 1, 3)
        );

        assert_eq!(hunks[1].lines, script("g -h +H i"));
        assert_eq!(
            (hunks[1].old_start, hunks[1].old_count, hunks[1].new_start, hunks[1].new_count),
            (7, 3, 7, 3)
        );
    }

    #[test]
    fn nearby_changes_merge() {
        // One context line between changes stays below the 2 * context threshold.
        let hunks = group_hunks(script("a -b c -d e"), 1);
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].lines, script("a -b c -d e"));
        assert_eq!((hunks[0].old_count, hunks[0].new_count), (5, 3));
    }

    #[test]
    fn buffer_resets_after_a_hunk_closes() {
        let hunks = group_hunks(script("-a +X b c -d +Y e"), 1);
        assert_eq!(hunks.len(), 2);
        assert_eq!(hunks[0].lines, script("-a +X b"));
        assert_eq!(hunks[1].lines, script("-d +Y e"));
        assert_eq!((hunks[1].old_start, hunks[1].new_start), (4, 4));
    }

    #[test]
    fn zero_context_keeps_only_changes() {
        let hunks = group_hunks(script("a -b +B c d -e f"), 0);
        assert_eq!(hunks.len(), 2);
        assert_eq!(hunks[0].lines, script("-b +B"));
        assert_eq!((hunks[0].old_start, hunks[0].new_start), (2, 2));
        assert_eq!(hunks[1].lines, script("-e"));
        assert_eq!(
            (hunks[1].old_start, hunks[1].old_count, hunks[1].new_start, hunks[1].new_count),
            (5, 1, 5, 0)
        );
    }

    #[test]
    fn removal_only_hunk() {
        let hunks = group_hunks(script("-a"), 3);
        assert_eq!(hunks.len(), 1);
        assert_eq!(
            (hunks[0].old_start, hunks[0].old_count, hunks[0].new_start, hunks[0].new_count),
            (1, 1, 1, 0)
        );
    }

    #[test]
    fn header_and_stats() {
        let hunks = group_hunks(script("a -b -c +x d"), 3);
        assert_eq!(hunks[0].header(), "@@ -1,4 +1,3 @@");
        assert_eq!(hunks[0].additions(), 1);
        assert_eq!(hunks[0].deletions(), 2);
    }
}
