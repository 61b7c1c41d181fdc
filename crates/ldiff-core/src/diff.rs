//! Diff entry points: line sequences in, hunks out.

use tracing::debug;

use crate::config::DiffConfig;
use crate::hunk::{group_hunks, Hunk};
use crate::options::DiffOptions;
use crate::script::edit_script;
use crate::text::split_lines;

/// Compute the hunks that turn `old` into `new`.
///
/// Returns an empty vector if and only if the two sequences are equal.
pub fn compute_diff<S: AsRef<str>, T: AsRef<str>>(
    old: &[S],
    new: &[T],
    options: &DiffOptions,
) -> Vec<Hunk> {
    if old.len() == new.len() && old.iter().zip(new).all(|(a, b)| a.as_ref() == b.as_ref()) {
        return Vec::new();
    }

    let script = edit_script(old, new);
    let hunks = group_hunks(script, options.context);
    debug!(
        old_lines = old.len(),
        new_lines = new.len(),
        context = options.context,
        hunks = hunks.len(),
        "computed line diff"
    );
    hunks
}

/// Compute a diff after applying the configured line normalization.
pub fn compute_diff_with<S: AsRef<str>, T: AsRef<str>>(
    old: &[S],
    new: &[T],
    config: &DiffConfig,
) -> Vec<Hunk> {
    if config.normalize.is_identity() {
        return compute_diff(old, new, &config.diff);
    }
    let old = config.normalize.apply(old);
    let new = config.normalize.apply(new);
    compute_diff(&old, &new, &config.diff)
}

/// The result of diffing two texts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextDiff {
    /// The diff hunks.
    pub hunks: Vec<Hunk>,
    /// Total number of lines in the old text.
    pub old_lines: usize,
    /// Total number of lines in the new text.
    pub new_lines: usize,
}

impl TextDiff {
    /// Returns `true` if the two texts have identical lines.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Total number of lines added across all hunks.
    pub fn additions(&self) -> usize {
        self.hunks.iter().map(Hunk::additions).sum()
    }

    /// Total number of lines removed across all hunks.
    pub fn deletions(&self) -> usize {
        self.hunks.iter().map(Hunk::deletions).sum()
    }
}

/// Split two texts into lines and diff them.
///
/// Line endings (`\n` or `\r\n`) are stripped, so texts that differ only in
/// their final newline compare equal.
pub fn diff_text(old: &str, new: &str, options: &DiffOptions) -> TextDiff {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);

    TextDiff {
        hunks: compute_diff(&old_lines, &new_lines, options),
        old_lines: old_lines.len(),
        new_lines: new_lines.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::{Line, LineKind};
    use crate::normalize::Normalize;
    use proptest::prelude::*;

    fn opts(context: usize) -> DiffOptions {
        DiffOptions::new().with_context(context)
    }

    /// Rebuild one side by copying untouched lines from `source` between
    /// hunks and taking `keep` lines from inside each hunk.
    fn replay(
        source: &[String],
        hunks: &[Hunk],
        start: impl Fn(&Hunk) -> usize,
        count: impl Fn(&Hunk) -> usize,
        keep: impl Fn(LineKind) -> bool,
    ) -> Vec<String> {
        let mut out = Vec::new();
        let mut pos = 0;
        for hunk in hunks {
            let begin = start(hunk) - 1;
            out.extend_from_slice(&source[pos..begin]);
            out.extend(hunk.lines.iter().filter(|l| keep(l.kind)).map(|l| l.content.clone()));
            pos = begin + count(hunk);
        }
        out.extend_from_slice(&source[pos..]);
        out
    }

    #[test]
    fn identical_inputs_have_no_hunks() {
        let lines = ["a", "b", "c"];
        assert!(compute_diff(&lines, &lines, &DiffOptions::default()).is_empty());
    }

    #[test]
    fn empty_inputs_have_no_hunks() {
        assert!(compute_diff::<&str, &str>(&[], &[], &DiffOptions::default()).is_empty());
    }

    #[test]
    fn single_change() {
        let hunks = compute_diff(&["a", "b", "c"], &["a", "x", "c"], &DiffOptions::default());
        assert_eq!(hunks.len(), 1);
        let h = &hunks[0];
        assert_eq!((h.old_start, h.old_count, h.new_start, h.new_count), (1, 3, 1, 3));
        assert_eq!(
            h.lines,
            vec![
                Line::context("a"),
                Line::removed("b"),
                Line::added("x"),
                Line::context("c"),
            ]
        );
    }

    #[test]
    fn one_side_empty() {
        let hunks = compute_diff(&["a"], &[] as &[&str], &DiffOptions::default());
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].lines, vec![Line::removed("a")]);
        assert_eq!((hunks[0].old_count, hunks[0].new_count), (1, 0));
    }

    #[test]
    fn added_lines_at_end() {
        let hunks = compute_diff(&["a", "b"], &["a", "b", "c", "d"], &DiffOptions::default());
        assert_eq!(hunks.len(), 1);
        let h = &hunks[0];
        assert_eq!((h.old_start, h.old_count, h.new_start, h.new_count), (1, 2, 1, 4));
        assert_eq!(h.additions(), 2);
    }

    #[test]
    fn context_option_narrows_hunk() {
        let hunks = compute_diff(&["a", "b", "c", "d", "e"], &["a", "b", "X", "d", "e"], &opts(1));
        assert_eq!(hunks.len(), 1);
        let h = &hunks[0];
        assert_eq!((h.old_start, h.old_count, h.new_start, h.new_count), (2, 3, 2, 3));
        assert_eq!(
            h.lines,
            vec![
                Line::context("b"),
                Line::removed("c"),
                Line::added("X"),
                Line::context("d"),
            ]
        );
    }

    #[test]
    fn normalization_hides_cosmetic_changes() {
        let config = DiffConfig {
            diff: DiffOptions::default(),
            normalize: Normalize { ignore_case: true, ignore_space: true, ignore_blank: true },
        };
        let old = ["Hello  World", "", "end"];
        let new = ["hello world", "END"];
        assert!(compute_diff_with(&old, &new, &config).is_empty());
        assert!(!compute_diff(&old, &new, &config.diff).is_empty());
    }

    #[test]
    fn text_diff_counts_lines() {
        let diff = diff_text("line1\nline2\nline3\n", "line1\nline3\nline4\n", &DiffOptions::default());
        assert!(!diff.is_empty());
        assert_eq!(diff.old_lines, 3);
        assert_eq!(diff.new_lines, 3);
        assert_eq!(diff.additions(), 1);
        assert_eq!(diff.deletions(), 1);
    }

    #[test]
    fn text_diff_identical() {
        let diff = diff_text("a\nb\n", "a\r\nb", &DiffOptions::default());
        assert!(diff.is_empty());
        assert_eq!(diff.additions(), 0);
        assert_eq!(diff.deletions(), 0);
    }

    fn lines() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[abcd]", 0..16)
    }

    proptest! {
        #[test]
        fn identity(a in lines(), context in 0usize..5) {
            prop_assert!(compute_diff(&a, &a, &opts(context)).is_empty());
        }

        #[test]
        fn non_trivial(a in lines(), b in lines(), context in 0usize..5) {
            let hunks = compute_diff(&a, &b, &opts(context));
            prop_assert_eq!(hunks.is_empty(), a == b);
        }

        #[test]
        fn replay_reconstructs_both_sides(a in lines(), b in lines(), context in 0usize..5) {
            let hunks = compute_diff(&a, &b, &opts(context));
            let old = replay(&a, &hunks, |h| h.old_start, |h| h.old_count, LineKind::in_old);
            let new = replay(&b, &hunks, |h| h.new_start, |h| h.new_count, LineKind::in_new);
            prop_assert_eq!(old, a);
            prop_assert_eq!(new, b);
        }

        #[test]
        fn context_is_bounded(a in lines(), b in lines(), context in 0usize..5) {
            for hunk in compute_diff(&a, &b, &opts(context)) {
                let leading = hunk.lines.iter().take_while(|l| l.is_context()).count();
                let trailing = hunk.lines.iter().rev().take_while(|l| l.is_context()).count();
                prop_assert!(leading <= context);
                prop_assert!(trailing <= context);
                prop_assert!(hunk.lines.iter().any(|l| l.kind.is_change()));
            }
        }

        #[test]
        fn hunks_are_ordered_and_disjoint(a in lines(), b in lines(), context in 0usize..5) {
            let hunks = compute_diff(&a, &b, &opts(context));
            for pair in hunks.windows(2) {
                prop_assert!(pair[0].old_start + pair[0].old_count <= pair[1].old_start);
                prop_assert!(pair[0].new_start + pair[0].new_count <= pair[1].new_start);
            }
        }
    }
}
