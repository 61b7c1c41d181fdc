//! Classified diff lines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a line relates the old and new sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Present in both sequences.
    Context,
    /// Present only in the old sequence.
    Removed,
    /// Present only in the new sequence.
    Added,
}

impl LineKind {
    /// The single-character marker used in unified output.
    pub fn marker(self) -> char {
        match self {
            Self::Context => ' ',
            Self::Removed => '-',
            Self::Added => '+',
        }
    }

    /// Returns `true` for removed and added lines.
    pub fn is_change(self) -> bool {
        !matches!(self, Self::Context)
    }

    /// Whether a line of this kind occupies a position in the old sequence.
    pub fn in_old(self) -> bool {
        matches!(self, Self::Context | Self::Removed)
    }

    /// Whether a line of this kind occupies a position in the new sequence.
    pub fn in_new(self) -> bool {
        matches!(self, Self::Context | Self::Added)
    }
}

/// A single line of an edit script.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,
    pub content: String,
}

impl Line {
    pub fn context(content: impl Into<String>) -> Self {
        Self { kind: LineKind::Context, content: content.into() }
    }

    pub fn removed(content: impl Into<String>) -> Self {
        Self { kind: LineKind::Removed, content: content.into() }
    }

    pub fn added(content: impl Into<String>) -> Self {
        Self { kind: LineKind::Added, content: content.into() }
    }

    pub fn is_context(&self) -> bool {
        self.kind == LineKind::Context
    }
}

/// Renders as `<marker><content>`, without a trailing newline.
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.marker(), self.content)
    }
}

/// Count old-side and new-side lines: `(context + removed, context + added)`.
pub fn count_lines(lines: &[Line]) -> (usize, usize) {
    lines.iter().fold((0, 0), |(old, new), line| {
        (
            old + usize::from(line.kind.in_old()),
            new + usize::from(line.kind.in_new()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers() {
        assert_eq!(LineKind::Context.marker(), ' ');
        assert_eq!(LineKind::Removed.marker(), '-');
        assert_eq!(LineKind::Added.marker(), '+');
    }

    #[test]
    fn display_prefixes_marker() {
        assert_eq!(Line::context("a").to_string(), " a");
        assert_eq!(Line::removed("b").to_string(), "-b");
        assert_eq!(Line::added("").to_string(), "+");
    }

    #[test]
    fn count_lines_by_kind() {
        assert_eq!(count_lines(&[]), (0, 0));
        assert_eq!(count_lines(&[Line::context("a"), Line::context("b")]), (2, 2));
        assert_eq!(
            count_lines(&[
                Line::context("a"),
                Line::removed("b"),
                Line::added("c"),
                Line::context("d"),
            ]),
            (3, 3)
        );
        assert_eq!(count_lines(&[Line::removed("a"), Line::removed("b")]), (2, 0));
        assert_eq!(count_lines(&[Line::added("a"), Line::added("b")]), (0, 2));
    }

    #[test]
    fn serde_uses_snake_case_kinds() {
        let json = serde_json::to_string(&Line::removed("x")).unwrap();
        assert_eq!(json, r#"{"kind":"removed","content":"x"}"#);
    }
}
