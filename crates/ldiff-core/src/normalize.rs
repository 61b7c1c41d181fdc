//! Line normalization applied before diffing.
//!
//! The LCS comparison itself is exact. Callers that want case- or
//! whitespace-insensitive diffs normalize both sides first; the resulting
//! hunks then carry the normalized text.

use serde::{Deserialize, Serialize};

/// Which normalizations to apply to each input line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Normalize {
    /// Lowercase every line.
    pub ignore_case: bool,
    /// Collapse runs of whitespace into a single space and trim both ends.
    pub ignore_space: bool,
    /// Drop lines that are empty or whitespace-only.
    pub ignore_blank: bool,
}

impl Normalize {
    /// Returns `true` if no normalization is enabled.
    pub fn is_identity(&self) -> bool {
        !(self.ignore_case || self.ignore_space || self.ignore_blank)
    }

    /// Normalize a single line. Returns `None` if the line is dropped.
    pub fn line(&self, line: &str) -> Option<String> {
        let mut out = if self.ignore_case {
            line.to_lowercase()
        } else {
            line.to_owned()
        };
        if self.ignore_space {
            out = out.split_whitespace().collect::<Vec<_>>().join(" ");
        }
        if self.ignore_blank && out.trim().is_empty() {
            return None;
        }
        Some(out)
    }

    /// Normalize every line, dropping blank ones when `ignore_blank` is set.
    pub fn apply<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        lines.iter().filter_map(|l| self.line(l.as_ref())).collect()
    }
}
