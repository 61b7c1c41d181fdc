//! Line diff engine.
//!
//! Computes the edit script between two line sequences with a classic
//! longest-common-subsequence table, then groups the edits into hunks bounded
//! by a configurable number of context lines, the way `diff -U<n>` does.
//!
//! # Pipeline
//!
//! 1. [`LcsTable`] -- `O(m * n)` table of LCS lengths
//! 2. [`backtrack`] / [`edit_script`] -- flat, document-ordered [`Line`]s
//! 3. [`group_hunks`] / [`HunkGrouper`] -- context-bounded [`Hunk`]s
//! 4. [`format_unified`] -- canonical unified text
//!
//! [`compute_diff`] runs steps 1-3 in one call.
//!
//! Everything here is pure and synchronous; concurrent calls share no state.

pub mod config;
pub mod diff;
pub mod error;
pub mod hunk;
pub mod lcs;
pub mod line;
pub mod normalize;
pub mod options;
pub mod script;
pub mod text;
pub mod unified;

pub use config::DiffConfig;
pub use diff::{compute_diff, compute_diff_with, diff_text, TextDiff};
pub use error::{CoreError, CoreResult};
pub use hunk::{group_hunks, Hunk, HunkGrouper};
pub use lcs::LcsTable;
pub use line::{count_lines, Line, LineKind};
pub use normalize::Normalize;
pub use options::{DiffOptions, DEFAULT_CONTEXT};
pub use script::{backtrack, edit_script};
pub use text::{split_lines, truncate_or_pad, TRUNCATION_MARKER};
pub use unified::{format_unified, unified_lines, unified_string};
