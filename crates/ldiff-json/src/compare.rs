//! Recursive structural comparison of two trees.
//!
//! Differences are reported per location:
//!
//! - `<path>: type mismatch: <T1> vs <T2>` -- the kinds differ; no recursion
//! - `+ <path>: <value>` -- present only on the right
//! - `- <path>: <value>` -- present only on the left
//! - `~ <path>: <old> -> <new>` -- scalars of the same kind with different values
//!
//! Arrays are compared index by index, and every extra element on either side
//! gets its own record.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Input, JsonResult};
use crate::path::Path;
use crate::tree::{Kind, Tree};

/// A single difference between two trees.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum StructuralChange {
    /// The two values have different kinds.
    TypeMismatch { path: String, old: Kind, new: Kind },
    /// A member or element exists only in the new tree.
    Added { path: String, value: Tree },
    /// A member or element exists only in the old tree.
    Removed { path: String, value: Tree },
    /// A scalar changed value.
    Modified { path: String, old: Tree, new: Tree },
}

impl fmt::Display for StructuralChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { path, old, new } => {
                write!(f, "{path}: type mismatch: {old} vs {new}")
            }
            Self::Added { path, value } => write!(f, "+ {path}: {value}"),
            Self::Removed { path, value } => write!(f, "- {path}: {value}"),
            Self::Modified { path, old, new } => write!(f, "~ {path}: {old} -> {new}"),
        }
    }
}

/// The result of comparing two trees.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StructuralDiff {
    /// Changes in document order (object keys sorted).
    pub changes: Vec<StructuralChange>,
}

impl StructuralDiff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the trees are equal.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn additions(&self) -> usize {
        self.count(|c| matches!(c, StructuralChange::Added { .. }))
    }

    pub fn removals(&self) -> usize {
        self.count(|c| matches!(c, StructuralChange::Removed { .. }))
    }

    pub fn modifications(&self) -> usize {
        self.count(|c| matches!(c, StructuralChange::Modified { .. }))
    }

    pub fn mismatches(&self) -> usize {
        self.count(|c| matches!(c, StructuralChange::TypeMismatch { .. }))
    }

    /// Render every change as a difference record.
    pub fn to_records(&self) -> Vec<String> {
        self.changes.iter().map(ToString::to_string).collect()
    }

    fn count(&self, pred: impl Fn(&StructuralChange) -> bool) -> usize {
        self.changes.iter().filter(|c| pred(c)).count()
    }
}

/// Compare two trees and return typed changes.
pub fn compare_trees(old: &Tree, new: &Tree) -> StructuralDiff {
    let mut changes = Vec::new();
    compare(&Path::root(), old, new, &mut changes);
    StructuralDiff { changes }
}

/// Compare two trees and return human-readable difference records.
pub fn compare_json(old: &Tree, new: &Tree) -> Vec<String> {
    compare_trees(old, new).to_records()
}

/// Decode two JSON payloads and compare them.
///
/// Fails with [`JsonDiffError::Decode`](crate::JsonDiffError::Decode) if
/// either payload is not valid JSON. Equal payloads short-circuit to an empty
/// result.
pub fn compare_json_bytes(old: &[u8], new: &[u8]) -> JsonResult<Vec<String>> {
    let old = Tree::decode(old, Input::First)?;
    let new = Tree::decode(new, Input::Second)?;

    if old == new {
        return Ok(Vec::new());
    }

    let records = compare_json(&old, &new);
    debug!(records = records.len(), "compared JSON payloads");
    Ok(records)
}

fn compare(path: &Path, old: &Tree, new: &Tree, out: &mut Vec<StructuralChange>) {
    if old.kind() != new.kind() {
        out.push(StructuralChange::TypeMismatch {
            path: path.to_string(),
            old: old.kind(),
            new: new.kind(),
        });
        return;
    }

    match (old, new) {
        (Tree::Object(a), Tree::Object(b)) => {
            let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
            for key in keys {
                let child = path.key(key);
                match (a.get(key), b.get(key)) {
                    (Some(x), Some(y)) => compare(&child, x, y, out),
                    (Some(x), None) => out.push(StructuralChange::Removed {
                        path: child.to_string(),
                        value: x.clone(),
                    }),
                    (None, Some(y)) => out.push(StructuralChange::Added {
                        path: child.to_string(),
                        value: y.clone(),
                    }),
                    (None, None) => {}
                }
            }
        }
        (Tree::Array(a), Tree::Array(b)) => {
            for i in 0..a.len().max(b.len()) {
                let child = path.index(i);
                match (a.get(i), b.get(i)) {
                    (Some(x), Some(y)) => compare(&child, x, y, out),
                    (Some(x), None) => out.push(StructuralChange::Removed {
                        path: child.to_string(),
                        value: x.clone(),
                    }),
                    (None, Some(y)) => out.push(StructuralChange::Added {
                        path: child.to_string(),
                        value: y.clone(),
                    }),
                    (None, None) => {}
                }
            }
        }
        _ => {
            if old != new {
                out.push(StructuralChange::Modified {
                    path: path.to_string(),
                    old: old.clone(),
                    new: new.clone(),
                });
            }
        }
    }
}
