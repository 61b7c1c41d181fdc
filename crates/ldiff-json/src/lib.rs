//! Structural diff for JSON-like trees.
//!
//! Compares two decoded values recursively and reports path-qualified
//! differences (`+ a.b: 1`, `- xs[2]: 3`, `~ name: old -> new`). Object keys are
//! visited in sorted order so output is stable between runs.
//!
//! # Key Types
//!
//! - [`Tree`] / [`Scalar`] -- the generic value being compared
//! - [`StructuralDiff`] / [`StructuralChange`] -- typed comparison result
//! - [`JsonDiffError`] -- decode failures from [`compare_json_bytes`]

pub mod compare;
pub mod error;
pub mod path;
pub mod tree;

pub use compare::{compare_json, compare_json_bytes, compare_trees, StructuralChange, StructuralDiff};
pub use error::{Input, JsonDiffError, JsonResult};
pub use path::Path;
pub use tree::{Kind, Scalar, Tree};
