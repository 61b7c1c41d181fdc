use serde::{Deserialize, Serialize};

/// Default number of context lines around each change.
pub const DEFAULT_CONTEXT: usize = 3;

/// Options controlling how an edit script is grouped into hunks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Unchanged lines kept before and after each change region. Regions
    /// separated by fewer than `2 * context` unchanged lines share a hunk.
    pub context: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self { context: DEFAULT_CONTEXT }
    }
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of context lines.
    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }
}
