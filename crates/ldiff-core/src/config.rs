//! TOML configuration for diff runs.
//!
//! ```toml
//! [diff]
//! context = 5
//!
//! [normalize]
//! ignore_case = true
//! ignore_blank = true
//! ```
//!
//! Every table and key is optional; missing values take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::normalize::Normalize;
use crate::options::DiffOptions;

/// A complete diff configuration document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Hunk grouping options.
    pub diff: DiffOptions,
    /// Line normalization applied before diffing.
    pub normalize: Normalize,
}

impl DiffConfig {
    /// Parse a configuration document from TOML text.
    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize this configuration to TOML text.
    pub fn to_toml_string(&self) -> CoreResult<String> {
        Ok(toml::to_string(self)?)
    }
}
