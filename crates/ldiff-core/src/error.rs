//! Error types for the core diff crate.

/// Errors that can occur while reading or writing diff configuration.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A configuration document could not be parsed.
    #[error("invalid diff configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration could not be written out.
    #[error("serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),
}

/// Convenience alias for core results.
pub type CoreResult<T> = Result<T, CoreError>;
