use thiserror::Error;

/// Errors raised by theme resolution and switching
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ThemeError {
    /// A theme id outside the enumerated set
    #[error("unknown theme `{0}`")]
    InvalidTheme(String),

    /// A registry without a complete token set for a declared theme
    #[error("theme `{theme}` is misconfigured: {reason}")]
    Configuration { theme: String, reason: String },
}

/// Errors raised by persistent theme storage
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store cannot be used at all (disabled, wrong kind of
    /// path, unwritable location)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
