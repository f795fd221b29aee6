//! Error types for synthscore.
//!
//! The scoring engine itself is total and never fails. These errors belong to
//! the layers around it: configuration, input collection and building custom
//! policy matchers.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while collecting or validating analysis input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Nothing was selected: empty text or no file.
    #[error("Please provide {what} to analyze")]
    MissingSelection { what: String },

    /// Text input exceeds the configured limit.
    #[error("Input too long: {actual} bytes (max {max})")]
    TooLong { actual: usize, max: usize },

    /// Text input contains NUL bytes.
    #[error("Input contains null bytes")]
    InvalidEncoding,

    /// The given path does not name a regular file.
    #[error("Not a regular file: {path}")]
    NotAFile { path: String },
}

/// Errors building phrase or regex matchers from a custom policy.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Phrase matcher build failed: {0}")]
    Phrases(#[from] aho_corasick::BuildError),

    #[error("Regex build failed: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type for fallible synthscore operations.
pub type Result<T> = std::result::Result<T, Error>;
