//! Error types for synesthesia.

/// Result type alias for synesthesia operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for synesthesia.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Signal has an unsupported dimensionality or layout for the operation.
    #[error("invalid signal shape: {reason}")]
    InvalidShape {
        /// Description of the shape problem.
        reason: String,
    },

    /// A parameter was outside its accepted range.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// Peak amplitude was zero, so the signal cannot be normalized.
    #[error(
        "cannot normalize {}: peak amplitude is zero",
        .channel.map_or_else(|| "signal".to_string(), |ch| format!("channel {ch}"))
    )]
    DivisionByZero {
        /// Offending channel index, `None` for mono signals.
        channel: Option<usize>,
    },

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration.
    #[error("failed to parse config")]
    ConfigParse {
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}
