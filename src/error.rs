//! Crate-level error types.
//!
//! [`HuobiError`] unifies every error source (configuration, HTTP, JSON,
//! missing or mistyped message fields) behind a single enum so callers can
//! match on the variant they care about while still using the `?` operator
//! for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HuobiError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum HuobiError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// An HTTP request to the REST API failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a local file or stream failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A message could not be decoded as a JSON object.
    #[error("malformed message: {0}")]
    MalformedMessage(String),

    /// A required field is absent from a JSON object.
    #[error("json field `{0}` does not exist")]
    MissingField(String),

    /// A field is present but holds a value of the wrong shape.
    #[error("json field `{field}` is invalid: {reason}")]
    InvalidField { field: String, reason: String },

    /// The REST API answered with a non-`ok` status.
    #[error("huobi api error {code}: {message}")]
    Api { code: String, message: String },
}
