//! Failures of the fetch/parse boundary.
//!
//! Every variant reduces to a human-readable message once it reaches the
//! state holder, see [`FetchError::user_message`]. Cancellation is not
//! represented here: a cancelled fetch is a dropped future, never an error.

/// Fallback shown when a failure has no description.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("Unexpected HTTP {status}")]
    Http { status: u16 },

    /// The server answered 2xx without a body.
    #[error("Empty body")]
    EmptyBody,

    /// Connect, timeout or body read failure.
    #[error("{0}")]
    Io(#[from] reqwest::Error),

    /// The body is not valid JSON.
    #[error("Malformed countries JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The body is valid JSON but not shaped like a country list.
    #[error("Malformed countries JSON: {0}")]
    InvalidShape(String),
}

impl FetchError {
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape(message.into())
    }

    /// Returns true for failures produced while decoding the body.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::InvalidShape(_))
    }

    /// Message attached to the view state for this failure.
    ///
    /// Network failures carry their whole cause chain, so a refused
    /// connection, a timeout and a DNS failure read differently.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => message_or_unknown(describe_network_error(e)),
            _ => message_or_unknown(self.to_string()),
        }
    }
}

/// Formats a reqwest error as `<kind>: <error>: <cause>: <cause>...`.
fn describe_network_error(err: &reqwest::Error) -> String {
    let mut message = if err.is_timeout() {
        format!("Timed out: {err}")
    } else if err.is_connect() {
        format!("Connection failed: {err}")
    } else {
        err.to_string()
    };

    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}

/// Replaces a blank failure description with [`UNKNOWN_ERROR`].
pub fn message_or_unknown(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}

/// Result type for fetch and parse operations.
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_contains_status() {
        let err = FetchError::Http { status: 500 };
        assert_eq!(err.user_message(), "Unexpected HTTP 500");
    }

    #[test]
    fn test_empty_body_message() {
        assert_eq!(FetchError::EmptyBody.user_message(), "Empty body");
    }

    #[test]
    fn test_parse_errors_are_classified() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(FetchError::from(err).is_parse_error());
        assert!(FetchError::invalid_shape("expected array").is_parse_error());
        assert!(!FetchError::EmptyBody.is_parse_error());
    }

    #[test]
    fn test_blank_description_falls_back() {
        assert_eq!(message_or_unknown(String::new()), UNKNOWN_ERROR);
        assert_eq!(message_or_unknown("  ".to_string()), UNKNOWN_ERROR);
        assert_eq!(message_or_unknown("boom".to_string()), "boom");
    }

    #[test]
    fn test_io_error_has_description() {
        let err = FetchError::Io(reqwest_error());
        assert!(!err.is_parse_error());
        assert_ne!(err.user_message(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_io_message_includes_cause() {
        let err = FetchError::Io(reqwest_error());

        let message = err.user_message();

        assert!(message.starts_with(&err.to_string()));
        assert!(message.contains("invalid IPv6 address"), "{message}");
    }

    fn reqwest_error() -> reqwest::Error {
        // An unparseable URL fails at build time without touching the network.
        reqwest::Client::new()
            .get("http://[::1")
            .build()
            .unwrap_err()
    }
}
