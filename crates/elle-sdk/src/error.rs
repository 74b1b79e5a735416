//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK. A reply that decodes but carries no text is *not*
//! an error; see [`ChatReply::Empty`](crate::ChatReply::Empty).

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Invalid or missing configuration (e.g. bad URL).
    #[error("configuration error: {0}")]
    Config(String),

    /// The request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = SdkError::Config("relative URL without a base".into());
        assert_eq!(err.to_string(), "configuration error: relative URL without a base");
    }

    #[test]
    fn decode_error_from_serde() {
        let err: SdkError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, SdkError::Decode(_)));
        assert!(err.to_string().starts_with("decode error:"));
    }
}
