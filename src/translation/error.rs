//! Failure kinds for a single translation request.
//!
//! Every variant is terminal for the request that produced it and nothing else:
//! the session displays the message and carries on.

use thiserror::Error;

/// Outcome of one translation call.
pub type TranslationResult = Result<String, TranslationError>;

/// Translation-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// No credential configured; no request was sent.
    #[error(
        "API key is missing. Set the {env_var} environment variable or api_key in the config file."
    )]
    MissingApiKey { env_var: String },

    /// Connection, DNS, timeout or body read failure.
    #[error("A network error occurred: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status.
    #[error("An HTTP error occurred: {status} {detail}")]
    Http { status: u16, detail: String },

    /// The body did not follow `candidates[0].content.parts[0]`.
    #[error("Invalid API response structure")]
    InvalidResponseStructure,

    /// The response had the expected shape but no usable text.
    #[error("Could not extract translation from API response")]
    EmptyTranslation,

    /// Anything else that went wrong while preparing or sending the request.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_message_names_variable() {
        let err = TranslationError::MissingApiKey {
            env_var: "GEMINI_API_KEY".to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with("API key is missing"));
        assert!(message.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_http_message_includes_status_and_detail() {
        let err = TranslationError::Http {
            status: 503,
            detail: "Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "An HTTP error occurred: 503 Service Unavailable"
        );
    }

    #[test]
    fn test_structure_and_extraction_messages_differ() {
        assert_ne!(
            TranslationError::InvalidResponseStructure.to_string(),
            TranslationError::EmptyTranslation.to_string()
        );
    }
}
