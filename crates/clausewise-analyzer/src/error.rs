//! Error types for the analysis pipeline

use clausewise_domain::traits::ServiceFailure;
use thiserror::Error;

/// Errors that can occur while analyzing a document
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Unreadable or corrupt PDF
    #[error("Failed to decode document: {0}")]
    DocumentDecode(String),

    /// Upload exceeds the configured size cap
    #[error("File too large: {0} bytes (max: {1})")]
    FileTooLarge(usize, usize),

    /// Summarization or rewrite call failed
    #[error("External service error: {0}")]
    ExternalService(String),

    /// No API key configured for a service that needs one
    #[error("{0}")]
    MissingCredential(String),

    /// Comparison or rewrite triggered with blank text
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// External call did not finish within the configured bound
    #[error("External call timed out after {0}s")]
    Timeout(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalyzerError {
    /// Classify a failure reported by an external service
    pub(crate) fn from_service<E: ServiceFailure>(error: E) -> Self {
        if error.is_missing_credential() {
            AnalyzerError::MissingCredential(error.to_string())
        } else {
            AnalyzerError::ExternalService(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct FakeFailure(bool);

    impl fmt::Display for FakeFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "fake failure")
        }
    }

    impl ServiceFailure for FakeFailure {
        fn is_missing_credential(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_service_failure_classification() {
        assert!(matches!(
            AnalyzerError::from_service(FakeFailure(true)),
            AnalyzerError::MissingCredential(_)
        ));
        assert!(matches!(
            AnalyzerError::from_service(FakeFailure(false)),
            AnalyzerError::ExternalService(_)
        ));
    }

    #[test]
    fn test_file_too_large_message() {
        let err = AnalyzerError::FileTooLarge(6_000_000, 5_242_880);
        assert_eq!(err.to_string(), "File too large: 6000000 bytes (max: 5242880)");
    }
}
