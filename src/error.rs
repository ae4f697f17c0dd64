//! Error types and result handling for the DOI client.
//!
//! The taxonomy is intentionally coarse:
//!
//! | Variant | Raised by | Meaning |
//! |---------|-----------|---------|
//! | [`DoiError::Configuration`] | construction | required settings are missing or empty |
//! | [`DoiError::Registration`] | every operation except `check_doi` | MDS answered with an unexpected status |
//! | [`DoiError::Transport`] | every operation | the HTTP exchange itself failed |

use crate::protocol::MdsOperation;
use thiserror::Error;

/// Result type alias for DOI client operations.
pub type Result<T> = std::result::Result<T, DoiError>;

/// Message used when the client cannot be built from the supplied settings.
pub const MISSING_SETTINGS_MESSAGE: &str =
    "missing configuration settings to properly initialize DOI client";

/// Errors that can occur while talking to the DataCite Metadata Store.
#[derive(Error, Debug)]
pub enum DoiError {
    /// Username, password or service URL is missing or empty.
    #[error("{0}")]
    Configuration(String),

    /// The service answered with a status code other than the expected one.
    #[error("unexpected DataCite MDS response code {status}")]
    Registration {
        /// The call that received the response.
        operation: MdsOperation,
        /// Observed HTTP status code.
        status: u16,
    },

    /// The request could not be sent or the response could not be read.
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl DoiError {
    /// Build the construction error raised for incomplete settings.
    pub fn missing_settings() -> Self {
        DoiError::Configuration(MISSING_SETTINGS_MESSAGE.to_string())
    }

    /// Status code observed by a failed registration call, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            DoiError::Registration { status, .. } => Some(*status),
            DoiError::Transport(e) => e.status().map(|s| s.as_u16()),
            DoiError::Configuration(_) => None,
        }
    }

    /// Check if this error was raised while building the client
    pub fn is_configuration(&self) -> bool {
        matches!(self, DoiError::Configuration(_))
    }

    /// Check if the service answered with an unexpected status
    pub fn is_registration(&self) -> bool {
        matches!(self, DoiError::Registration { .. })
    }

    /// Check if the HTTP exchange itself failed
    pub fn is_transport(&self) -> bool {
        matches!(self, DoiError::Transport(_))
    }

    /// Documented meaning of the status code for the failed call.
    ///
    /// The error kind stays the same for every unexpected status; this only
    /// helps a caller decide what to do next (e.g. `412` on minting means the
    /// metadata was never uploaded).
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            DoiError::Registration { operation, status } => operation.status_hint(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DoiError {
    fn from(err: reqwest::Error) -> Self {
        DoiError::Transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_settings_message() {
        let err = DoiError::missing_settings();
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "missing configuration settings to properly initialize DOI client"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_registration_message_carries_status() {
        let err = DoiError::Registration {
            operation: MdsOperation::UploadMetadata,
            status: 415,
        };
        assert!(err.is_registration());
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "unexpected DataCite MDS response code 415");
        assert_eq!(err.status(), Some(415));
    }

    #[test]
    fn test_hint_for_precondition_failure() {
        let err = DoiError::Registration {
            operation: MdsOperation::MintDoi,
            status: 412,
        };
        assert_eq!(err.hint(), Some("metadata must be uploaded first"));
        assert_eq!(DoiError::missing_settings().hint(), None);
    }
}
