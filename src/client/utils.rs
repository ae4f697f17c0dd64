//! Helpers shared by the client operations.
//!
//! - Building the Basic-Auth header once per client
//! - Rendering the diagnostic lines logged for every response

use crate::error::{DoiError, Result};
use crate::protocol::MdsOperation;
use crate::types::MdsResponse;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::HeaderValue;

/// Build the `Authorization: Basic ...` header value for the given credentials.
///
/// The value is marked sensitive so it never shows up in `Debug` output of the
/// request.
///
/// # Examples
///
/// ```
/// use datacite_mds_client::client::basic_auth_header;
///
/// let header = basic_auth_header("doe", "secret").unwrap();
/// assert_eq!(header.to_str().unwrap(), "Basic ZG9lOnNlY3JldA==");
/// ```
pub fn basic_auth_header(username: &str, password: &str) -> Result<HeaderValue> {
    let credentials = STANDARD.encode(format!("{}:{}", username, password));
    let mut value = HeaderValue::from_str(&format!("Basic {}", credentials))
        .map_err(|_| DoiError::Configuration("invalid DataCite credentials".to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Debug lines logged for a response, in the order they are emitted.
///
/// `expected_body` is only used by the DOI check, whose body is compared
/// against a landing page URL.
pub fn response_log_lines(
    operation: MdsOperation,
    response: &MdsResponse,
    expected_body: Option<&str>,
) -> Vec<String> {
    let mut lines = vec![format!(
        "DataCite response status code (expected {}): {}",
        operation.expected_status(),
        response.status
    )];

    match (operation, expected_body) {
        (MdsOperation::DeleteMetadata, _) => {}
        (_, Some(expected)) => lines.push(format!(
            "DataCite response body (expected {}): {}",
            expected,
            response.body_text()
        )),
        (_, None) => lines.push(format!(
            "DataCite response body: {}",
            response.body_text()
        )),
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        let header = basic_auth_header("doe", "secret").unwrap();
        assert_eq!(header.to_str().unwrap(), "Basic ZG9lOnNlY3JldA==");
        assert!(header.is_sensitive());
    }

    #[test]
    fn test_log_lines_for_registration() {
        let response = MdsResponse::new(201, "OK");
        let lines = response_log_lines(MdsOperation::UploadMetadata, &response, None);
        assert_eq!(
            lines,
            vec![
                "DataCite response status code (expected 201): 201".to_string(),
                "DataCite response body: OK".to_string(),
            ]
        );
    }

    #[test]
    fn test_log_lines_for_check() {
        let response = MdsResponse::new(404, "DOI not found");
        let lines =
            response_log_lines(MdsOperation::CheckDoi, &response, Some("http://example.org/1"));
        assert_eq!(lines[0], "DataCite response status code (expected 200): 404");
        assert_eq!(
            lines[1],
            "DataCite response body (expected http://example.org/1): DOI not found"
        );
    }

    #[test]
    fn test_log_lines_for_delete_skip_body() {
        let response = MdsResponse::new(200, "OK");
        let lines = response_log_lines(MdsOperation::DeleteMetadata, &response, None);
        assert_eq!(lines, vec!["DataCite response status code (expected 200): 200".to_string()]);
    }

    #[test]
    fn test_log_lines_for_undecodable_body() {
        let response = MdsResponse::new(200, b"http://example.org/caf\xE9".to_vec());
        let lines = response_log_lines(MdsOperation::CheckDoi, &response, Some("x"));
        assert_eq!(lines[1], "DataCite response body (expected x): http://example.org/caf\u{FFFD}");
    }
}
