//! Core response type shared by the client operations.

use std::borrow::Cow;

/// Status code and raw body of a single MDS response.
///
/// For `GET /doi/{doi}` the body is the landing page URL the DOI currently
/// resolves to; for the other calls it is a short status text such as `OK`.
/// The body is kept exactly as received, without charset decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdsResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl MdsResponse {
    /// Create a response from its parts.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        MdsResponse {
            status,
            body: body.into(),
        }
    }

    /// True if the service answered with `expected`.
    pub fn has_status(&self, expected: u16) -> bool {
        self.status == expected
    }

    /// Body for display; invalid UTF-8 is replaced with U+FFFD.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// True if the service answered `200` with exactly the bytes of `url` as body.
    ///
    /// No decoding, trimming or normalization is applied on either side.
    pub fn resolves_to(&self, url: &str) -> bool {
        self.status == 200 && self.body == url.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_to_exact_match() {
        let response = MdsResponse::new(200, "http://example.org/999");
        assert!(response.resolves_to("http://example.org/999"));
    }

    #[test]
    fn test_resolves_to_rejects_whitespace_difference() {
        let response = MdsResponse::new(200, "http://example.org/999\n");
        assert!(!response.resolves_to("http://example.org/999"));
    }

    #[test]
    fn test_resolves_to_requires_ok_status() {
        let response = MdsResponse::new(204, "http://example.org/999");
        assert!(!response.resolves_to("http://example.org/999"));
        assert!(response.has_status(204));
    }

    #[test]
    fn test_resolves_to_compares_raw_bytes() {
        let latin1 = MdsResponse::new(200, b"http://example.org/caf\xE9".to_vec());
        assert!(!latin1.resolves_to("http://example.org/café"));

        let invalid = MdsResponse::new(200, b"http://example.org/\xFF".to_vec());
        assert!(!invalid.resolves_to("http://example.org/\u{FFFD}"));
        assert_eq!(invalid.body_text(), "http://example.org/\u{FFFD}");
    }
}
