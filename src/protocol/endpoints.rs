//! URL and body builders for MDS requests.
//!
//! DOIs are inserted verbatim: the `/` between prefix and suffix stays a path
//! separator, exactly as the service expects.

use super::constants::{DOI_PATH, METADATA_PATH};

/// Base URL with every trailing `/` removed.
fn base(service_url: &str) -> &str {
    service_url.trim_end_matches('/')
}

/// `{service_url}/metadata`
pub fn metadata_url(service_url: &str) -> String {
    format!("{}/{}", base(service_url), METADATA_PATH)
}

/// `{service_url}/metadata/{doi}`
pub fn metadata_doi_url(service_url: &str, doi: &str) -> String {
    format!("{}/{}/{}", base(service_url), METADATA_PATH, doi)
}

/// `{service_url}/doi/{doi}`
pub fn doi_url(service_url: &str, doi: &str) -> String {
    format!("{}/{}/{}", base(service_url), DOI_PATH, doi)
}

/// Body of a DOI mint or URL update request.
///
/// Exactly two lines, `doi=<doi>` and `url=<url>`, joined by a single `\n` with
/// no trailing newline. MDS rejects anything else with `400`.
pub fn mint_body(doi: &str, url: &str) -> String {
    format!("doi={}\nurl={}", doi, url)
}
