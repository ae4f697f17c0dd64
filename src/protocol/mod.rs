//! Wire-level details of the DataCite Metadata Store (MDS) API.
//!
//! # Endpoints
//!
//! | Operation | Method | Path | Content-Type | Success |
//! |-----------|--------|------|--------------|---------|
//! | Upload metadata | `POST` | `/metadata` | `application/xml;charset=UTF-8` | `201` |
//! | Mint DOI | `PUT` | `/doi/{doi}` | `text/plain;charset=UTF-8` | `201` |
//! | Check DOI | `GET` | `/doi/{doi}` | - | `200` |
//! | Update URL | `PUT` | `/doi/{doi}` | `text/plain;charset=UTF-8` | `201` |
//! | Delete metadata | `DELETE` | `/metadata/{doi}` | - | `200` |
//!
//! # Examples
//!
//! ```
//! use datacite_mds_client::protocol::{doi_url, mint_body, MdsOperation};
//!
//! assert_eq!(
//!     doi_url("https://mds.test.datacite.org", "10.5072/opustest-999"),
//!     "https://mds.test.datacite.org/doi/10.5072/opustest-999"
//! );
//! assert_eq!(mint_body("10.5072/x", "http://example.org/x"), "doi=10.5072/x\nurl=http://example.org/x");
//! assert_eq!(MdsOperation::MintDoi.expected_status(), 201);
//! ```

mod endpoints;
mod operation;

pub use endpoints::{doi_url, metadata_doi_url, metadata_url, mint_body};
pub use operation::MdsOperation;

/// Protocol constants.
pub mod constants {
    /// Content type of DataCite XML metadata documents.
    pub const XML_CONTENT_TYPE: &str = "application/xml;charset=UTF-8";

    /// Content type of the two-line DOI/URL mapping body.
    pub const TEXT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

    /// Path segment of the metadata resource.
    pub const METADATA_PATH: &str = "metadata";

    /// Path segment of the DOI resource.
    pub const DOI_PATH: &str = "doi";
}
