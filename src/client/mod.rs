//! DataCite MDS client implementation.
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch - DoiClient and the four MDS operations
//! └── utils - Basic-Auth header and response log formatting
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DoiClient`] | Authenticated client for one MDS account |
//!
//! # Examples
//!
//! ```ignore
//! use datacite_mds_client::client::DoiClient;
//! use datacite_mds_client::config::ClientConfig;
//!
//! let config = ClientConfig::new("doe", "secret", "https://mds.test.datacite.org");
//! let client = DoiClient::new(config, None)?;
//!
//! client.register_doi("10.5072/opustest-999", xml, "https://example.org/999").await?;
//! assert!(client.check_doi("10.5072/opustest-999", "https://example.org/999").await?);
//! ```

mod fetch;
mod utils;

pub use fetch::DoiClient;
pub use utils::*;
