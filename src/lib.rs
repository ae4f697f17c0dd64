#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # DataCite MDS client
//!
//! Registers and manages Digital Object Identifiers (DOIs) through the DataCite
//! Metadata Store (MDS) HTTP API.
//!
//! ## Operations
//!
//! | Method | Requests | Success |
//! |--------|----------|---------|
//! | [`DoiClient::register_doi`] | `POST /metadata`, then `PUT /doi/{doi}` | `201`, `201` |
//! | [`DoiClient::check_doi`] | `GET /doi/{doi}` | `200` and body equals the URL |
//! | [`DoiClient::update_url_for_doi`] | `PUT /doi/{doi}` | `201` |
//! | [`DoiClient::delete_metadata_for_doi`] | `DELETE /metadata/{doi}` | `200` |
//!
//! Every request carries HTTP Basic Auth. Unexpected statuses become
//! [`DoiError::Registration`], except for `check_doi`, which answers `false`.
//! Nothing is retried.
//!
//! Registration and URL updates take 24 to 72 hours to propagate through the
//! handle system. The client does not wait for that.
//!
//! ## Usage
//!
//! ```ignore
//! use datacite_mds_client::{DoiClient, Settings, TracingLogger};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::from_json_str(r#"{"doi": {"registration": {"datacite": {
//!         "username": "DEMO.ACCOUNT", "password": "secret",
//!         "serviceUrl": "https://mds.test.datacite.org"
//!     }}}}"#)?;
//!     let client = DoiClient::create(&settings, Some(Arc::new(TracingLogger)))?;
//!
//!     client.register_doi("10.5072/opustest-999", &xml, "https://example.org/999").await?;
//!     client.update_url_for_doi("10.5072/opustest-999", "https://example.org/new/999").await?;
//!     let resolves = client.check_doi("10.5072/opustest-999", "https://example.org/new/999").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[client]** - [`DoiClient`] and request helpers
//! - **[config]** - nested settings tree and validated [`ClientConfig`]
//! - **[error]** - [`DoiError`] and result handling
//! - **[logger]** - optional leveled logging ([`NoopLogger`], [`TracingLogger`])
//! - **[protocol]** - MDS endpoints, content types and status meanings
//! - **[types]** - [`MdsResponse`]

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod protocol;
pub mod types;

pub use client::DoiClient;
pub use config::{ClientConfig, Settings};
pub use error::{DoiError, Result};
pub use logger::{DoiLogger, LogLevel, NoopLogger, TracingLogger};
pub use protocol::MdsOperation;
pub use types::MdsResponse;
