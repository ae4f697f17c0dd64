//! Main DataCite MDS client implementation.
//!
//! Provides [`DoiClient`], which registers DOIs, checks where they resolve,
//! moves them to a new landing page and deletes their metadata.
//!
//! # Examples
//!
//! ## Registering a DOI
//!
//! ```ignore
//! use datacite_mds_client::{DoiClient, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::from_json_str(&std::fs::read_to_string("config.json")?)?;
//!     let client = DoiClient::create(&settings, None)?;
//!
//!     client
//!         .register_doi("10.5072/opustest-999", &xml, "https://example.org/frontdoor/999")
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Checking a DOI
//!
//! ```ignore
//! let resolves = client
//!     .check_doi("10.5072/opustest-999", "https://example.org/frontdoor/999")
//!     .await?;
//! ```
//!
//! A freshly registered or updated DOI can take 24 to 72 hours to become
//! resolvable through the handle system; `check_doi` reports `false` until then.

use crate::client::utils::{basic_auth_header, response_log_lines};
use crate::config::{ClientConfig, Settings};
use crate::error::{DoiError, Result};
use crate::logger::{DoiLogger, NoopLogger};
use crate::protocol::{self, MdsOperation};
use crate::types::MdsResponse;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::sync::Arc;

/// Client for one DataCite MDS account.
///
/// Holds only immutable configuration and a pooled `reqwest::Client`, so it is
/// cheap to clone and safe to share between tasks. Every call opens its own
/// HTTP exchange; nothing is retried or cached.
#[derive(Clone)]
pub struct DoiClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
    authorization: HeaderValue,
    logger: Arc<dyn DoiLogger>,
}

impl DoiClient {
    /// Create a client from the `doi.registration.datacite` settings.
    ///
    /// # Errors
    ///
    /// Returns [`DoiError::Configuration`] if username, password or service URL is
    /// missing or empty. The failure is logged at error level first.
    pub fn create(settings: &Settings, logger: Option<Arc<dyn DoiLogger>>) -> Result<Self> {
        let logger = or_noop(logger);
        let config = match ClientConfig::from_settings(settings) {
            Ok(config) => config,
            Err(e) => {
                logger.err(&e.to_string());
                return Err(e);
            }
        };
        Self::build(config, None, logger)
    }

    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Same validation as [`DoiClient::create`]; also fails with
    /// [`DoiError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig, logger: Option<Arc<dyn DoiLogger>>) -> Result<Self> {
        Self::build(config, None, or_noop(logger))
    }

    /// Create a client that sends its requests through `http`.
    ///
    /// Timeout and user agent from `config` are ignored in favour of whatever
    /// `http` was built with.
    ///
    /// # Errors
    ///
    /// Returns [`DoiError::Configuration`] for incomplete configuration.
    pub fn with_http_client(
        config: ClientConfig,
        http: reqwest::Client,
        logger: Option<Arc<dyn DoiLogger>>,
    ) -> Result<Self> {
        Self::build(config, Some(http), or_noop(logger))
    }

    fn build(
        config: ClientConfig,
        http: Option<reqwest::Client>,
        logger: Arc<dyn DoiLogger>,
    ) -> Result<Self> {
        if let Err(e) = config.validate() {
            logger.err(&e.to_string());
            return Err(e);
        }

        let authorization = basic_auth_header(&config.username, &config.password)?;

        let client = match http {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(DoiClient {
            client,
            config: Arc::new(config),
            authorization,
            logger,
        })
    }

    /// Register `doi` with the metadata in `xml` and point it at `landing_page_url`.
    ///
    /// Uploads the metadata first (`POST /metadata`) and, only if that returned
    /// `201`, mints the DOI (`PUT /doi/{doi}`).
    ///
    /// # Errors
    ///
    /// Returns [`DoiError::Registration`] if either call does not return `201`
    /// and [`DoiError::Transport`] if a request cannot be completed.
    #[tracing::instrument(level = "debug", skip(self, xml))]
    pub async fn register_doi(&self, doi: &str, xml: &str, landing_page_url: &str) -> Result<()> {
        let response = self
            .send(
                MdsOperation::UploadMetadata,
                &protocol::metadata_url(&self.config.service_url),
                Some(xml.to_string()),
            )
            .await?;
        self.log_response(MdsOperation::UploadMetadata, &response, None);
        self.expect_status(MdsOperation::UploadMetadata, &response)?;

        let response = self
            .send(
                MdsOperation::MintDoi,
                &protocol::doi_url(&self.config.service_url, doi),
                Some(protocol::mint_body(doi, landing_page_url)),
            )
            .await?;
        self.log_response(MdsOperation::MintDoi, &response, None);
        self.expect_status(MdsOperation::MintDoi, &response)
    }

    /// Check that `doi` is registered and resolves to exactly `landing_page_url`.
    ///
    /// Any status other than `200`, or a body that differs from
    /// `landing_page_url` in any byte, yields `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Only [`DoiError::Transport`]; unexpected statuses are never errors here.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn check_doi(&self, doi: &str, landing_page_url: &str) -> Result<bool> {
        let response = self
            .send(
                MdsOperation::CheckDoi,
                &protocol::doi_url(&self.config.service_url, doi),
                None,
            )
            .await?;
        self.log_response(MdsOperation::CheckDoi, &response, Some(landing_page_url));

        Ok(response.resolves_to(landing_page_url))
    }

    /// Point an already registered `doi` at `new_url`.
    ///
    /// # Errors
    ///
    /// Returns [`DoiError::Registration`] if the service does not answer `201`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn update_url_for_doi(&self, doi: &str, new_url: &str) -> Result<()> {
        let response = self
            .send(
                MdsOperation::UpdateUrl,
                &protocol::doi_url(&self.config.service_url, doi),
                Some(protocol::mint_body(doi, new_url)),
            )
            .await?;
        self.log_response(MdsOperation::UpdateUrl, &response, None);
        self.expect_status(MdsOperation::UpdateUrl, &response)
    }

    /// Delete (mark inactive) the metadata stored for `doi`.
    ///
    /// # Errors
    ///
    /// Returns [`DoiError::Registration`] if the service does not answer `200`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn delete_metadata_for_doi(&self, doi: &str) -> Result<()> {
        let response = self
            .send(
                MdsOperation::DeleteMetadata,
                &protocol::metadata_doi_url(&self.config.service_url, doi),
                None,
            )
            .await?;
        self.log_response(MdsOperation::DeleteMetadata, &response, None);
        self.expect_status(MdsOperation::DeleteMetadata, &response)
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a single authenticated request and read the whole response.
    async fn send(
        &self,
        operation: MdsOperation,
        url: &str,
        body: Option<String>,
    ) -> Result<MdsResponse> {
        let mut req_builder = self
            .client
            .request(operation.method(), url)
            .header(AUTHORIZATION, self.authorization.clone());

        if let Some(body) = body {
            if let Some(content_type) = operation.content_type() {
                req_builder = req_builder.header(CONTENT_TYPE, content_type);
            }
            req_builder = req_builder.body(body);
        }

        let response = req_builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(MdsResponse { status, body })
    }

    fn log_response(
        &self,
        operation: MdsOperation,
        response: &MdsResponse,
        expected_body: Option<&str>,
    ) {
        for line in response_log_lines(operation, response, expected_body) {
            self.logger.debug(&line);
        }
    }

    fn expect_status(&self, operation: MdsOperation, response: &MdsResponse) -> Result<()> {
        if response.has_status(operation.expected_status()) {
            return Ok(());
        }

        let err = DoiError::Registration {
            operation,
            status: response.status,
        };
        self.logger.err(&err.to_string());
        Err(err)
    }
}

fn or_noop(logger: Option<Arc<dyn DoiLogger>>) -> Arc<dyn DoiLogger> {
    match logger {
        Some(logger) => logger,
        None => Arc::new(NoopLogger),
    }
}

impl std::fmt::Debug for DoiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
