//! Client configuration.
//!
//! Settings usually arrive as part of a larger application configuration, nested
//! under `doi.registration.datacite`:
//!
//! ```json
//! {
//!   "doi": {
//!     "registration": {
//!       "datacite": {
//!         "username": "doe",
//!         "password": "secret",
//!         "serviceUrl": "https://mds.test.datacite.org"
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! [`Settings`] mirrors that tree and [`ClientConfig`] is the flat, validated form
//! the client is built from.
//!
//! # Examples
//!
//! ```
//! use datacite_mds_client::config::{ClientConfig, Settings};
//!
//! let settings = Settings::from_json_str(r#"{
//!     "doi": { "registration": { "datacite": {
//!         "username": "doe", "password": "secret", "serviceUrl": "http://192.0.2.1"
//!     } } }
//! }"#).unwrap();
//!
//! let config = ClientConfig::from_settings(&settings).unwrap();
//! assert_eq!(config.service_url, "http://192.0.2.1");
//! ```

use crate::error::{DoiError, Result};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Application configuration tree holding the DOI settings.
///
/// Unknown keys are ignored so the tree can be deserialized straight from a
/// larger configuration document.
///
/// Values under `doi.registration.datacite` must be strings (`timeoutSeconds`
/// a number). A value of another type, e.g. `"password": 12345`, is rejected
/// while parsing with an `invalid DOI configuration: ...` error rather than
/// the missing-settings error raised for absent or empty values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// `doi` section
    #[serde(default)]
    pub doi: Option<DoiSection>,
}

/// `doi` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoiSection {
    /// `doi.registration` section
    #[serde(default)]
    pub registration: Option<RegistrationSection>,
}

/// `doi.registration` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationSection {
    /// `doi.registration.datacite` section
    #[serde(default)]
    pub datacite: Option<DataCiteSection>,
}

/// `doi.registration.datacite` section.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCiteSection {
    /// MDS account name
    #[serde(default)]
    pub username: Option<String>,
    /// MDS account password
    #[serde(default)]
    pub password: Option<String>,
    /// Base URL of the MDS API, e.g. `https://mds.datacite.org`
    #[serde(default)]
    pub service_url: Option<String>,
    /// Optional request timeout
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Optional `User-Agent` override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl fmt::Debug for DataCiteSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataCiteSection")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("service_url", &self.service_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Settings {
    /// Parse settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DoiError::Configuration`] if the document is not valid JSON or a
    /// DOI setting has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DoiError::Configuration(format!("invalid DOI configuration: {}", e)))
    }

    /// Build settings from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::from_json_str`].
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| DoiError::Configuration(format!("invalid DOI configuration: {}", e)))
    }

    /// The `doi.registration.datacite` section, if every level is present.
    pub fn datacite(&self) -> Option<&DataCiteSection> {
        self.doi
            .as_ref()?
            .registration
            .as_ref()?
            .datacite
            .as_ref()
    }
}

/// Validated configuration of a [`DoiClient`](crate::DoiClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// MDS account name, sent as Basic Auth user
    pub username: String,
    /// MDS account password, sent as Basic Auth password
    pub password: String,
    /// Base URL of the MDS API
    ///
    /// Trailing `/` characters are stripped before `/metadata` or `/doi` is
    /// appended, so `https://mds.datacite.org/` and `https://mds.datacite.org`
    /// address the same endpoints.
    pub service_url: String,
    /// Overall timeout for a single HTTP exchange; `None` leaves the transport default
    pub timeout: Option<Duration>,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration from the three required values.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        service_url: impl Into<String>,
    ) -> Self {
        ClientConfig {
            username: username.into(),
            password: password.into(),
            service_url: service_url.into(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }

    /// Read and validate `doi.registration.datacite` from `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`DoiError::Configuration`] if username, password or service URL is
    /// missing or empty.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let section = settings.datacite().ok_or_else(DoiError::missing_settings)?;

        let (username, password, service_url) = match (
            non_empty(&section.username),
            non_empty(&section.password),
            non_empty(&section.service_url),
        ) {
            (Some(u), Some(p), Some(s)) => (u, p, s),
            _ => return Err(DoiError::missing_settings()),
        };

        let mut config = ClientConfig::new(username, password, service_url);
        if let Some(secs) = section.timeout_seconds {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = non_empty(&section.user_agent) {
            config = config.with_user_agent(agent);
        }
        Ok(config)
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Check that every required value is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`DoiError::Configuration`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() || self.password.is_empty() || self.service_url.is_empty() {
            return Err(DoiError::missing_settings());
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("service_url", &self.service_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn default_user_agent() -> String {
    format!("datacite-mds-client/{}", env!("CARGO_PKG_VERSION"))
}
