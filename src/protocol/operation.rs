//! The five MDS calls and what their status codes mean.

use super::constants::{TEXT_CONTENT_TYPE, XML_CONTENT_TYPE};
use reqwest::Method;
use std::fmt;

/// A single request/response exchange with the Metadata Store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MdsOperation {
    /// `POST /metadata` with a DataCite XML document
    UploadMetadata,
    /// `PUT /doi/{doi}` after the metadata upload
    MintDoi,
    /// `GET /doi/{doi}`
    CheckDoi,
    /// `PUT /doi/{doi}` for an already registered DOI
    UpdateUrl,
    /// `DELETE /metadata/{doi}`
    DeleteMetadata,
}

impl MdsOperation {
    /// HTTP method used by this call.
    pub fn method(&self) -> Method {
        match self {
            MdsOperation::UploadMetadata => Method::POST,
            MdsOperation::MintDoi | MdsOperation::UpdateUrl => Method::PUT,
            MdsOperation::CheckDoi => Method::GET,
            MdsOperation::DeleteMetadata => Method::DELETE,
        }
    }

    /// The only status code treated as success.
    pub fn expected_status(&self) -> u16 {
        match self {
            MdsOperation::UploadMetadata | MdsOperation::MintDoi | MdsOperation::UpdateUrl => 201,
            MdsOperation::CheckDoi | MdsOperation::DeleteMetadata => 200,
        }
    }

    /// Content type of the request body, for calls that send one.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            MdsOperation::UploadMetadata => Some(XML_CONTENT_TYPE),
            MdsOperation::MintDoi | MdsOperation::UpdateUrl => Some(TEXT_CONTENT_TYPE),
            MdsOperation::CheckDoi | MdsOperation::DeleteMetadata => None,
        }
    }

    /// Documented meaning of `status` for this call.
    pub fn status_hint(&self, status: u16) -> Option<&'static str> {
        let hint = match (self, status) {
            (_, 401) => "no login",
            (MdsOperation::UploadMetadata, 201) => "metadata stored",
            (MdsOperation::UploadMetadata, 400) => "invalid XML or wrong prefix",
            (MdsOperation::UploadMetadata, 403) => "login problem or quota exceeded",
            (MdsOperation::UploadMetadata, 415) => "wrong or missing content type",
            (MdsOperation::MintDoi | MdsOperation::UpdateUrl, 201) => "DOI mapping stored",
            (MdsOperation::MintDoi | MdsOperation::UpdateUrl, 400) => {
                "body must be exactly two lines (DOI and URL), or wrong domain or prefix"
            }
            (MdsOperation::MintDoi | MdsOperation::UpdateUrl, 403) => {
                "login problem or quota exceeded"
            }
            (MdsOperation::MintDoi | MdsOperation::UpdateUrl, 412) => {
                "metadata must be uploaded first"
            }
            (MdsOperation::CheckDoi, 200) => "DOI resolves to the returned URL",
            (MdsOperation::CheckDoi, 204) => {
                "DOI is known to MDS but not minted or not yet resolvable"
            }
            (MdsOperation::CheckDoi | MdsOperation::DeleteMetadata, 403) => {
                "login problem or dataset belongs to another party"
            }
            (MdsOperation::CheckDoi | MdsOperation::DeleteMetadata, 404) => {
                "DOI does not exist in the metadata store"
            }
            (MdsOperation::DeleteMetadata, 200) => "metadata marked inactive",
            _ => return None,
        };
        Some(hint)
    }

    fn name(&self) -> &'static str {
        match self {
            MdsOperation::UploadMetadata => "upload metadata",
            MdsOperation::MintDoi => "mint DOI",
            MdsOperation::CheckDoi => "check DOI",
            MdsOperation::UpdateUrl => "update URL",
            MdsOperation::DeleteMetadata => "delete metadata",
        }
    }
}

impl fmt::Display for MdsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
