use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call to the provider.
///
/// Transport failures, timeouts, unexpected statuses and undecodable bodies all land in
/// `Request`; callers treat them alike.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid provider url {0:?}")]
    InvalidBaseUrl(String),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status of the failed response, when the provider answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Request(e) => e.status(),
            ClientError::InvalidBaseUrl(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Request(e) if e.is_timeout())
    }
}
