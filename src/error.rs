//! Errors that can happen when bootstrapping the admin user.

use thiserror::Error;

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    BootstrapError(#[from] BootstrapError),
    #[error(transparent)]
    ClientBuilderError(#[from] ClientBuilderError),
}

/// Failures of a single `/auth/bootstrap-admin` call.
///
/// Both are terminal for the invocation; nothing is retried.
#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    RequestFailed(#[from] RequestError),
    #[error(transparent)]
    MalformedResponse(#[from] MalformedResponse),
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ClientBuilderError {
    #[error("failed to build the underlying http client")]
    BuildFailed,
    #[error("endpoint `{0}` is not https, but `https_only` is enabled")]
    InsecureEndpoint(String),
}

/// Network level failure: DNS, refused connection, TLS, or a body that could not be read.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct RequestError(#[from] pub(crate) reqwest::Error);

/// The endpoint answered, but not with JSON.
///
/// Keeps the body that was received so it can end up in the logs.
#[derive(Debug, Error)]
#[error("response body is not valid JSON")]
pub struct MalformedResponse {
    source: serde_json::Error,
    body: String,
}

impl MalformedResponse {
    pub(crate) fn new(source: serde_json::Error, body: String) -> Self {
        Self { source, body }
    }

    /// The raw body text, as received.
    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }
}
