use crate::HTTPError;
use std::borrow::Cow;

#[derive(Clone, Debug, thiserror::Error)]
pub enum Error {
    #[error("DID doc cache error: {0}")]
    DIDDocCacheError(Cow<'static, str>),
    #[error("DID resolution failure: {0}")]
    DIDResolutionFailure(HTTPError),
    #[error("HTTP client error: {0}")]
    HTTPClientError(Cow<'static, str>),
    #[error("Malformed DID: {0}")]
    MalformedDID(Cow<'static, str>),
    #[error("Malformed DID document: {0}")]
    MalformedDIDDocument(Cow<'static, str>),
    #[error("Malformed HTTP scheme override: {0}")]
    MalformedHTTPSchemeOverride(Cow<'static, str>),
    #[error("Unsupported DID method: {0}")]
    UnsupportedDIDMethod(Cow<'static, str>),
}

impl From<HTTPError> for Error {
    fn from(http_error: HTTPError) -> Self {
        Self::DIDResolutionFailure(http_error)
    }
}
