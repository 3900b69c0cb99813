use did_web_resolver::HTTPError;
use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Credential validator error: {0}")]
    CredentialValidator(Cow<'static, str>),
    #[error("Fetch failure: {0}")]
    FetchFailure(HTTPError),
    #[error("Key not found for {0}")]
    KeyNotFound(Cow<'static, str>),
    #[error("Malformed JWT: {0}")]
    MalformedJWT(Cow<'static, str>),
    #[error("Malformed schema: {0}")]
    MalformedSchema(Cow<'static, str>),
    #[error(transparent)]
    Resolution(#[from] did_web_resolver::Error),
    #[error("Revocation check failure: {0}")]
    RevocationCheck(Cow<'static, str>),
    #[error(transparent)]
    StatusList(#[from] bitstring_status_list::Error),
    #[error("Unsupported resolution request: {0}")]
    UnsupportedRequest(Cow<'static, str>),
}
