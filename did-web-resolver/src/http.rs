use crate::{Error, Result};
use reqwest::StatusCode;
use std::{borrow::Cow, time::Duration};

lazy_static::lazy_static! {
    /// Building a reqwest::Client is *incredibly* slow, so we use a global instance and then clone
    /// it per use, as the documentation indicates.
    pub static ref REQWEST_CLIENT: reqwest::Client = reqwest::Client::new();
}

#[derive(Clone, Debug)]
pub struct HTTPError {
    pub status_code: reqwest::StatusCode,
    pub description: Cow<'static, str>,
}

impl std::fmt::Display for HTTPError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type HTTPResult<T> = std::result::Result<T, HTTPError>;

/// Unauthenticated HTTP GET of a URL, returning the response body as text.  DID documents, JSON
/// schemas, and status list credentials are all fetched through this.
#[async_trait::async_trait]
pub trait HTTPFetcher: Send + Sync {
    async fn http_get(&self, url: &str) -> HTTPResult<String>;
}

/// reqwest-backed HTTPFetcher.  If a timeout is configured, every request is bounded by it.
#[derive(Clone, Debug)]
pub struct HTTPFetcherReqwest {
    client: reqwest::Client,
}

impl HTTPFetcherReqwest {
    pub fn new(timeout_o: Option<Duration>) -> Result<Self> {
        let client = if let Some(timeout) = timeout_o {
            reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| Error::HTTPClientError(e.to_string().into()))?
        } else {
            REQWEST_CLIENT.clone()
        };
        Ok(Self { client })
    }
}

impl Default for HTTPFetcherReqwest {
    fn default() -> Self {
        Self {
            client: REQWEST_CLIENT.clone(),
        }
    }
}

fn http_error_from(err: reqwest::Error, context: &str) -> HTTPError {
    let status_code = if err.is_timeout() {
        StatusCode::GATEWAY_TIMEOUT
    } else {
        err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    };
    HTTPError {
        status_code,
        description: format!("{}: {}", context, err).into(),
    }
}

#[async_trait::async_trait]
impl HTTPFetcher for HTTPFetcherReqwest {
    async fn http_get(&self, url: &str) -> HTTPResult<String> {
        tracing::debug!(?url, "HTTP GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| http_error_from(err, "HTTP GET response was error"))?;
        if response.status().is_success() {
            response
                .text()
                .await
                .map_err(|err| http_error_from(err, "HTTP GET response body read error"))
        } else {
            tracing::warn!(?url, status_code = ?response.status(), "HTTP GET failed");
            Err(HTTPError {
                status_code: response.status(),
                description: format!("HTTP GET {} returned non-success status", url).into(),
            })
        }
    }
}
