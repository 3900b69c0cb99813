use did_web_resolver::{HTTPError, HTTPFetcher, HTTPResult};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
    time::Duration,
};

#[derive(Clone, Debug, Default)]
struct HTTPFetcherMockState {
    body_m: HashMap<String, String>,
    request_count_m: HashMap<String, usize>,
}

/// An HTTPFetcher serving fixed bodies from a URL map, counting requests per URL.  Unknown URLs
/// produce a 404 HTTPError.  An optional delay is applied to every request, which is useful for
/// exercising concurrent callers.
#[derive(Clone, Default)]
pub struct HTTPFetcherMock {
    state_la: Arc<RwLock<HTTPFetcherMockState>>,
    delay_o: Option<Duration>,
}

impl HTTPFetcherMock {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_body(self, url: &str, body: impl Into<String>) -> Self {
        self.set_body(url, body);
        self
    }
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_o = Some(delay);
        self
    }
    pub fn set_body(&self, url: &str, body: impl Into<String>) {
        let mut state_g = self.state_la.write().unwrap();
        state_g.body_m.insert(url.to_string(), body.into());
    }
    pub fn remove_body(&self, url: &str) {
        let mut state_g = self.state_la.write().unwrap();
        state_g.body_m.remove(url);
    }
    pub fn request_count(&self, url: &str) -> usize {
        let state_g = self.state_la.read().unwrap();
        state_g.request_count_m.get(url).copied().unwrap_or(0)
    }
    pub fn total_request_count(&self) -> usize {
        let state_g = self.state_la.read().unwrap();
        state_g.request_count_m.values().sum()
    }
}

#[async_trait::async_trait]
impl HTTPFetcher for HTTPFetcherMock {
    async fn http_get(&self, url: &str) -> HTTPResult<String> {
        let body_o = {
            let mut state_g = self.state_la.write().unwrap();
            *state_g.request_count_m.entry(url.to_string()).or_insert(0) += 1;
            state_g.body_m.get(url).cloned()
        };
        tracing::trace!(?url, found = body_o.is_some(), "HTTPFetcherMock::http_get");
        if let Some(delay) = self.delay_o {
            tokio::time::sleep(delay).await;
        }
        body_o.ok_or_else(|| HTTPError {
            status_code: reqwest::StatusCode::NOT_FOUND,
            description: format!("HTTPFetcherMock has no body for {}", url).into(),
        })
    }
}
