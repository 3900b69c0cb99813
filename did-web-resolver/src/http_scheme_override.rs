use crate::{Error, Result};
use std::{collections::HashMap, sync::Arc};

/// A mapping of hostnames to HTTP schemes.  did:web resolution always uses "https", but for testing
/// and development against a local server, specific hostnames can be overridden to use "http".
#[derive(Clone, Debug, Default)]
pub struct HTTPSchemeOverride(Arc<HashMap<String, &'static str>>);

impl HTTPSchemeOverride {
    /// Create a new `HTTPSchemeOverride` data structure with no overrides.
    pub fn new() -> Self {
        Self::default()
    }
    /// Builder-style method to add an override for the given hostname.
    pub fn with_override(mut self, hostname: String, scheme: &str) -> Result<Self> {
        self.add_override(hostname, scheme)?;
        Ok(self)
    }
    /// Adding the same override twice is fine, but a conflicting scheme for an already-overridden
    /// hostname is an error.
    pub fn add_override(&mut self, hostname: String, scheme: &str) -> Result<()> {
        tracing::trace!(?hostname, ?scheme, "HTTPSchemeOverride::add_override");

        let scheme = parse_scheme_static_str(scheme)?;
        if let Some(&existing_scheme) = self.0.get(&hostname) {
            if existing_scheme == scheme {
                return Ok(());
            }
            return Err(Error::MalformedHTTPSchemeOverride(
                format!(
                    "Duplicated hostname ({:?}) with conflicting scheme",
                    hostname
                )
                .into(),
            ));
        }

        // This will not clone if this Arc only has one reference, and will clone otherwise.
        Arc::make_mut(&mut self.0).insert(hostname, scheme);
        Ok(())
    }
    /// Parse a comma-separated list of `hostname=scheme` pairs, e.g. "localhost=http,example.com=https".
    /// The empty string means no overrides.
    pub fn parse_from_comma_separated_pairs(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut http_scheme_override = Self::new();
        if s.is_empty() {
            return Ok(http_scheme_override);
        }
        for pair in s.split(',') {
            let Some((hostname, scheme)) = pair.split_once('=') else {
                tracing::error!(?pair, "malformed hostname=scheme pair");
                return Err(Error::MalformedHTTPSchemeOverride(
                    format!("Malformed hostname=scheme pair: {}", pair).into(),
                ));
            };
            http_scheme_override.add_override(hostname.trim().to_string(), scheme.trim())?;
        }
        Ok(http_scheme_override)
    }
    /// Note that "host" means hostname with optional port number (e.g. "example.com" or
    /// "localhost:8080"); only the hostname part is used for the lookup.
    pub fn determine_http_scheme_for_host(&self, host: &str) -> &'static str {
        let hostname = host.split_once(':').map_or(host, |(hostname, _port)| hostname);
        match self.0.get(hostname) {
            Some(&scheme) => {
                tracing::debug!(?host, ?scheme, "overriding HTTP scheme");
                scheme
            }
            None => "https",
        }
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::str::FromStr for HTTPSchemeOverride {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse_from_comma_separated_pairs(s)
    }
}

fn parse_scheme_static_str(scheme: &str) -> Result<&'static str> {
    match scheme {
        "http" => Ok("http"),
        "https" => Ok("https"),
        _ => Err(Error::MalformedHTTPSchemeOverride(
            format!(
                "Invalid HTTP scheme ({:?}); expected \"http\" or \"https\"",
                scheme
            )
            .into(),
        )),
    }
}
