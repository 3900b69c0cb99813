use crate::{Error, HTTPSchemeOverride, Result};

/// A parsed `did:web` DID, e.g. `did:web:example.com`, `did:web:localhost%3A8080`, or
/// `did:web:example.com:user:alice`.  See <https://w3c-ccg.github.io/did-method-web/>.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DIDWeb {
    /// Hostname with optional port, with the percent-encoded port colon already decoded.
    host: String,
    path_segment_v: Vec<String>,
}

impl DIDWeb {
    pub fn host(&self) -> &str {
        self.host.as_str()
    }
    pub fn path_segments(&self) -> &[String] {
        self.path_segment_v.as_slice()
    }
    /// The URL of the DID document: `<scheme>://<host>/.well-known/did.json` if the DID has no path,
    /// otherwise `<scheme>://<host>/<path>/did.json`.
    pub fn resolution_url(&self, http_scheme_override: &HTTPSchemeOverride) -> String {
        let http_scheme = http_scheme_override.determine_http_scheme_for_host(&self.host);
        if self.path_segment_v.is_empty() {
            format!("{}://{}/.well-known/did.json", http_scheme, self.host)
        } else {
            format!(
                "{}://{}/{}/did.json",
                http_scheme,
                self.host,
                self.path_segment_v.join("/")
            )
        }
    }
}

impl TryFrom<&str> for DIDWeb {
    type Error = Error;
    fn try_from(did: &str) -> Result<Self> {
        let method_and_id = did
            .strip_prefix("did:")
            .ok_or_else(|| Error::MalformedDID(format!("{:?} does not begin with \"did:\"", did).into()))?;
        let (method, method_specific_id) = method_and_id.split_once(':').ok_or_else(|| {
            Error::MalformedDID(format!("{:?} has no method-specific identifier", did).into())
        })?;
        if method != "web" {
            return Err(Error::UnsupportedDIDMethod(method.to_string().into()));
        }
        if method_specific_id.contains(['#', '?', '/']) {
            return Err(Error::MalformedDID(
                format!("{:?} must not contain a path, query, or fragment", did).into(),
            ));
        }

        let mut segment_i = method_specific_id.split(':');
        let host = segment_i
            .next()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| Error::MalformedDID(format!("{:?} has an empty host", did).into()))?
            .replace("%3A", ":")
            .replace("%3a", ":");
        let path_segment_v = segment_i.map(str::to_string).collect::<Vec<_>>();
        if path_segment_v.iter().any(String::is_empty) {
            return Err(Error::MalformedDID(
                format!("{:?} has an empty path segment", did).into(),
            ));
        }

        Ok(Self {
            host,
            path_segment_v,
        })
    }
}

impl std::fmt::Display for DIDWeb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "did:web:{}", self.host.replace(':', "%3A"))?;
        for path_segment in self.path_segment_v.iter() {
            write!(f, ":{}", path_segment)?;
        }
        Ok(())
    }
}
