use crate::{
    parse_did_document, DIDDocument, DIDResolver, DIDWeb, HTTPFetcher, HTTPSchemeOverride, Result,
};
use std::sync::Arc;

/// Resolves `did:web` DIDs by fetching the DID document over HTTP on every call.
#[derive(Clone)]
pub struct DIDResolverDirect {
    http_fetcher_a: Arc<dyn HTTPFetcher>,
    http_scheme_override: HTTPSchemeOverride,
}

impl DIDResolverDirect {
    pub fn new(
        http_fetcher_a: Arc<dyn HTTPFetcher>,
        http_scheme_override: HTTPSchemeOverride,
    ) -> Self {
        Self {
            http_fetcher_a,
            http_scheme_override,
        }
    }
}

#[async_trait::async_trait]
impl DIDResolver for DIDResolverDirect {
    async fn resolve_did_document(&self, did: &str) -> Result<DIDDocument> {
        let did_web = DIDWeb::try_from(did)?;
        let resolution_url = did_web.resolution_url(&self.http_scheme_override);
        tracing::debug!(?did, ?resolution_url, "DIDResolverDirect::resolve_did_document");

        let did_document_body = self.http_fetcher_a.http_get(&resolution_url).await?;
        let did_document = parse_did_document(&did_document_body)?;
        tracing::trace!(
            ?did,
            verification_method_count = did_document.verification_method_v.len(),
            "resolved DID document"
        );
        Ok(did_document)
    }
}
