mod did_doc_cache;
mod did_doc_cache_memory;
mod did_document;
mod did_resolver;
mod did_resolver_cached;
mod did_resolver_direct;
mod did_web;
mod error;
mod http;
mod http_scheme_override;
mod verification_method;

pub use crate::{
    did_doc_cache::DIDDocCache,
    did_doc_cache_memory::DIDDocCacheMemory,
    did_document::DIDDocument,
    did_resolver::DIDResolver,
    did_resolver_cached::DIDResolverCached,
    did_resolver_direct::DIDResolverDirect,
    did_web::DIDWeb,
    error::Error,
    http::{HTTPError, HTTPFetcher, HTTPFetcherReqwest, HTTPResult, REQWEST_CLIENT},
    http_scheme_override::HTTPSchemeOverride,
    verification_method::VerificationMethod,
};
pub type Result<T> = std::result::Result<T, Error>;

/// Parse a DID document body.  Both a bare DID document and a DID resolution result wrapping it
/// in a `didDocument` field are accepted.
pub fn parse_did_document(did_document_body: &str) -> Result<DIDDocument> {
    let mut value = serde_json::from_str::<serde_json::Value>(did_document_body)
        .map_err(|e| Error::MalformedDIDDocument(e.to_string().into()))?;
    if let Some(did_document_value) = value.get_mut("didDocument") {
        value = did_document_value.take();
    }
    serde_json::from_value::<DIDDocument>(value)
        .map_err(|e| Error::MalformedDIDDocument(e.to_string().into()))
}
