use crate::{DIDDocCache, DIDDocument, DIDResolver, Error, Result};
use futures::future::{BoxFuture, FutureExt, Shared};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

type InFlightResolution = Shared<BoxFuture<'static, Result<DIDDocument>>>;
type InFlightMap = HashMap<String, InFlightResolution>;

/// Consults a DIDDocCache before delegating to another DIDResolver, storing what it resolves.
/// Resolutions are single-flight per DID: while one resolution of a DID is in progress, other
/// callers for that DID await the same resolution and receive its outcome, whether a DID document
/// or an error.  Only successes are stored, so a later caller retries a failed resolution.
#[derive(Clone)]
pub struct DIDResolverCached {
    did_resolver_a: Arc<dyn DIDResolver>,
    did_doc_cache_a: Arc<dyn DIDDocCache>,
    in_flight_m: Arc<Mutex<InFlightMap>>,
}

impl DIDResolverCached {
    pub fn new(did_resolver_a: Arc<dyn DIDResolver>, did_doc_cache_a: Arc<dyn DIDDocCache>) -> Self {
        Self {
            did_resolver_a,
            did_doc_cache_a,
            in_flight_m: Arc::new(Mutex::new(HashMap::new())),
        }
    }
    pub fn did_doc_cache(&self) -> &dyn DIDDocCache {
        self.did_doc_cache_a.as_ref()
    }
    /// Drop the cached DID document for the DID so that the next resolution fetches it again.
    pub async fn invalidate(&self, did: &str) -> Result<()> {
        tracing::debug!(?did, "invalidating cached DID document");
        self.did_doc_cache_a.invalidate(did).await
    }
    /// Number of DIDs with a resolution currently in progress.
    pub fn in_flight_resolution_count(&self) -> usize {
        self.in_flight_m
            .lock()
            .map(|in_flight_g| in_flight_g.len())
            .unwrap_or(0)
    }
    /// Join the in-progress resolution of the DID, or start one.
    fn in_flight_resolution(&self, did: &str) -> Result<InFlightResolution> {
        let mut in_flight_g = self.in_flight_m.lock().map_err(|_| {
            Error::DIDDocCacheError("in-flight resolution lock was poisoned".into())
        })?;
        if let Some(in_flight_resolution) = in_flight_g.get(did) {
            tracing::trace!(?did, "joining in-flight DID resolution");
            return Ok(in_flight_resolution.clone());
        }
        let in_flight_resolution = resolve_and_store(
            self.did_resolver_a.clone(),
            self.did_doc_cache_a.clone(),
            did.to_string(),
        )
        .boxed()
        .shared();
        in_flight_g.insert(did.to_string(), in_flight_resolution.clone());
        Ok(in_flight_resolution)
    }
}

async fn resolve_and_store(
    did_resolver_a: Arc<dyn DIDResolver>,
    did_doc_cache_a: Arc<dyn DIDDocCache>,
    did: String,
) -> Result<DIDDocument> {
    // A resolution that finished between the cache miss and joining the flight has stored its
    // result already.
    if let Some(did_document) = did_doc_cache_a.get(&did).await? {
        tracing::trace!(?did, "DID document was stored by a concurrent resolution");
        return Ok(did_document);
    }
    let did_document = did_resolver_a.resolve_did_document(&did).await?;
    did_doc_cache_a.put(&did, did_document.clone()).await?;
    Ok(did_document)
}

/// Removes a DID's in-flight entry once a caller is done with it, including when the caller's
/// future is dropped mid-resolution.
struct InFlightRelease<'a> {
    in_flight_m: &'a Mutex<InFlightMap>,
    did: &'a str,
    in_flight_resolution: InFlightResolution,
}

impl Drop for InFlightRelease<'_> {
    fn drop(&mut self) {
        if let Ok(mut in_flight_g) = self.in_flight_m.lock() {
            if in_flight_g
                .get(self.did)
                .is_some_and(|current| current.ptr_eq(&self.in_flight_resolution))
            {
                in_flight_g.remove(self.did);
            }
        }
    }
}

#[async_trait::async_trait]
impl DIDResolver for DIDResolverCached {
    async fn resolve_did_document(&self, did: &str) -> Result<DIDDocument> {
        if let Some(did_document) = self.did_doc_cache_a.get(did).await? {
            tracing::trace!(?did, "DID doc cache hit");
            return Ok(did_document);
        }
        tracing::debug!(?did, "DID doc cache miss");

        let in_flight_resolution = self.in_flight_resolution(did)?;
        let _in_flight_release = InFlightRelease {
            in_flight_m: self.in_flight_m.as_ref(),
            did,
            in_flight_resolution: in_flight_resolution.clone(),
        };
        in_flight_resolution.await
    }
}
