use crate::{DIDDocCache, DIDDocument, Error, Result};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
    time::{Duration, Instant},
};

lazy_static::lazy_static! {
    /// Shared by every DIDDocCacheMemory obtained through DIDDocCacheMemory::process_wide.
    static ref PROCESS_WIDE_DID_DOC_CACHE: DIDDocCacheMemory = DIDDocCacheMemory::new(None);
}

#[derive(Clone, Debug)]
struct DIDDocCacheEntry {
    did_document: DIDDocument,
    stored_at: Instant,
}

/// In-memory DIDDocCache.  If a time-to-live is set, entries older than it are treated as absent
/// (and removed on the next access); otherwise entries live until invalidated.
#[derive(Clone, Debug)]
pub struct DIDDocCacheMemory {
    state_la: Arc<RwLock<HashMap<String, DIDDocCacheEntry>>>,
    ttl_o: Option<Duration>,
}

impl DIDDocCacheMemory {
    pub fn new(ttl_o: Option<Duration>) -> Self {
        Self {
            state_la: Arc::new(RwLock::new(HashMap::new())),
            ttl_o,
        }
    }
    /// A handle to the cache shared across the whole process.  Entries never expire; use
    /// `invalidate` or `clear` to drop them.
    pub fn process_wide() -> Self {
        PROCESS_WIDE_DID_DOC_CACHE.clone()
    }
    pub fn ttl_o(&self) -> Option<Duration> {
        self.ttl_o
    }
    pub fn len(&self) -> Result<usize> {
        Ok(self.read_state()?.len())
    }
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
    fn is_expired(&self, entry: &DIDDocCacheEntry) -> bool {
        self.ttl_o
            .is_some_and(|ttl| entry.stored_at.elapsed() >= ttl)
    }
    fn read_state(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, DIDDocCacheEntry>>> {
        self.state_la
            .read()
            .map_err(|_| Error::DIDDocCacheError("DID doc cache lock was poisoned".into()))
    }
    fn write_state(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, DIDDocCacheEntry>>> {
        self.state_la
            .write()
            .map_err(|_| Error::DIDDocCacheError("DID doc cache lock was poisoned".into()))
    }
}

impl Default for DIDDocCacheMemory {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait::async_trait]
impl DIDDocCache for DIDDocCacheMemory {
    async fn get(&self, did: &str) -> Result<Option<DIDDocument>> {
        {
            let state_g = self.read_state()?;
            match state_g.get(did) {
                None => return Ok(None),
                Some(entry) if !self.is_expired(entry) => {
                    return Ok(Some(entry.did_document.clone()));
                }
                Some(_) => {}
            }
        }
        tracing::debug!(?did, "DID doc cache entry expired");
        let mut state_g = self.write_state()?;
        // Re-check under the write lock, since a fresh entry may have been stored meanwhile.
        if state_g.get(did).is_some_and(|entry| self.is_expired(entry)) {
            state_g.remove(did);
        }
        Ok(None)
    }
    async fn put(&self, did: &str, did_document: DIDDocument) -> Result<()> {
        let entry = DIDDocCacheEntry {
            did_document,
            stored_at: Instant::now(),
        };
        self.write_state()?.insert(did.to_string(), entry);
        Ok(())
    }
    async fn invalidate(&self, did: &str) -> Result<()> {
        self.write_state()?.remove(did);
        Ok(())
    }
    async fn clear(&self) -> Result<()> {
        self.write_state()?.clear();
        Ok(())
    }
}
