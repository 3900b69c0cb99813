use crate::{DIDDocument, Result};

/// Backing store for resolved DID documents, keyed by DID string.
#[async_trait::async_trait]
pub trait DIDDocCache: Send + Sync {
    /// Returns None if there is no (unexpired) entry for the DID.
    async fn get(&self, did: &str) -> Result<Option<DIDDocument>>;
    /// Stores the DID document, replacing any existing entry.
    async fn put(&self, did: &str, did_document: DIDDocument) -> Result<()>;
    /// Removes the entry for the DID, if any.
    async fn invalidate(&self, did: &str) -> Result<()>;
    /// Removes all entries.
    async fn clear(&self) -> Result<()>;
}
