use crate::{DIDDocument, Result};

/// Resolves a DID to its DID document.  Implementations differ only in whether a cache is consulted;
/// callers choose the policy by choosing the implementation.
#[async_trait::async_trait]
pub trait DIDResolver: Send + Sync {
    async fn resolve_did_document(&self, did: &str) -> Result<DIDDocument>;
}
