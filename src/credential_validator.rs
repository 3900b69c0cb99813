use crate::{KeyMaterialResolver, MediaType, Result, ValidationResult};

/// Checks signature and structure of a presentation or credential.  Implementations obtain key
/// material, schemas, and status lists through the given KeyMaterialResolver.
///
/// An error return means validation could not be carried out at all (e.g. the signing key could
/// not be found), whereas a ValidationResult with `verified == false` means it was carried out
/// and failed.
#[async_trait::async_trait]
pub trait CredentialValidator: Send + Sync {
    async fn validate(
        &self,
        media_type: MediaType,
        content: &[u8],
        key_material_resolver: &KeyMaterialResolver,
    ) -> Result<ValidationResult>;
}
