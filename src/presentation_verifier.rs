use crate::{
    CredentialConcurrency, CredentialValidator, CredentialVerificationResult, KeyMaterialResolver,
    MediaType, NormalizedCredential, PresentationInput, PresentationVerificationResult, Result,
    RevocationChecker, RevocationFailurePolicy, ValidationResult,
};
use std::sync::Arc;

/// Verifies a presentation and each credential embedded in it, including a revocation check of
/// each credential, and aggregates the outcomes.
#[derive(Clone)]
pub struct PresentationVerifier {
    credential_validator_a: Arc<dyn CredentialValidator>,
    key_material_resolver: KeyMaterialResolver,
    revocation_checker: RevocationChecker,
    credential_concurrency: CredentialConcurrency,
}

impl PresentationVerifier {
    pub fn new(
        credential_validator_a: Arc<dyn CredentialValidator>,
        key_material_resolver: KeyMaterialResolver,
        revocation_failure_policy: RevocationFailurePolicy,
    ) -> Self {
        let revocation_checker =
            RevocationChecker::new(key_material_resolver.clone(), revocation_failure_policy);
        Self {
            credential_validator_a,
            key_material_resolver,
            revocation_checker,
            credential_concurrency: CredentialConcurrency::default(),
        }
    }
    pub fn with_credential_concurrency(
        mut self,
        credential_concurrency: CredentialConcurrency,
    ) -> Self {
        self.credential_concurrency = credential_concurrency;
        self
    }
    pub fn key_material_resolver(&self) -> &KeyMaterialResolver {
        &self.key_material_resolver
    }
    pub fn revocation_checker(&self) -> &RevocationChecker {
        &self.revocation_checker
    }
    /// Fails only if the presentation itself can't be validated (e.g. its signing key can't be
    /// resolved).  Problems with individual credentials are reported in the returned result.
    pub async fn validate(
        &self,
        presentation: impl Into<PresentationInput>,
    ) -> Result<PresentationVerificationResult> {
        let presentation_input = presentation.into();
        let vp_validation = self
            .credential_validator_a
            .validate(
                MediaType::VPLdJWT,
                &presentation_input.to_bytes(),
                &self.key_material_resolver,
            )
            .await?;
        tracing::debug!(verified = vp_validation.verified, "presentation validated");

        let credential_v = vp_validation.embedded_credentials();
        tracing::debug!(
            credential_count = credential_v.len(),
            credential_concurrency = ?self.credential_concurrency,
            "verifying embedded credentials"
        );
        let credential_result_v = match self.credential_concurrency {
            CredentialConcurrency::Sequential => {
                let mut credential_result_v = Vec::with_capacity(credential_v.len());
                for (index, credential) in credential_v.into_iter().enumerate() {
                    credential_result_v.push(self.verify_credential(index, credential).await);
                }
                credential_result_v
            }
            CredentialConcurrency::Parallel => {
                // join_all yields outputs in input order, so results stay keyed by index.
                futures::future::join_all(
                    credential_v
                        .into_iter()
                        .enumerate()
                        .map(|(index, credential)| self.verify_credential(index, credential)),
                )
                .await
            }
        };

        let presentation_verification_result =
            PresentationVerificationResult::from_credential_results(
                vp_validation,
                credential_result_v,
            );
        tracing::info!(
            verified = presentation_verification_result.verified,
            error_count = presentation_verification_result.errors.len(),
            "presentation verification complete"
        );
        Ok(presentation_verification_result)
    }
    async fn verify_credential(
        &self,
        index: usize,
        credential: serde_json::Value,
    ) -> CredentialVerificationResult {
        tracing::trace!(index, ?credential, "verifying credential");
        let normalized_credential = NormalizedCredential::from_embedded(&credential);

        let (validation_result, validation_aborted) = match self
            .credential_validator_a
            .validate(
                normalized_credential.media_type,
                &normalized_credential.content,
                &self.key_material_resolver,
            )
            .await
        {
            Ok(validation_result) => (validation_result, false),
            Err(err) => {
                tracing::warn!(index, ?err, "credential could not be validated");
                (ValidationResult::failed(err.to_string()), true)
            }
        };
        tracing::info!(
            index,
            signature_verified = validation_result.verified,
            "credential signature verification"
        );
        match validation_result.schema_m_o.as_ref() {
            Some(schema_m) => {
                for (schema_id, schema_validation_result) in schema_m.iter() {
                    tracing::info!(
                        index,
                        ?schema_id,
                        valid = schema_validation_result.is_success(),
                        "credential schema validation"
                    );
                }
            }
            None => tracing::info!(index, "credential schema validation not performed"),
        }

        let revoked = match (
            validation_aborted,
            normalized_credential.media_type.is_signed_text(),
            normalized_credential.content_str(),
        ) {
            (true, _, _) => {
                tracing::debug!(index, "revocation check skipped for unvalidated credential");
                false
            }
            (false, true, Some(credential_text)) => {
                self.revocation_checker
                    .check_revocation_status(credential_text)
                    .await
            }
            _ => false,
        };
        tracing::info!(index, revoked, "credential revocation check");

        CredentialVerificationResult {
            index,
            valid: validation_result.verified && !revoked,
            credential,
            validation_result,
            revoked,
        }
    }
}
