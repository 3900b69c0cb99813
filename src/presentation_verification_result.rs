use crate::{CredentialError, CredentialVerificationResult, ValidationResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationVerificationResult {
    /// True iff every embedded credential is valid (vacuously true if there are none).
    pub verified: bool,
    pub vp_validation: ValidationResult,
    /// In the order the credentials appear in the presentation.
    pub credential_results: Vec<CredentialVerificationResult>,
    pub errors: Vec<CredentialError>,
}

impl PresentationVerificationResult {
    /// `credential_result_v` must already be ordered by index.
    pub fn from_credential_results(
        vp_validation: ValidationResult,
        credential_result_v: Vec<CredentialVerificationResult>,
    ) -> Self {
        let verified = credential_result_v
            .iter()
            .all(|credential_result| credential_result.valid);
        let errors = credential_result_v
            .iter()
            .filter_map(CredentialError::for_result)
            .collect();
        Self {
            verified,
            vp_validation,
            credential_results: credential_result_v,
            errors,
        }
    }
}
