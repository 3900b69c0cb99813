use crate::ValidationResult;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialVerificationResult {
    /// Position of the credential within the presentation.
    pub index: usize,
    /// Signature verified and not revoked.
    pub valid: bool,
    /// The credential exactly as it was embedded.
    pub credential: serde_json::Value,
    pub validation_result: ValidationResult,
    pub revoked: bool,
}
