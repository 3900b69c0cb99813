use crate::{CredentialVerificationResult, ValidationResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum CredentialFailure {
    #[serde(rename = "Revoked credential")]
    Revoked,
    #[serde(rename = "Invalid credential")]
    Invalid,
}

impl std::fmt::Display for CredentialFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Revoked => f.write_str("Revoked credential"),
            Self::Invalid => f.write_str("Invalid credential"),
        }
    }
}

/// Itemizes one invalid credential of a presentation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialError {
    pub credential_index: usize,
    pub error: CredentialFailure,
    pub details: ValidationResult,
}

impl CredentialError {
    /// None if the credential is valid.
    pub fn for_result(credential_result: &CredentialVerificationResult) -> Option<Self> {
        if credential_result.valid {
            return None;
        }
        let error = if credential_result.revoked {
            CredentialFailure::Revoked
        } else {
            CredentialFailure::Invalid
        };
        Some(Self {
            credential_index: credential_result.index,
            error,
            details: credential_result.validation_result.clone(),
        })
    }
}
