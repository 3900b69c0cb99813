use crate::VerificationMethod;

/// The subset of a DID document needed for key lookup.  Immutable once resolved.
#[derive(Clone, Debug, Default, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct DIDDocument {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub id_o: Option<String>,
    #[serde(rename = "verificationMethod", default)]
    pub verification_method_v: Vec<VerificationMethod>,
}

impl DIDDocument {
    /// Exact string match on the fragment-qualified verification method id.
    pub fn verification_method_with_id(&self, id: &str) -> Option<&VerificationMethod> {
        self.verification_method_v.iter().find(|vm| vm.id == id)
    }
}
