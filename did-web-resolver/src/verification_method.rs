#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct VerificationMethod {
    /// Fragment-qualified key identifier, i.e. `<did>#<fragment>`.
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_o: Option<String>,
    pub controller: String,
    /// Only JWK-form public keys are supported; a verification method without one can't supply
    /// key material.
    #[serde(
        rename = "publicKeyJwk",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub public_key_jwk_o: Option<serde_json::Value>,
}

impl VerificationMethod {
    /// The DID portion of the id, i.e. everything before the '#'.
    pub fn did(&self) -> &str {
        self.id.split('#').next().unwrap_or(self.id.as_str())
    }
}
