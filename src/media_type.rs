/// Content types exchanged with the credential validator.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum MediaType {
    #[serde(rename = "application/vp-ld+jwt")]
    VPLdJWT,
    #[serde(rename = "application/vc-ld+jwt")]
    VCLdJWT,
    #[serde(rename = "application/jwk+json")]
    JWKJSON,
    #[serde(rename = "application/schema+json")]
    SchemaJSON,
}

impl MediaType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VPLdJWT => "application/vp-ld+jwt",
            Self::VCLdJWT => "application/vc-ld+jwt",
            Self::JWKJSON => "application/jwk+json",
            Self::SchemaJSON => "application/schema+json",
        }
    }
    /// True for the compact signed-text kinds, whose payload can carry a credentialStatus.
    pub const fn is_signed_text(self) -> bool {
        matches!(self, Self::VPLdJWT | Self::VCLdJWT)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
