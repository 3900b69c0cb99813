use crate::{Error, MediaType, Result};

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ResolutionResponseType {
    #[serde(rename = "jwk")]
    JWK,
    #[serde(rename = "schema")]
    Schema,
    #[serde(rename = "status-list-jwt")]
    StatusListJWT,
}

impl ResolutionResponseType {
    pub fn media_type(self) -> MediaType {
        match self {
            Self::JWK => MediaType::JWKJSON,
            Self::Schema => MediaType::SchemaJSON,
            Self::StatusListJWT => MediaType::VCLdJWT,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ResolutionResponse {
    #[serde(rename = "type")]
    pub response_type: ResolutionResponseType,
    pub content: Vec<u8>,
}

impl ResolutionResponse {
    pub fn content_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.content).map_err(|e| {
            Error::CredentialValidator(
                format!("{:?} response content is not UTF-8: {}", self.response_type, e).into(),
            )
        })
    }
    pub fn content_json(&self) -> Result<serde_json::Value> {
        serde_json::from_slice(&self.content).map_err(|e| {
            Error::CredentialValidator(
                format!("{:?} response content is not JSON: {}", self.response_type, e).into(),
            )
        })
    }
}
