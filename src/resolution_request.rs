use crate::{Error, ResolutionRequestWire, Result};

/// A request for key material or a referenced document, as issued by the credential validator
/// while it verifies a presentation or credential.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolutionRequest {
    /// Resolve the JWK that signed the given compact presentation JWT, via its header's `kid`.
    PresentationJWT { content: Vec<u8> },
    /// Resolve the JWK that signed the given compact credential JWT, via its header's `kid`.
    CredentialJWT { content: Vec<u8> },
    /// Resolve the JWK of the verification method with exactly this id.
    JWK { id: String },
    /// Fetch the JSON Schema at this URL.
    Schema { id: String },
    /// Fetch the status list credential at this URL.
    StatusListJWT { id: String, purpose_o: Option<String> },
}

impl ResolutionRequest {
    pub const TYPE_PRESENTATION_JWT: &'static str = "presentation-jwt";
    pub const TYPE_CREDENTIAL_JWT: &'static str = "credential-jwt";
    pub const TYPE_JWK: &'static str = "jwk";
    pub const TYPE_SCHEMA: &'static str = "schema";
    pub const TYPE_STATUS_LIST_JWT: &'static str = "status-list-jwt";

    pub fn request_type(&self) -> &'static str {
        match self {
            Self::PresentationJWT { .. } => Self::TYPE_PRESENTATION_JWT,
            Self::CredentialJWT { .. } => Self::TYPE_CREDENTIAL_JWT,
            Self::JWK { .. } => Self::TYPE_JWK,
            Self::Schema { .. } => Self::TYPE_SCHEMA,
            Self::StatusListJWT { .. } => Self::TYPE_STATUS_LIST_JWT,
        }
    }
}

impl TryFrom<ResolutionRequestWire> for ResolutionRequest {
    type Error = Error;
    fn try_from(wire: ResolutionRequestWire) -> Result<Self> {
        let ResolutionRequestWire {
            request_type,
            id_o,
            content_o,
            purpose_o,
        } = wire;
        let request = match (request_type.as_str(), id_o, content_o) {
            (Self::TYPE_PRESENTATION_JWT, _, Some(content)) => Self::PresentationJWT { content },
            (Self::TYPE_CREDENTIAL_JWT, _, Some(content)) => Self::CredentialJWT { content },
            (Self::TYPE_JWK, Some(id), _) => Self::JWK { id },
            (Self::TYPE_SCHEMA, Some(id), _) => Self::Schema { id },
            (Self::TYPE_STATUS_LIST_JWT, Some(id), _) => Self::StatusListJWT { id, purpose_o },
            (request_type, id_o, content_o) => {
                tracing::warn!(
                    ?request_type,
                    has_id = id_o.is_some(),
                    has_content = content_o.is_some(),
                    "unsupported resolution request"
                );
                return Err(Error::UnsupportedRequest(
                    format!(
                        "type {:?} with id present: {}, content present: {}",
                        request_type,
                        id_o.is_some(),
                        content_o.is_some()
                    )
                    .into(),
                ));
            }
        };
        Ok(request)
    }
}
