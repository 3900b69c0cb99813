use crate::ResolutionRequest;

/// Loosely-typed form of a ResolutionRequest, as it crosses the boundary with validator
/// implementations that tag requests by string.  Convert with `ResolutionRequest::try_from`.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct ResolutionRequestWire {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub id_o: Option<String>,
    #[serde(rename = "content", default, skip_serializing_if = "Option::is_none")]
    pub content_o: Option<Vec<u8>>,
    #[serde(rename = "purpose", default, skip_serializing_if = "Option::is_none")]
    pub purpose_o: Option<String>,
}

impl From<ResolutionRequest> for ResolutionRequestWire {
    fn from(request: ResolutionRequest) -> Self {
        let request_type = request.request_type().to_string();
        let (id_o, content_o, purpose_o) = match request {
            ResolutionRequest::PresentationJWT { content }
            | ResolutionRequest::CredentialJWT { content } => (None, Some(content), None),
            ResolutionRequest::JWK { id } | ResolutionRequest::Schema { id } => {
                (Some(id), None, None)
            }
            ResolutionRequest::StatusListJWT { id, purpose_o } => (Some(id), None, purpose_o),
        };
        Self {
            request_type,
            id_o,
            content_o,
            purpose_o,
        }
    }
}
