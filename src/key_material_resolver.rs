use crate::{
    split_jwt, Error, ResolutionRequest, ResolutionRequestWire, ResolutionResponse,
    ResolutionResponseType, Result,
};
use did_web_resolver::{DIDResolver, HTTPFetcher, VerificationMethod};
use std::sync::Arc;

/// Answers the credential validator's requests for key material and referenced documents.  JWT and
/// JWK requests go through the DID resolver (whose caching policy is the caller's choice), and
/// schema and status list requests are plain HTTP fetches.
#[derive(Clone)]
pub struct KeyMaterialResolver {
    did_resolver_a: Arc<dyn DIDResolver>,
    http_fetcher_a: Arc<dyn HTTPFetcher>,
}

impl KeyMaterialResolver {
    pub fn new(did_resolver_a: Arc<dyn DIDResolver>, http_fetcher_a: Arc<dyn HTTPFetcher>) -> Self {
        Self {
            did_resolver_a,
            http_fetcher_a,
        }
    }
    pub fn did_resolver(&self) -> &dyn DIDResolver {
        self.did_resolver_a.as_ref()
    }
    pub async fn resolve(&self, request: &ResolutionRequest) -> Result<ResolutionResponse> {
        tracing::trace!(request_type = request.request_type(), "KeyMaterialResolver::resolve");
        match request {
            ResolutionRequest::PresentationJWT { content }
            | ResolutionRequest::CredentialJWT { content } => self.resolve_jwt_signer(content).await,
            ResolutionRequest::JWK { id } => self.resolve_jwk_with_id(id).await,
            ResolutionRequest::Schema { id } => self.fetch_schema(id).await,
            ResolutionRequest::StatusListJWT { id, purpose_o } => {
                tracing::debug!(?id, ?purpose_o, "fetching status list credential");
                self.fetch_status_list(id).await
            }
        }
    }
    /// Convenience for validators that speak the string-tagged request form.
    pub async fn resolve_wire(&self, wire: ResolutionRequestWire) -> Result<ResolutionResponse> {
        let request = ResolutionRequest::try_from(wire)?;
        self.resolve(&request).await
    }
    async fn resolve_jwt_signer(&self, content: &[u8]) -> Result<ResolutionResponse> {
        let jwt = std::str::from_utf8(content)
            .map_err(|e| Error::MalformedJWT(format!("JWT is not UTF-8: {}", e).into()))?;
        let jwt_parts = split_jwt(jwt)?;
        let kid = jwt_parts
            .header
            .kid_o
            .ok_or_else(|| Error::MalformedJWT("JWT header has no \"kid\"".into()))?;
        let did = did_of(&kid);

        let did_document = self.did_resolver_a.resolve_did_document(did).await?;
        let verification_method_o = did_document.verification_method_with_id(&kid);
        jwk_response(verification_method_o, &kid)
    }
    async fn resolve_jwk_with_id(&self, id: &str) -> Result<ResolutionResponse> {
        let did = did_of(id);
        let did_document = self.did_resolver_a.resolve_did_document(did).await?;
        // Raw id match, kept separate from the kid lookup above.
        let verification_method_o = did_document
            .verification_method_v
            .iter()
            .find(|verification_method| verification_method.id == id);
        jwk_response(verification_method_o, id)
    }
    async fn fetch_schema(&self, url: &str) -> Result<ResolutionResponse> {
        let schema_body = self
            .http_fetcher_a
            .http_get(url)
            .await
            .map_err(Error::FetchFailure)?;
        let schema = serde_json::from_str::<serde_json::Value>(&schema_body).map_err(|e| {
            Error::MalformedSchema(format!("schema at {} is not JSON: {}", url, e).into())
        })?;
        Ok(ResolutionResponse {
            response_type: ResolutionResponseType::Schema,
            content: schema.to_string().into_bytes(),
        })
    }
    async fn fetch_status_list(&self, url: &str) -> Result<ResolutionResponse> {
        let status_list_body = self
            .http_fetcher_a
            .http_get(url)
            .await
            .map_err(Error::FetchFailure)?;
        Ok(ResolutionResponse {
            response_type: ResolutionResponseType::StatusListJWT,
            content: status_list_body.into_bytes(),
        })
    }
}

/// Everything before the '#' of a fragment-qualified key id.
fn did_of(key_id: &str) -> &str {
    key_id.split('#').next().unwrap_or(key_id)
}

fn jwk_response(
    verification_method_o: Option<&VerificationMethod>,
    key_id: &str,
) -> Result<ResolutionResponse> {
    let Some(public_key_jwk) = verification_method_o
        .and_then(|verification_method| verification_method.public_key_jwk_o.as_ref())
    else {
        tracing::warn!(?key_id, "no matching verification method with a publicKeyJwk");
        return Err(Error::KeyNotFound(key_id.to_string().into()));
    };
    Ok(ResolutionResponse {
        response_type: ResolutionResponseType::JWK,
        content: public_key_jwk.to_string().into_bytes(),
    })
}
