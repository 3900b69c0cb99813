mod http_fetcher_mock;

pub use crate::http_fetcher_mock::HTTPFetcherMock;

use base64::Engine;

/// Meant to be called from a `#[ctor::ctor]` function in each test binary.
pub fn ctor_overall_init() {
    // Ignore errors, since there may not be a .env file (e.g. in docker image)
    let _ = dotenvy::dotenv();

    // It's necessary to specify EnvFilter::from_default_env in order to use RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_line_number(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();
}

/// Produce a compact serialization `<base64url(header)>.<base64url(payload)>.<base64url(signature)>`.
/// The signature is a fixed placeholder; nothing in these tests checks it.
pub fn compact_jwt(header: &serde_json::Value, payload: &serde_json::Value) -> String {
    let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
    format!(
        "{}.{}.{}",
        engine.encode(header.to_string()),
        engine.encode(payload.to_string()),
        engine.encode(b"placeholder-signature")
    )
}

/// A compact JWT whose header names the given key id.
pub fn compact_jwt_with_kid(kid: &str, payload: &serde_json::Value) -> String {
    compact_jwt(
        &serde_json::json!({ "alg": "ES256", "typ": "vc-ld+jwt", "kid": kid }),
        payload,
    )
}

/// A DID document for `did` with one JsonWebKey verification method per fragment.  Each key's
/// `x` coordinate is the fragment, which makes the returned JWKs distinguishable in assertions.
pub fn did_document_json(did: &str, key_fragment_v: &[&str]) -> String {
    let verification_method_v = key_fragment_v
        .iter()
        .map(|key_fragment| {
            serde_json::json!({
                "id": format!("{}#{}", did, key_fragment),
                "type": "JsonWebKey",
                "controller": did,
                "publicKeyJwk": {
                    "kty": "EC",
                    "crv": "P-256",
                    "x": key_fragment,
                    "y": "y-coordinate",
                },
            })
        })
        .collect::<Vec<_>>();
    serde_json::json!({
        "@context": ["https://www.w3.org/ns/did/v1"],
        "id": did,
        "verificationMethod": verification_method_v,
    })
    .to_string()
}

/// A status list credential payload whose `encodedList` is the given base64 text.
pub fn status_list_credential_payload(purpose: &str, encoded_list: &str) -> serde_json::Value {
    serde_json::json!({
        "@context": ["https://www.w3.org/ns/credentials/v2"],
        "type": ["VerifiableCredential", "BitstringStatusListCredential"],
        "issuer": "did:web:issuer.example",
        "credentialSubject": {
            "id": "https://issuer.example/status/1#list",
            "type": "BitstringStatusList",
            "statusPurpose": purpose,
            "encodedList": encoded_list,
        },
    })
}
