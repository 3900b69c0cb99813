use did_web_resolver::{DIDResolverDirect, HTTPFetcher, HTTPSchemeOverride};
use std::sync::Arc;
use vp_verifier::{
    Error, KeyMaterialResolver, MediaType, ResolutionRequest, ResolutionRequestWire,
    ResolutionResponseType,
};

/// This will run once at load time (i.e. presumably before main function is called).
#[ctor::ctor]
fn overall_init() {
    test_util::ctor_overall_init();
}

const DID: &str = "did:web:example.com";
const DID_DOCUMENT_URL: &str = "https://example.com/.well-known/did.json";
const SCHEMA_URL: &str = "https://example.com/schemas/degree.json";
const STATUS_LIST_URL: &str = "https://example.com/status/3";

fn key_material_resolver_for(http_fetcher_mock: &test_util::HTTPFetcherMock) -> KeyMaterialResolver {
    let http_fetcher_a: Arc<dyn HTTPFetcher> = Arc::new(http_fetcher_mock.clone());
    let did_resolver_direct =
        DIDResolverDirect::new(http_fetcher_a.clone(), HTTPSchemeOverride::new());
    KeyMaterialResolver::new(Arc::new(did_resolver_direct), http_fetcher_a)
}

fn example_http_fetcher_mock() -> test_util::HTTPFetcherMock {
    test_util::HTTPFetcherMock::new()
        .with_body(
            DID_DOCUMENT_URL,
            test_util::did_document_json(DID, &["key-0", "key-1"]),
        )
        .with_body(
            SCHEMA_URL,
            "{\n  \"$schema\": \"https://json-schema.org/draft/2020-12/schema\",\n  \"type\": \"object\"\n}",
        )
        .with_body(STATUS_LIST_URL, "header.payload.signature")
}

#[tokio::test]
async fn test_resolve_jwk_by_id() {
    let http_fetcher_mock = example_http_fetcher_mock();
    let key_material_resolver = key_material_resolver_for(&http_fetcher_mock);

    let response = key_material_resolver
        .resolve(&ResolutionRequest::JWK {
            id: "did:web:example.com#key-1".to_string(),
        })
        .await
        .expect("pass");
    assert_eq!(response.response_type, ResolutionResponseType::JWK);
    assert_eq!(response.response_type.media_type(), MediaType::JWKJSON);
    let public_key_jwk = response.content_json().expect("pass");
    assert_eq!(public_key_jwk["kty"], "EC");
    assert_eq!(public_key_jwk["x"], "key-1");

    for missing_id in [
        "did:web:example.com#key-2",
        "did:web:example.com",
        "did:web:example.com#KEY-1",
    ] {
        match key_material_resolver
            .resolve(&ResolutionRequest::JWK {
                id: missing_id.to_string(),
            })
            .await
        {
            Err(Error::KeyNotFound(key_id)) => assert_eq!(key_id, missing_id),
            other => panic!("expected KeyNotFound for {:?}, got {:?}", missing_id, other),
        }
    }
}

#[tokio::test]
async fn test_resolve_jwt_signer_by_kid() {
    let http_fetcher_mock = example_http_fetcher_mock();
    let key_material_resolver = key_material_resolver_for(&http_fetcher_mock);

    let payload = serde_json::json!({ "iss": DID, "credentialSubject": { "id": "did:web:holder.example" } });
    let jwt = test_util::compact_jwt_with_kid("did:web:example.com#key-0", &payload);
    for request in [
        ResolutionRequest::CredentialJWT {
            content: jwt.clone().into_bytes(),
        },
        ResolutionRequest::PresentationJWT {
            content: jwt.into_bytes(),
        },
    ] {
        let response = key_material_resolver.resolve(&request).await.expect("pass");
        assert_eq!(response.response_type, ResolutionResponseType::JWK);
        assert_eq!(response.content_json().expect("pass")["x"], "key-0");
    }

    let jwt = test_util::compact_jwt_with_kid("did:web:example.com#key-9", &payload);
    assert!(matches!(
        key_material_resolver
            .resolve(&ResolutionRequest::CredentialJWT {
                content: jwt.into_bytes()
            })
            .await,
        Err(Error::KeyNotFound(_))
    ));

    // A JWT header without "kid" can't be resolved.
    let jwt = test_util::compact_jwt(&serde_json::json!({ "alg": "ES256" }), &payload);
    assert!(matches!(
        key_material_resolver
            .resolve(&ResolutionRequest::CredentialJWT {
                content: jwt.into_bytes()
            })
            .await,
        Err(Error::MalformedJWT(_))
    ));
    assert!(matches!(
        key_material_resolver
            .resolve(&ResolutionRequest::CredentialJWT {
                content: b"not-a-jwt".to_vec()
            })
            .await,
        Err(Error::MalformedJWT(_))
    ));

    // An unresolvable DID is a resolution error, not a missing key.
    let jwt = test_util::compact_jwt_with_kid("did:web:unknown.example#key-0", &payload);
    assert!(matches!(
        key_material_resolver
            .resolve(&ResolutionRequest::CredentialJWT {
                content: jwt.into_bytes()
            })
            .await,
        Err(Error::Resolution(
            did_web_resolver::Error::DIDResolutionFailure(_)
        ))
    ));
}

#[tokio::test]
async fn test_resolve_schema_and_status_list() {
    let http_fetcher_mock = example_http_fetcher_mock();
    let key_material_resolver = key_material_resolver_for(&http_fetcher_mock);

    let response = key_material_resolver
        .resolve(&ResolutionRequest::Schema {
            id: SCHEMA_URL.to_string(),
        })
        .await
        .expect("pass");
    assert_eq!(response.response_type, ResolutionResponseType::Schema);
    // Re-serialized, so the whitespace of the served document is gone.
    assert_eq!(
        response.content_str().expect("pass"),
        "{\"$schema\":\"https://json-schema.org/draft/2020-12/schema\",\"type\":\"object\"}"
    );

    let response = key_material_resolver
        .resolve(&ResolutionRequest::StatusListJWT {
            id: STATUS_LIST_URL.to_string(),
            purpose_o: Some("revocation".to_string()),
        })
        .await
        .expect("pass");
    assert_eq!(response.response_type, ResolutionResponseType::StatusListJWT);
    assert_eq!(response.content_str().expect("pass"), "header.payload.signature");

    assert!(matches!(
        key_material_resolver
            .resolve(&ResolutionRequest::Schema {
                id: "https://example.com/missing.json".to_string()
            })
            .await,
        Err(Error::FetchFailure(_))
    ));
    http_fetcher_mock.set_body(SCHEMA_URL, "<html>not json</html>");
    assert!(matches!(
        key_material_resolver
            .resolve(&ResolutionRequest::Schema {
                id: SCHEMA_URL.to_string()
            })
            .await,
        Err(Error::MalformedSchema(_))
    ));
}

#[tokio::test]
async fn test_resolve_wire_requests() {
    let http_fetcher_mock = example_http_fetcher_mock();
    let key_material_resolver = key_material_resolver_for(&http_fetcher_mock);

    let wire = serde_json::from_value::<ResolutionRequestWire>(serde_json::json!({
        "type": "jwk",
        "id": "did:web:example.com#key-0",
    }))
    .expect("pass");
    let response = key_material_resolver.resolve_wire(wire).await.expect("pass");
    assert_eq!(response.content_json().expect("pass")["x"], "key-0");

    for (request_type, id_o, content_o) in [
        ("application/octet-stream", Some("did:web:example.com#key-0"), None),
        ("jwk", None, None),
        ("schema", None, Some(b"{}".to_vec())),
        ("credential-jwt", Some("did:web:example.com#key-0"), None),
    ] {
        let wire = ResolutionRequestWire {
            request_type: request_type.to_string(),
            id_o: id_o.map(str::to_string),
            content_o,
            purpose_o: None,
        };
        assert!(
            matches!(
                key_material_resolver.resolve_wire(wire).await,
                Err(Error::UnsupportedRequest(_))
            ),
            "expected {:?} to be unsupported",
            request_type
        );
    }
    assert_eq!(http_fetcher_mock.total_request_count(), 1);
}

#[test]
fn test_wire_conversion() {
    let request = ResolutionRequest::StatusListJWT {
        id: STATUS_LIST_URL.to_string(),
        purpose_o: Some("revocation".to_string()),
    };
    let wire = ResolutionRequestWire::from(request.clone());
    assert_eq!(wire.request_type, "status-list-jwt");
    assert_eq!(
        serde_json::to_value(&wire).expect("pass"),
        serde_json::json!({ "type": "status-list-jwt", "id": STATUS_LIST_URL, "purpose": "revocation" })
    );
    assert_eq!(ResolutionRequest::try_from(wire).expect("pass"), request);
}
