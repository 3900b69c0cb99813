use did_web_resolver::{
    DIDDocCache, DIDDocCacheMemory, DIDResolver, DIDResolverCached, DIDResolverDirect, DIDWeb,
    Error, HTTPFetcher, HTTPFetcherReqwest, HTTPSchemeOverride,
};
use std::{sync::Arc, time::Duration};

/// This will run once at load time (i.e. presumably before main function is called).
#[ctor::ctor]
fn overall_init() {
    test_util::ctor_overall_init();
}

const ISSUER_DID: &str = "did:web:issuer.example";
const ISSUER_DID_DOCUMENT_URL: &str = "https://issuer.example/.well-known/did.json";

fn issuer_http_fetcher_mock() -> test_util::HTTPFetcherMock {
    test_util::HTTPFetcherMock::new().with_body(
        ISSUER_DID_DOCUMENT_URL,
        test_util::did_document_json(ISSUER_DID, &["key-1", "key-2"]),
    )
}

fn cached_resolver(
    http_fetcher_mock: &test_util::HTTPFetcherMock,
    ttl_o: Option<Duration>,
) -> DIDResolverCached {
    let did_resolver_direct = DIDResolverDirect::new(
        Arc::new(http_fetcher_mock.clone()),
        HTTPSchemeOverride::new(),
    );
    DIDResolverCached::new(
        Arc::new(did_resolver_direct),
        Arc::new(DIDDocCacheMemory::new(ttl_o)),
    )
}

#[test]
fn test_did_web_resolution_url() {
    let no_override = HTTPSchemeOverride::new();
    for (did, expected_url) in [
        (
            "did:web:example.com",
            "https://example.com/.well-known/did.json",
        ),
        (
            "did:web:example.com:user:alice",
            "https://example.com/user/alice/did.json",
        ),
        (
            "did:web:localhost%3A8080",
            "https://localhost:8080/.well-known/did.json",
        ),
    ] {
        let did_web = DIDWeb::try_from(did).expect("pass");
        assert_eq!(did_web.resolution_url(&no_override), expected_url);
        assert_eq!(did_web.to_string(), did);
    }

    let http_scheme_override =
        HTTPSchemeOverride::parse_from_comma_separated_pairs("localhost=http").expect("pass");
    let did_web = DIDWeb::try_from("did:web:localhost%3A8080:u:bob").expect("pass");
    assert_eq!(did_web.host(), "localhost:8080");
    assert_eq!(did_web.path_segments(), &["u".to_string(), "bob".to_string()]);
    assert_eq!(
        did_web.resolution_url(&http_scheme_override),
        "http://localhost:8080/u/bob/did.json"
    );
}

#[test]
fn test_did_web_parse_failures() {
    assert!(matches!(
        DIDWeb::try_from("did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK"),
        Err(Error::UnsupportedDIDMethod(_))
    ));
    for malformed_did in [
        "web:example.com",
        "did:web",
        "did:web:",
        "did:web:example.com#key-1",
        "did:web:example.com::alice",
    ] {
        assert!(
            matches!(DIDWeb::try_from(malformed_did), Err(Error::MalformedDID(_))),
            "expected {:?} to be rejected",
            malformed_did
        );
    }
}

#[test]
fn test_http_scheme_override_parse() {
    let http_scheme_override =
        HTTPSchemeOverride::parse_from_comma_separated_pairs(" localhost=http , vdr.example=https ")
            .expect("pass");
    assert_eq!(
        http_scheme_override.determine_http_scheme_for_host("localhost:3000"),
        "http"
    );
    assert_eq!(
        http_scheme_override.determine_http_scheme_for_host("vdr.example"),
        "https"
    );
    assert_eq!(
        http_scheme_override.determine_http_scheme_for_host("other.example"),
        "https"
    );
    assert!(HTTPSchemeOverride::parse_from_comma_separated_pairs("")
        .expect("pass")
        .is_empty());
    assert!(HTTPSchemeOverride::parse_from_comma_separated_pairs("localhost").is_err());
    assert!(HTTPSchemeOverride::parse_from_comma_separated_pairs("localhost=ftp").is_err());
    assert!(
        HTTPSchemeOverride::parse_from_comma_separated_pairs("localhost=http,localhost=https")
            .is_err()
    );
}

#[tokio::test]
async fn test_direct_resolver_fetches_every_time() {
    let http_fetcher_mock = issuer_http_fetcher_mock();
    let did_resolver_direct = DIDResolverDirect::new(
        Arc::new(http_fetcher_mock.clone()),
        HTTPSchemeOverride::new(),
    );

    let did_document = did_resolver_direct
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    assert_eq!(did_document.id_o.as_deref(), Some(ISSUER_DID));
    assert_eq!(did_document.verification_method_v.len(), 2);
    assert!(did_document
        .verification_method_with_id("did:web:issuer.example#key-2")
        .is_some());
    assert!(did_document.verification_method_with_id("#key-2").is_none());

    did_resolver_direct
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    assert_eq!(http_fetcher_mock.request_count(ISSUER_DID_DOCUMENT_URL), 2);
}

#[tokio::test]
async fn test_direct_resolver_failures() {
    let http_fetcher_mock = test_util::HTTPFetcherMock::new()
        .with_body("https://garbage.example/.well-known/did.json", "{not json");
    let did_resolver_direct =
        DIDResolverDirect::new(Arc::new(http_fetcher_mock), HTTPSchemeOverride::new());

    assert!(matches!(
        did_resolver_direct
            .resolve_did_document("did:web:missing.example")
            .await,
        Err(Error::DIDResolutionFailure(_))
    ));
    assert!(matches!(
        did_resolver_direct
            .resolve_did_document("did:web:garbage.example")
            .await,
        Err(Error::MalformedDIDDocument(_))
    ));
    assert!(matches!(
        did_resolver_direct
            .resolve_did_document("did:example:123")
            .await,
        Err(Error::UnsupportedDIDMethod(_))
    ));
}

#[tokio::test]
async fn test_resolution_result_wrapper_is_accepted() {
    let did_document_json = test_util::did_document_json(ISSUER_DID, &["key-1"]);
    let wrapped = format!(
        "{{\"didDocument\":{},\"didDocumentMetadata\":{{}}}}",
        did_document_json
    );
    let did_document = did_web_resolver::parse_did_document(&wrapped).expect("pass");
    assert_eq!(did_document.verification_method_v.len(), 1);
    assert_eq!(did_document.verification_method_v[0].did(), ISSUER_DID);
}

#[tokio::test]
async fn test_cached_resolver_fetches_once() {
    let http_fetcher_mock = issuer_http_fetcher_mock();
    let did_resolver_cached = cached_resolver(&http_fetcher_mock, None);

    let first = did_resolver_cached
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    let second = did_resolver_cached
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    assert_eq!(first, second);
    assert_eq!(http_fetcher_mock.request_count(ISSUER_DID_DOCUMENT_URL), 1);

    // Failures are not cached.
    assert!(did_resolver_cached
        .resolve_did_document("did:web:missing.example")
        .await
        .is_err());
    assert!(did_resolver_cached
        .resolve_did_document("did:web:missing.example")
        .await
        .is_err());
    assert_eq!(
        http_fetcher_mock.request_count("https://missing.example/.well-known/did.json"),
        2
    );
}

#[tokio::test]
async fn test_cached_resolver_invalidate() {
    let http_fetcher_mock = issuer_http_fetcher_mock();
    let did_resolver_cached = cached_resolver(&http_fetcher_mock, None);

    let did_document = did_resolver_cached
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    assert_eq!(did_document.verification_method_v.len(), 2);

    // Key rotation on the issuer's side only becomes visible after invalidation.
    http_fetcher_mock.set_body(
        ISSUER_DID_DOCUMENT_URL,
        test_util::did_document_json(ISSUER_DID, &["key-3"]),
    );
    let did_document = did_resolver_cached
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    assert_eq!(did_document.verification_method_v.len(), 2);

    did_resolver_cached.invalidate(ISSUER_DID).await.expect("pass");
    let did_document = did_resolver_cached
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    assert_eq!(did_document.verification_method_v.len(), 1);
    assert_eq!(http_fetcher_mock.request_count(ISSUER_DID_DOCUMENT_URL), 2);
}

#[tokio::test]
async fn test_cached_resolver_ttl() {
    let http_fetcher_mock = issuer_http_fetcher_mock();
    let did_resolver_cached = cached_resolver(&http_fetcher_mock, Some(Duration::ZERO));

    for _ in 0..3 {
        did_resolver_cached
            .resolve_did_document(ISSUER_DID)
            .await
            .expect("pass");
    }
    assert_eq!(http_fetcher_mock.request_count(ISSUER_DID_DOCUMENT_URL), 3);

    let http_fetcher_mock = issuer_http_fetcher_mock();
    let did_resolver_cached =
        cached_resolver(&http_fetcher_mock, Some(Duration::from_millis(50)));
    did_resolver_cached
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    did_resolver_cached
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    assert_eq!(http_fetcher_mock.request_count(ISSUER_DID_DOCUMENT_URL), 1);
    tokio::time::sleep(Duration::from_millis(80)).await;
    did_resolver_cached
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    assert_eq!(http_fetcher_mock.request_count(ISSUER_DID_DOCUMENT_URL), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cached_resolver_single_flight() {
    let http_fetcher_mock = issuer_http_fetcher_mock().with_delay(Duration::from_millis(100));
    let did_resolver_cached = cached_resolver(&http_fetcher_mock, None);

    let resolution_v = futures::future::join_all((0..8).map(|_| {
        let did_resolver_cached = did_resolver_cached.clone();
        tokio::spawn(async move { did_resolver_cached.resolve_did_document(ISSUER_DID).await })
    }))
    .await;
    for resolution in resolution_v {
        let did_document = resolution.expect("pass").expect("pass");
        assert_eq!(did_document.id_o.as_deref(), Some(ISSUER_DID));
    }
    assert_eq!(http_fetcher_mock.request_count(ISSUER_DID_DOCUMENT_URL), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cached_resolver_single_flight_shares_failure() {
    let http_fetcher_mock = test_util::HTTPFetcherMock::new().with_delay(Duration::from_millis(100));
    let did_resolver_cached = cached_resolver(&http_fetcher_mock, None);

    let start = std::time::Instant::now();
    let resolution_v = futures::future::join_all((0..8).map(|_| {
        let did_resolver_cached = did_resolver_cached.clone();
        tokio::spawn(async move { did_resolver_cached.resolve_did_document(ISSUER_DID).await })
    }))
    .await;
    let elapsed = start.elapsed();
    for resolution in resolution_v {
        assert!(matches!(
            resolution.expect("pass"),
            Err(Error::DIDResolutionFailure(_))
        ));
    }
    assert_eq!(http_fetcher_mock.request_count(ISSUER_DID_DOCUMENT_URL), 1);
    assert!(elapsed < Duration::from_millis(500), "elapsed: {:?}", elapsed);
    assert_eq!(did_resolver_cached.in_flight_resolution_count(), 0);

    // The failure was shared, not cached.
    http_fetcher_mock.set_body(
        ISSUER_DID_DOCUMENT_URL,
        test_util::did_document_json(ISSUER_DID, &["key-1"]),
    );
    did_resolver_cached
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    assert_eq!(http_fetcher_mock.request_count(ISSUER_DID_DOCUMENT_URL), 2);
}

#[tokio::test]
async fn test_cached_resolver_dropped_resolution_is_released() {
    let http_fetcher_mock = test_util::HTTPFetcherMock::new().with_delay(Duration::from_millis(100));
    let did_resolver_cached = cached_resolver(&http_fetcher_mock, None);

    let timeout_r = tokio::time::timeout(
        Duration::from_millis(10),
        did_resolver_cached.resolve_did_document(ISSUER_DID),
    )
    .await;
    assert!(timeout_r.is_err());
    assert_eq!(did_resolver_cached.in_flight_resolution_count(), 0);

    // A fresh resolution runs, rather than resuming the abandoned one (which saw no body).
    http_fetcher_mock.set_body(
        ISSUER_DID_DOCUMENT_URL,
        test_util::did_document_json(ISSUER_DID, &["key-1"]),
    );
    did_resolver_cached
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    assert_eq!(http_fetcher_mock.request_count(ISSUER_DID_DOCUMENT_URL), 2);
}

#[tokio::test]
async fn test_http_fetcher_reqwest_timeout() {
    // Accepts connections and never responds.
    let tcp_listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("pass");
    let local_addr = tcp_listener.local_addr().expect("pass");
    let accept_task = tokio::spawn(async move {
        let mut tcp_stream_v = Vec::new();
        while let Ok((tcp_stream, _)) = tcp_listener.accept().await {
            tcp_stream_v.push(tcp_stream);
        }
    });

    let http_fetcher_reqwest =
        HTTPFetcherReqwest::new(Some(Duration::from_millis(200))).expect("pass");
    let url = format!("http://{}/.well-known/did.json", local_addr);
    let start = std::time::Instant::now();
    let http_error = http_fetcher_reqwest
        .http_get(&url)
        .await
        .expect_err("pass");
    assert_eq!(http_error.status_code, reqwest::StatusCode::GATEWAY_TIMEOUT);
    assert!(start.elapsed() < Duration::from_secs(5));

    accept_task.abort();
}

#[tokio::test]
#[serial_test::serial]
async fn test_process_wide_cache_is_shared() {
    let did_doc_cache_memory = DIDDocCacheMemory::process_wide();
    did_doc_cache_memory.clear().await.expect("pass");

    let http_fetcher_mock = issuer_http_fetcher_mock();
    let make_resolver = || {
        DIDResolverCached::new(
            Arc::new(DIDResolverDirect::new(
                Arc::new(http_fetcher_mock.clone()),
                HTTPSchemeOverride::new(),
            )),
            Arc::new(DIDDocCacheMemory::process_wide()),
        )
    };

    make_resolver()
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    make_resolver()
        .resolve_did_document(ISSUER_DID)
        .await
        .expect("pass");
    assert_eq!(http_fetcher_mock.request_count(ISSUER_DID_DOCUMENT_URL), 1);
    assert_eq!(did_doc_cache_memory.len().expect("pass"), 1);

    did_doc_cache_memory.clear().await.expect("pass");
    assert!(did_doc_cache_memory.is_empty().expect("pass"));
}
