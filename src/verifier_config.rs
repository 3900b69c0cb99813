use crate::{
    CredentialConcurrency, CredentialValidator, KeyMaterialResolver, PresentationVerifier, Result,
    RevocationChecker, RevocationFailurePolicy,
};
use did_web_resolver::{
    DIDDocCacheMemory, DIDResolver, DIDResolverCached, DIDResolverDirect, HTTPFetcher,
    HTTPFetcherReqwest, HTTPSchemeOverride,
};
use std::{sync::Arc, time::Duration};

/// Settings for assembling a PresentationVerifier and its collaborators.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct VerifierConfig {
    /// Timeout in seconds for each HTTP fetch (DID documents, schemas, status lists).  0 means no
    /// timeout.
    #[cfg_attr(
        feature = "clap",
        arg(
            name = "http-timeout",
            env = "VP_VERIFIER_HTTP_TIMEOUT",
            long,
            value_name = "SECONDS",
            default_value = "30"
        )
    )]
    pub http_timeout_seconds: u64,
    /// Time-to-live in seconds of cached DID documents.  If unspecified, DID documents are cached in
    /// a process-wide cache until explicitly invalidated.
    #[cfg_attr(
        feature = "clap",
        arg(
            name = "did-cache-ttl",
            env = "VP_VERIFIER_DID_CACHE_TTL",
            long,
            value_name = "SECONDS"
        )
    )]
    pub did_cache_ttl_seconds_o: Option<u64>,
    /// Resolve every DID afresh instead of caching DID documents.
    #[cfg_attr(
        feature = "clap",
        arg(name = "no-did-cache", env = "VP_VERIFIER_NO_DID_CACHE", long)
    )]
    pub disable_did_cache: bool,
    /// What a revocation check concludes if the status list can't be fetched or read.
    #[cfg_attr(
        feature = "clap",
        arg(
            name = "revocation-failure-policy",
            env = "VP_VERIFIER_REVOCATION_FAILURE_POLICY",
            long,
            value_enum,
            default_value = "fail-open"
        )
    )]
    pub revocation_failure_policy: RevocationFailurePolicy,
    /// Whether the credentials of a presentation are verified one at a time or concurrently.
    #[cfg_attr(
        feature = "clap",
        arg(
            name = "credential-concurrency",
            env = "VP_VERIFIER_CREDENTIAL_CONCURRENCY",
            long,
            value_enum,
            default_value = "sequential"
        )
    )]
    pub credential_concurrency: CredentialConcurrency,
    /// Optionally specify a comma-separated list of `hostname=scheme` pairs defining the scheme to
    /// use for each of the specified hosts.  did:web resolution uses "https" for everything by
    /// default; "http" should only be used for testing and development.
    #[cfg_attr(
        feature = "clap",
        arg(
            name = "http-scheme-override",
            env = "VP_VERIFIER_HTTP_SCHEME_OVERRIDE",
            long,
            default_value = "",
            value_parser = HTTPSchemeOverride::parse_from_comma_separated_pairs,
        )
    )]
    pub http_scheme_override: HTTPSchemeOverride,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            http_timeout_seconds: 30,
            did_cache_ttl_seconds_o: None,
            disable_did_cache: false,
            revocation_failure_policy: RevocationFailurePolicy::default(),
            credential_concurrency: CredentialConcurrency::default(),
            http_scheme_override: HTTPSchemeOverride::default(),
        }
    }
}

impl VerifierConfig {
    pub fn http_timeout_o(&self) -> Option<Duration> {
        (self.http_timeout_seconds > 0).then(|| Duration::from_secs(self.http_timeout_seconds))
    }
    pub fn did_cache_ttl_o(&self) -> Option<Duration> {
        self.did_cache_ttl_seconds_o.map(Duration::from_secs)
    }
    /// A reqwest-backed HTTPFetcher with the configured timeout.
    pub fn http_fetcher(&self) -> Result<Arc<dyn HTTPFetcher>> {
        Ok(Arc::new(HTTPFetcherReqwest::new(self.http_timeout_o())?))
    }
    pub fn did_resolver(&self, http_fetcher_a: Arc<dyn HTTPFetcher>) -> Arc<dyn DIDResolver> {
        let did_resolver_direct =
            DIDResolverDirect::new(http_fetcher_a, self.http_scheme_override.clone());
        if self.disable_did_cache {
            tracing::debug!("DID document cache disabled");
            return Arc::new(did_resolver_direct);
        }
        let did_doc_cache_memory = match self.did_cache_ttl_o() {
            Some(ttl) => DIDDocCacheMemory::new(Some(ttl)),
            None => DIDDocCacheMemory::process_wide(),
        };
        Arc::new(DIDResolverCached::new(
            Arc::new(did_resolver_direct),
            Arc::new(did_doc_cache_memory),
        ))
    }
    pub fn key_material_resolver(
        &self,
        http_fetcher_a: Arc<dyn HTTPFetcher>,
    ) -> KeyMaterialResolver {
        KeyMaterialResolver::new(self.did_resolver(http_fetcher_a.clone()), http_fetcher_a)
    }
    pub fn revocation_checker(
        &self,
        key_material_resolver: KeyMaterialResolver,
    ) -> RevocationChecker {
        RevocationChecker::new(key_material_resolver, self.revocation_failure_policy)
    }
    /// A PresentationVerifier that fetches over HTTP with reqwest.
    pub fn presentation_verifier(
        &self,
        credential_validator_a: Arc<dyn CredentialValidator>,
    ) -> Result<PresentationVerifier> {
        let http_fetcher_a = self.http_fetcher()?;
        Ok(self.presentation_verifier_with_http_fetcher(credential_validator_a, http_fetcher_a))
    }
    pub fn presentation_verifier_with_http_fetcher(
        &self,
        credential_validator_a: Arc<dyn CredentialValidator>,
        http_fetcher_a: Arc<dyn HTTPFetcher>,
    ) -> PresentationVerifier {
        PresentationVerifier::new(
            credential_validator_a,
            self.key_material_resolver(http_fetcher_a),
            self.revocation_failure_policy,
        )
        .with_credential_concurrency(self.credential_concurrency)
    }
}
