use crate::{OutputArgs, Result};
use did_web_resolver::DIDResolver;
use vp_verifier::VerifierConfig;

/// Resolve a did:web DID and print its DID document as JSON.
#[derive(clap::Parser)]
pub struct DIDResolve {
    /// The DID to resolve, e.g. `did:web:example.com` or `did:web:example.com:user:alice`.
    pub did: String,
    #[command(flatten)]
    pub verifier_config: VerifierConfig,
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl DIDResolve {
    pub async fn handle(self) -> Result<()> {
        anyhow::ensure!(
            self.did.starts_with("did:web:"),
            "only did:web DIDs can be resolved, but got {:?}",
            self.did
        );
        let did_resolver_a = self
            .verifier_config
            .did_resolver(self.verifier_config.http_fetcher()?);
        let did_document = did_resolver_a.resolve_did_document(&self.did).await?;
        tracing::debug!(
            did = ?self.did,
            verification_method_count = did_document.verification_method_v.len(),
            "resolved DID document"
        );
        self.output_args.write_json(&did_document)
    }
}
