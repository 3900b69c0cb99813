use crate::{OutputArgs, Result};
use vp_verifier::{ResolutionRequest, VerifierConfig};

/// Resolve the public key JWK of a verification method, given its fully qualified id
/// (`<did>#<fragment>`), and print it.
#[derive(clap::Parser)]
pub struct KeyResolve {
    /// Verification method id, e.g. `did:web:example.com#key-1`.  It must match the id in the DID
    /// document exactly.
    pub key_id: String,
    #[command(flatten)]
    pub verifier_config: VerifierConfig,
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl KeyResolve {
    pub async fn handle(self) -> Result<()> {
        anyhow::ensure!(
            self.key_id.contains('#'),
            "key id {:?} has no fragment; expected the form `<did>#<fragment>`",
            self.key_id
        );
        let key_material_resolver = self
            .verifier_config
            .key_material_resolver(self.verifier_config.http_fetcher()?);
        let response = key_material_resolver
            .resolve(&ResolutionRequest::JWK { id: self.key_id })
            .await?;
        self.output_args.write_json(&response.content_json()?)
    }
}
