use crate::{OutputArgs, Result};
use vp_verifier::{parse_credential_payload, ResolutionRequest, VerifierConfig};

/// Fetch a status list credential and print whether the status at the given index is set.
/// Unlike revocation checking during verification, failures are reported as errors rather than
/// resolved by the revocation failure policy.
#[derive(clap::Parser)]
pub struct StatusListGet {
    /// URL of the status list credential.
    pub status_list_credential: String,
    /// Position within the status list.
    pub index: usize,
    /// The status purpose to look up.
    #[arg(long, default_value = "revocation")]
    pub purpose: String,
    #[command(flatten)]
    pub verifier_config: VerifierConfig,
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl StatusListGet {
    pub async fn handle(self) -> Result<()> {
        let key_material_resolver = self
            .verifier_config
            .key_material_resolver(self.verifier_config.http_fetcher()?);
        let response = key_material_resolver
            .resolve(&ResolutionRequest::StatusListJWT {
                id: self.status_list_credential.clone(),
                purpose_o: Some(self.purpose.clone()),
            })
            .await?;
        let status_list_claims = parse_credential_payload(response.content_str()?)?;
        let status =
            bitstring_status_list::check_status(&status_list_claims, &self.purpose, self.index)?;
        self.output_args.write_json(&status)
    }
}
