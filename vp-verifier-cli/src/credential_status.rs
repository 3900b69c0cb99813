use crate::{read_stdin_trimmed, OutputArgs, Result};
use vp_verifier::VerifierConfig;

/// Read a credential (compact JWT or JSON) from stdin and print whether it is revoked, according to
/// the status list its `credentialStatus` references.  The revocation failure policy decides the
/// answer if the status list can't be fetched or read.
#[derive(clap::Parser)]
pub struct CredentialStatus {
    #[command(flatten)]
    pub verifier_config: VerifierConfig,
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl CredentialStatus {
    pub async fn handle(self) -> Result<()> {
        let credential = read_stdin_trimmed()?;
        anyhow::ensure!(!credential.is_empty(), "expected a credential on stdin");

        let key_material_resolver = self
            .verifier_config
            .key_material_resolver(self.verifier_config.http_fetcher()?);
        let revocation_checker = self.verifier_config.revocation_checker(key_material_resolver);
        let revoked = revocation_checker.check_revocation_status(&credential).await;
        self.output_args
            .write_json(&serde_json::json!({ "revoked": revoked }))
    }
}
