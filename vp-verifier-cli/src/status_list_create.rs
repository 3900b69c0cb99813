use crate::{OutputArgs, Result};
use bitstring_status_list::Bitstring;

/// Build a bitstring status list with the given positions set, and print it as the
/// `credentialSubject` of a status list credential.  Signing and publishing the credential is up
/// to the issuer.
#[derive(clap::Parser)]
pub struct StatusListCreate {
    /// Number of entries in the status list.  The default is the 16KB minimum that keeps
    /// individual entries from being correlated.
    #[arg(name = "length", short, long, default_value = "131072")]
    pub bit_length: usize,
    /// Comma-separated list of positions whose status is asserted (e.g. revoked).
    #[arg(name = "set", short, long, value_delimiter = ',')]
    pub set_position_v: Vec<usize>,
    /// The purpose this status list serves.
    #[arg(long, default_value = "revocation")]
    pub purpose: String,
    /// Optional id of the status list (typically `<status list credential URL>#list`).
    #[arg(name = "id", long)]
    pub id_o: Option<String>,
    #[command(flatten)]
    pub output_args: OutputArgs,
}

impl StatusListCreate {
    pub async fn handle(self) -> Result<()> {
        let mut bitstring = Bitstring::with_bit_length(self.bit_length)?;
        for &position in self.set_position_v.iter() {
            bitstring.set(position, true)?;
        }
        tracing::debug!(
            bit_length = self.bit_length,
            set_count = self.set_position_v.len(),
            "created status list"
        );

        let mut credential_subject = serde_json::json!({
            "type": "BitstringStatusList",
            "statusPurpose": self.purpose,
            "encodedList": bitstring.encode_bits(),
        });
        if let Some(id) = self.id_o {
            credential_subject["id"] = serde_json::Value::String(id);
        }
        self.output_args.write_json(&credential_subject)
    }
}
