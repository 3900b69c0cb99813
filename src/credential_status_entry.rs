use crate::StatusListIndex;

/// One entry of a credential's `credentialStatus`, pointing at a bit in a status list credential.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialStatusEntry {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub id_o: Option<String>,
    #[serde(rename = "type")]
    pub status_type: String,
    pub status_purpose: String,
    /// URL of the status list credential.
    pub status_list_credential: String,
    pub status_list_index: StatusListIndex,
}

impl CredentialStatusEntry {
    pub const BITSTRING_STATUS_LIST_ENTRY: &'static str = "BitstringStatusListEntry";
    pub const REVOCATION: &'static str = "revocation";

    /// True iff the raw `credentialStatus` entry is a BitstringStatusListEntry for the revocation
    /// purpose, which is the only kind evaluated.  Checked before full deserialization, since other
    /// status types needn't have the same fields.
    pub fn is_revocation_entry(entry: &serde_json::Value) -> bool {
        entry.get("type").and_then(serde_json::Value::as_str)
            == Some(Self::BITSTRING_STATUS_LIST_ENTRY)
            && entry.get("statusPurpose").and_then(serde_json::Value::as_str)
                == Some(Self::REVOCATION)
    }
}
