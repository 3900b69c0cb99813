/// The `credentialSubject` of a status list credential, i.e. the claim carrying the encoded bitstring
/// for one or more status purposes.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct StatusListSubject {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub id_o: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_o: Option<String>,
    #[serde(rename = "statusPurpose")]
    pub status_purposes: StatusPurposes,
    #[serde(rename = "encodedList")]
    pub encoded_list: String,
}

/// A status list may declare a single purpose or several.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum StatusPurposes {
    One(String),
    Many(Vec<String>),
}

impl StatusPurposes {
    pub fn contains(&self, purpose: &str) -> bool {
        match self {
            Self::One(status_purpose) => status_purpose == purpose,
            Self::Many(status_purpose_v) => status_purpose_v.iter().any(|p| p == purpose),
        }
    }
}
