/// The JOSE header fields that key resolution cares about.  See RFC 7515.
#[derive(Clone, Debug, Default, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct JWTHeader {
    #[serde(rename = "alg", default, skip_serializing_if = "Option::is_none")]
    pub alg_o: Option<String>,
    /// Fragment-qualified verification method id of the signing key, i.e. `<did>#<fragment>`.
    #[serde(rename = "kid", default, skip_serializing_if = "Option::is_none")]
    pub kid_o: Option<String>,
    #[serde(rename = "typ", default, skip_serializing_if = "Option::is_none")]
    pub typ_o: Option<String>,
}
