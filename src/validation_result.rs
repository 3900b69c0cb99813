use crate::SchemaValidationResult;
use std::collections::BTreeMap;

/// What the credential validator reports for one presentation or credential.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ValidationResult {
    /// True iff the signature and structure checked out.
    pub verified: bool,
    /// The validated claims.  For a presentation this carries `verifiableCredential`.
    #[serde(rename = "content", default, skip_serializing_if = "Option::is_none")]
    pub content_o: Option<serde_json::Value>,
    /// Per-schema conformance, keyed by schema id, if schema validation was performed.
    #[serde(rename = "schema", default, skip_serializing_if = "Option::is_none")]
    pub schema_m_o: Option<BTreeMap<String, SchemaValidationResult>>,
    #[serde(rename = "error", default, skip_serializing_if = "Option::is_none")]
    pub error_o: Option<String>,
}

impl ValidationResult {
    pub fn verified(content: serde_json::Value) -> Self {
        Self {
            verified: true,
            content_o: Some(content),
            schema_m_o: None,
            error_o: None,
        }
    }
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            verified: false,
            content_o: None,
            schema_m_o: None,
            error_o: Some(error.into()),
        }
    }
    pub fn with_schema_result(
        mut self,
        schema_id: impl Into<String>,
        schema_validation_result: SchemaValidationResult,
    ) -> Self {
        self.schema_m_o
            .get_or_insert_with(BTreeMap::new)
            .insert(schema_id.into(), schema_validation_result);
        self
    }
    /// The credentials embedded in a presentation's validated content, in order.  A single
    /// non-array `verifiableCredential` counts as a list of one.
    pub fn embedded_credentials(&self) -> Vec<serde_json::Value> {
        let Some(content) = self.content_o.as_ref() else {
            return Vec::new();
        };
        let verifiable_credential_o = content
            .get("verifiableCredential")
            .or_else(|| content.pointer("/vp/verifiableCredential"));
        match verifiable_credential_o {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(serde_json::Value::Array(credential_v)) => credential_v.clone(),
            Some(credential) => vec![credential.clone()],
        }
    }
}
