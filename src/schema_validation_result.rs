#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaValidationOutcome {
    Succeeded,
    Failed,
}

/// Conformance of a credential to one of its declared JSON Schemas.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaValidationResult {
    pub validation: SchemaValidationOutcome,
    #[serde(rename = "errors", default, skip_serializing_if = "Option::is_none")]
    pub errors_o: Option<serde_json::Value>,
}

impl SchemaValidationResult {
    pub fn succeeded() -> Self {
        Self {
            validation: SchemaValidationOutcome::Succeeded,
            errors_o: None,
        }
    }
    pub fn failed(errors: serde_json::Value) -> Self {
        Self {
            validation: SchemaValidationOutcome::Failed,
            errors_o: Some(errors),
        }
    }
    pub fn is_success(&self) -> bool {
        self.validation == SchemaValidationOutcome::Succeeded
    }
}
