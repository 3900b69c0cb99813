/// A presentation as handed to PresentationVerifier::validate: either its compact signed text or a
/// structured JSON object.
#[derive(Clone, Debug, PartialEq)]
pub enum PresentationInput {
    Compact(String),
    Object(serde_json::Value),
}

impl PresentationInput {
    /// The byte payload passed to the credential validator.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Compact(compact) => compact.as_bytes().to_vec(),
            Self::Object(object) => object.to_string().into_bytes(),
        }
    }
}

impl From<String> for PresentationInput {
    fn from(compact: String) -> Self {
        Self::Compact(compact)
    }
}

impl From<&str> for PresentationInput {
    fn from(compact: &str) -> Self {
        Self::Compact(compact.to_string())
    }
}

impl From<serde_json::Value> for PresentationInput {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(compact) => Self::Compact(compact),
            object => Self::Object(object),
        }
    }
}
