use crate::MediaType;

/// An embedded credential reduced to the payload and media type handed to the credential validator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizedCredential {
    pub media_type: MediaType,
    pub content: Vec<u8>,
}

impl NormalizedCredential {
    pub const DATA_URI_PREFIX: &'static str = "data:application/vc-ld+jwt;";

    /// A string is taken as compact signed text.  An object whose `id` is a
    /// `data:application/vc-ld+jwt;` URI carries its signed text after the first ';'.  Any other
    /// value is passed on as its JSON serialization.  All three are tagged as signed text.
    pub fn from_embedded(credential: &serde_json::Value) -> Self {
        let content = match credential {
            serde_json::Value::String(compact) => compact.clone(),
            _ => match credential
                .get("id")
                .and_then(serde_json::Value::as_str)
                .filter(|id| id.starts_with(Self::DATA_URI_PREFIX))
            {
                Some(data_uri) => data_uri.split(';').nth(1).unwrap_or_default().to_string(),
                None => credential.to_string(),
            },
        };
        Self {
            media_type: MediaType::VCLdJWT,
            content: content.into_bytes(),
        }
    }
    pub fn content_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}
