use crate::{Error, JWTHeader, Result};
use base64::Engine;

/// Decoded header and payload of a compact JWT.  The signature is not examined here; checking it
/// is the credential validator's job.
#[derive(Clone, Debug)]
pub struct JWTParts {
    pub header: JWTHeader,
    pub payload: serde_json::Value,
}

/// Split a compact serialization `<header>.<payload>.<signature>` and decode the header and payload.
pub fn split_jwt(jwt: &str) -> Result<JWTParts> {
    JWTParts::try_from(jwt)
}

/// A credential or status list credential is either a compact JWT or a plain JSON object.  Returns
/// the JWT payload in the former case and the object itself in the latter.
pub fn parse_credential_payload(credential: &str) -> Result<serde_json::Value> {
    let credential = credential.trim();
    if credential.starts_with('{') {
        serde_json::from_str(credential).map_err(|e| {
            Error::MalformedJWT(format!("credential is not valid JSON: {}", e).into())
        })
    } else {
        Ok(split_jwt(credential)?.payload)
    }
}

fn decode_part<T: serde::de::DeserializeOwned>(part_base64: &str, part_name: &str) -> Result<T> {
    if part_base64.contains(char::is_whitespace) {
        return Err(Error::MalformedJWT(
            format!("encoded JWT {} contains whitespace", part_name).into(),
        ));
    }
    let part_byte_v = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(part_base64.as_bytes())
        .map_err(|e| {
            Error::MalformedJWT(
                format!("JWT {} is not base64url-encoded: {}", part_name, e).into(),
            )
        })?;
    serde_json::from_slice(&part_byte_v).map_err(|e| {
        Error::MalformedJWT(format!("JWT {} failed to parse as JSON: {}", part_name, e).into())
    })
}

impl TryFrom<&str> for JWTParts {
    type Error = Error;
    fn try_from(jwt: &str) -> Result<Self> {
        let mut split = jwt.trim().split('.');

        let header_base64 = split
            .next()
            .ok_or_else(|| Error::MalformedJWT("JWT missing header".into()))?;
        let payload_base64 = split
            .next()
            .ok_or_else(|| Error::MalformedJWT("JWT missing payload".into()))?;
        split
            .next()
            .ok_or_else(|| Error::MalformedJWT("JWT missing signature".into()))?;
        if split.next().is_some() {
            return Err(Error::MalformedJWT("JWT has too many parts".into()));
        }

        let header = decode_part::<JWTHeader>(header_base64, "header")?;
        let payload = decode_part::<serde_json::Value>(payload_base64, "payload")?;
        Ok(Self { header, payload })
    }
}
