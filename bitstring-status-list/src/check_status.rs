use crate::{Bitstring, Error, Result, StatusListSubject};

/// Determine whether the bit at `position` is set in the status list of the given status list
/// credential claims whose declared purpose is `purpose`.  A set bit means the status is asserted
/// (e.g. revoked, for purpose "revocation").
pub fn check_status(
    status_list_claims: &serde_json::Value,
    purpose: &str,
    position: usize,
) -> Result<bool> {
    let status_list_subject = find_status_list_subject(status_list_claims, purpose)?;
    let bitstring = Bitstring::from_encoded_list(&status_list_subject.encoded_list)?;
    tracing::trace!(
        ?purpose,
        ?position,
        bit_length = bitstring.bit_length(),
        "checking status list bit"
    );
    bitstring.get(position)
}

/// Find the status list subject matching `purpose`.  The subject is looked for at `credentialSubject`
/// (JSON credentials) and at `vc.credentialSubject` (JWT claims), and may be a single object or an array.
pub fn find_status_list_subject(
    status_list_claims: &serde_json::Value,
    purpose: &str,
) -> Result<StatusListSubject> {
    let credential_subject = status_list_claims
        .get("credentialSubject")
        .or_else(|| {
            status_list_claims
                .get("vc")
                .and_then(|vc| vc.get("credentialSubject"))
        })
        .ok_or(Error::MalformedClaims(
            "status list credential has no credentialSubject".into(),
        ))?;

    let candidate_v = match credential_subject {
        serde_json::Value::Array(candidate_v) => candidate_v.iter().collect::<Vec<_>>(),
        serde_json::Value::Object(_) => vec![credential_subject],
        _ => {
            return Err(Error::MalformedClaims(
                "credentialSubject must be an object or an array".into(),
            ));
        }
    };

    for candidate in candidate_v {
        match serde_json::from_value::<StatusListSubject>(candidate.clone()) {
            Ok(status_list_subject) if status_list_subject.status_purposes.contains(purpose) => {
                return Ok(status_list_subject);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(?e, "skipping credentialSubject that is not a status list");
            }
        }
    }
    Err(Error::PurposeNotFound(purpose.to_string()))
}
