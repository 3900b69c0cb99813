use crate::{
    parse_credential_payload, CredentialStatusEntry, Error, KeyMaterialResolver, ResolutionRequest,
    Result, RevocationFailurePolicy,
};

/// Determines whether credentials have been revoked, by looking up their bit in the bitstring
/// status list credential that their `credentialStatus` references.
///
/// Failures while fetching or reading a status list never propagate; they are resolved to a
/// revoked/not-revoked answer by the configured RevocationFailurePolicy.
#[derive(Clone)]
pub struct RevocationChecker {
    key_material_resolver: KeyMaterialResolver,
    revocation_failure_policy: RevocationFailurePolicy,
}

impl RevocationChecker {
    pub fn new(
        key_material_resolver: KeyMaterialResolver,
        revocation_failure_policy: RevocationFailurePolicy,
    ) -> Self {
        Self {
            key_material_resolver,
            revocation_failure_policy,
        }
    }
    pub fn revocation_failure_policy(&self) -> RevocationFailurePolicy {
        self.revocation_failure_policy
    }
    /// Returns the bit at `position` in the status list whose purpose is `purpose`.  If the claims
    /// have no such list, or it can't be decoded, or `position` is out of its range, the failure
    /// policy decides.
    pub fn check_status(
        &self,
        status_list_claims: &serde_json::Value,
        purpose: &str,
        position: usize,
    ) -> bool {
        match bitstring_status_list::check_status(status_list_claims, purpose, position) {
            Ok(status) => status,
            Err(err) => self.on_failure(&Error::from(err)),
        }
    }
    /// `credential` is the credential text, either a compact JWT or a JSON object.  Returns false
    /// if it has no `credentialStatus`, and also for status entries other than revocation
    /// BitstringStatusListEntry ones.
    pub async fn check_revocation_status(&self, credential: &str) -> bool {
        match parse_credential_payload(credential) {
            Ok(credential_payload) => {
                self.check_revocation_status_of_payload(&credential_payload)
                    .await
            }
            Err(err) => {
                // Without a payload there is no credentialStatus to evaluate.
                tracing::warn!(?err, "could not parse credential payload for revocation check");
                false
            }
        }
    }
    /// As `check_revocation_status`, for an already-decoded credential payload.  `credentialStatus`
    /// may be a single entry or an array of entries; the credential is revoked if any revocation
    /// entry reports so.
    pub async fn check_revocation_status_of_payload(
        &self,
        credential_payload: &serde_json::Value,
    ) -> bool {
        let credential_status_o = credential_payload
            .get("credentialStatus")
            .or_else(|| credential_payload.pointer("/vc/credentialStatus"));
        let entry_v = match credential_status_o {
            None | Some(serde_json::Value::Null) => {
                tracing::debug!("credential has no status information");
                return false;
            }
            Some(serde_json::Value::Array(entry_v)) => entry_v.iter().collect::<Vec<_>>(),
            Some(entry) => vec![entry],
        };

        for entry in entry_v {
            if !CredentialStatusEntry::is_revocation_entry(entry) {
                tracing::debug!(?entry, "skipping unsupported credential status entry");
                continue;
            }
            let revoked = match self.check_revocation_entry(entry).await {
                Ok(revoked) => revoked,
                Err(err) => self.on_failure(&err),
            };
            if revoked {
                tracing::info!(?entry, "credential is revoked");
                return true;
            }
        }
        false
    }
    async fn check_revocation_entry(&self, entry: &serde_json::Value) -> Result<bool> {
        let credential_status_entry =
            serde_json::from_value::<CredentialStatusEntry>(entry.clone()).map_err(|e| {
                Error::RevocationCheck(format!("malformed credential status entry: {}", e).into())
            })?;
        let position = credential_status_entry.status_list_index.position()?;

        let response = self
            .key_material_resolver
            .resolve(&ResolutionRequest::StatusListJWT {
                id: credential_status_entry.status_list_credential.clone(),
                purpose_o: Some(credential_status_entry.status_purpose.clone()),
            })
            .await?;
        let status_list_claims = parse_credential_payload(response.content_str()?)?;

        let revoked = bitstring_status_list::check_status(
            &status_list_claims,
            CredentialStatusEntry::REVOCATION,
            position,
        )?;
        tracing::debug!(
            status_list_credential = ?credential_status_entry.status_list_credential,
            position,
            revoked,
            "checked status list"
        );
        Ok(revoked)
    }
    fn on_failure(&self, err: &Error) -> bool {
        let revoked = self.revocation_failure_policy.revoked_on_failure();
        tracing::warn!(
            ?err,
            revocation_failure_policy = ?self.revocation_failure_policy,
            revoked,
            "revocation check failed"
        );
        revoked
    }
}
