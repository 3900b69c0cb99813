/// What a revocation check concludes when the status list can't be fetched, decoded, or read.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum RevocationFailurePolicy {
    /// Treat the credential as not revoked.
    #[default]
    FailOpen,
    /// Treat the credential as revoked.
    FailClosed,
}

impl RevocationFailurePolicy {
    pub fn revoked_on_failure(self) -> bool {
        match self {
            Self::FailOpen => false,
            Self::FailClosed => true,
        }
    }
}
