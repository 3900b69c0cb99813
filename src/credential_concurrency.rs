/// How the credentials of one presentation are scheduled.  Results are ordered by credential index
/// either way.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum CredentialConcurrency {
    /// Each credential is fully validated and revocation-checked before the next begins.
    #[default]
    Sequential,
    /// All credentials are validated concurrently.
    Parallel,
}
