use crate::{CredentialStatus, DIDResolve, KeyResolve, Result, StatusListCreate, StatusListGet};

/// Verifiable presentation verifier tool, exposing DID resolution, key resolution, and bitstring
/// status list operations.
#[derive(clap::Parser)]
pub enum Root {
    #[command(subcommand)]
    Credential(Credential),
    #[command(subcommand)]
    DID(DID),
    #[command(subcommand)]
    Key(Key),
    #[command(subcommand)]
    StatusList(StatusList),
}

impl Root {
    pub async fn handle(self) -> Result<()> {
        match self {
            Self::Credential(x) => x.handle().await,
            Self::DID(x) => x.handle().await,
            Self::Key(x) => x.handle().await,
            Self::StatusList(x) => x.handle().await,
        }
    }
}

/// Credential operations.
#[derive(clap::Subcommand)]
pub enum Credential {
    Status(CredentialStatus),
}

impl Credential {
    pub async fn handle(self) -> Result<()> {
        match self {
            Self::Status(x) => x.handle().await,
        }
    }
}

/// did:web DID operations.
#[derive(clap::Subcommand)]
pub enum DID {
    Resolve(DIDResolve),
}

impl DID {
    pub async fn handle(self) -> Result<()> {
        match self {
            Self::Resolve(x) => x.handle().await,
        }
    }
}

/// Key material operations.
#[derive(clap::Subcommand)]
pub enum Key {
    Resolve(KeyResolve),
}

impl Key {
    pub async fn handle(self) -> Result<()> {
        match self {
            Self::Resolve(x) => x.handle().await,
        }
    }
}

/// Bitstring status list operations.
#[derive(clap::Subcommand)]
pub enum StatusList {
    Create(StatusListCreate),
    Get(StatusListGet),
}

impl StatusList {
    pub async fn handle(self) -> Result<()> {
        match self {
            Self::Create(x) => x.handle().await,
            Self::Get(x) => x.handle().await,
        }
    }
}
