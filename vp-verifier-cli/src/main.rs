mod cmd;
mod credential_status;
mod did_resolve;
mod key_resolve;
mod output_args;
mod status_list_create;
mod status_list_get;

pub use crate::{
    credential_status::CredentialStatus,
    did_resolve::DIDResolve,
    key_resolve::KeyResolve,
    output_args::{read_stdin_trimmed, OutputArgs},
    status_list_create::StatusListCreate,
    status_list_get::StatusListGet,
};
pub use anyhow::{Error, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Ignore errors, since there may not be a .env file.
    let _ = dotenvy::dotenv();

    // It's necessary to specify EnvFilter::from_default_env in order to use RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_line_number(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .init();

    use clap::Parser;
    // Note that if the env var RUST_BACKTRACE is set to 1 (or "full"), then the backtrace will be printed
    // to stderr if this returns error.
    cmd::Root::parse().handle().await
}
