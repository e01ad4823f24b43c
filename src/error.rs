use std::path::PathBuf;

use solana_client::client_error::ClientError as RpcClientError;
use solana_sdk::signature::Signature;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("failed to read program keypair {}: {message}", path.display())]
    KeypairFile { path: PathBuf, message: String },

    #[error("failed to load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("rpc request failed: {0}")]
    Rpc(Box<RpcClientError>),

    #[error("Transaction {0} failed to confirm.")]
    Unconfirmed(Signature),
}

// The rpc error is large enough to bloat every Result it travels in.
impl From<RpcClientError> for ClientError {
    fn from(e: RpcClientError) -> Self {
        ClientError::Rpc(Box::new(e))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
