use std::path::PathBuf;

use solana_sdk::{commitment_config::CommitmentConfig, native_token::LAMPORTS_PER_SOL};

use crate::{
    confirm::RetryPolicy,
    error::{ClientError, ClientResult},
};

pub const DEFAULT_PROGRAM_KEYPAIR_PATH: &str = "target/deploy/program-keypair.json";

const ALCHEMY_DEVNET_URL: &str = "https://solana-devnet.g.alchemy.com/v2";

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    pub program_keypair_path: PathBuf,
    pub airdrop_lamports: u64,
    pub retry: RetryPolicy,
}

impl Config {
    /// Build the config from the process environment, after loading a
    /// `.env` file from the working directory if there is one.
    pub fn from_env() -> ClientResult<Self> {
        dotenv_loaded(dotenvy::dotenv())?;

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `RPC_URL` wins when set; otherwise the endpoint is the hosted devnet
    /// node keyed by `ALCHEMY_KEY`.
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_url = match lookup("RPC_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => {
                let key = lookup("ALCHEMY_KEY")
                    .filter(|key| !key.is_empty())
                    .ok_or(ClientError::MissingEnv("ALCHEMY_KEY"))?;
                format!("{ALCHEMY_DEVNET_URL}/{key}")
            }
        };

        let program_keypair_path = lookup("PROGRAM_KEYPAIR_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM_KEYPAIR_PATH));

        Ok(Self {
            rpc_url,
            commitment: CommitmentConfig::finalized(),
            program_keypair_path,
            airdrop_lamports: LAMPORTS_PER_SOL,
            retry: RetryPolicy::default(),
        })
    }
}

/// A missing `.env` is fine; one that exists but cannot be read or parsed
/// is not.
fn dotenv_loaded<T>(result: Result<T, dotenvy::Error>) -> ClientResult<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
