use std::process::ExitCode;

use anyhow::{Context, Result};

use solana_client::nonblocking::rpc_client::RpcClient;

use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_solana_client::{load_program_keypair, run, Config};

async fn ping() -> Result<()> {
    let config = Config::from_env()?;

    // Fail on a bad keypair before touching the network.
    let program_keypair = load_program_keypair(&config.program_keypair_path)
        .context("cannot determine program id")?;

    let client = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);

    let report = run(&client, &program_keypair, &config).await?;

    println!("tx signature: {}", report.ping_signature);

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match ping().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
