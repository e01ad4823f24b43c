//! Airdrop to a throwaway account and use it to ping the program.

use solana_sdk::{
    hash::Hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use tracing::info;

use crate::{
    config::Config,
    confirm::confirm_with_retry,
    error::ClientResult,
    ledger::Ledger,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingReport {
    pub program_id: Pubkey,
    pub airdrop_signature: Signature,
    pub ping_signature: Signature,
}

/// The program takes no data; the trigger account is passed writable so the
/// runtime locks it, but it does not sign the instruction itself.
pub fn build_ping_instruction(program_id: Pubkey, trigger: Pubkey) -> Instruction {
    Instruction::new_with_bytes(
        program_id,
        &[],
        vec![AccountMeta::new(trigger, false)],
    )
}

pub fn build_ping_transaction(
    program_id: Pubkey,
    trigger: &Keypair,
    recent_blockhash: Hash,
) -> Transaction {
    let ix = build_ping_instruction(program_id, trigger.pubkey());

    Transaction::new_signed_with_payer(
        &[ix],
        Some(&trigger.pubkey()),
        &[trigger],
        recent_blockhash,
    )
}

pub async fn run<L>(
    ledger: &L,
    program_keypair: &Keypair,
    config: &Config,
) -> ClientResult<PingReport>
where
    L: Ledger + ?Sized,
{
    info!("Launching client...");

    let program_id = program_keypair.pubkey();

    let trigger = Keypair::new();

    let airdrop_signature = ledger
        .request_airdrop(&trigger.pubkey(), config.airdrop_lamports)
        .await?;
    info!(
        signature = %airdrop_signature,
        account = %trigger.pubkey(),
        lamports = config.airdrop_lamports,
        "Requested airdrop",
    );

    confirm_with_retry(ledger, &airdrop_signature, &config.retry).await?;

    info!(%program_id, "Pinging program");

    let recent_blockhash = ledger.get_latest_blockhash().await?;

    let tx = build_ping_transaction(program_id, &trigger, recent_blockhash);

    let ping_signature = ledger.send_and_confirm_transaction(&tx).await?;

    info!(signature = %ping_signature, "Ping transaction confirmed");

    Ok(PingReport {
        program_id,
        airdrop_signature,
        ping_signature,
    })
}
