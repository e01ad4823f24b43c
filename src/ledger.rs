//! The handful of RPC calls the client depends on.
//!
//! Kept behind a trait so the ping flow and the confirmation poller can be
//! driven by an in-memory ledger in tests.

use async_trait::async_trait;

use solana_client::nonblocking::rpc_client::RpcClient;

use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::Transaction,
};

use solana_transaction_status::TransactionStatus;

use crate::error::ClientResult;

#[async_trait]
pub trait Ledger: Send + Sync {
    /// Ask the cluster faucet to fund `to` with `lamports`.
    async fn request_airdrop(&self, to: &Pubkey, lamports: u64) -> ClientResult<Signature>;

    async fn get_latest_blockhash(&self) -> ClientResult<Hash>;

    /// Status of a single signature, searching the full transaction history.
    /// `None` means the cluster does not know the signature (yet).
    async fn get_signature_status(
        &self,
        signature: &Signature,
    ) -> ClientResult<Option<TransactionStatus>>;

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> ClientResult<Signature>;
}

#[async_trait]
impl Ledger for RpcClient {
    async fn request_airdrop(&self, to: &Pubkey, lamports: u64) -> ClientResult<Signature> {
        Ok(RpcClient::request_airdrop(self, to, lamports).await?)
    }

    async fn get_latest_blockhash(&self) -> ClientResult<Hash> {
        Ok(RpcClient::get_latest_blockhash(self).await?)
    }

    async fn get_signature_status(
        &self,
        signature: &Signature,
    ) -> ClientResult<Option<TransactionStatus>> {
        let response = self
            .get_signature_statuses_with_history(&[*signature])
            .await?;

        Ok(response.value.into_iter().next().flatten())
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> ClientResult<Signature> {
        Ok(RpcClient::send_and_confirm_transaction(self, transaction).await?)
    }
}
