#![allow(dead_code)]

use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;

use solana_client::client_error::ClientErrorKind;

use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};

use solana_transaction_status::{TransactionConfirmationStatus, TransactionStatus};

use tokio::time::Instant;

use hello_solana_client::{ClientError, ClientResult, Ledger};

/// What the mock answers to one status query.
#[derive(Debug, Clone)]
pub enum StatusReply {
    Error,
    Unknown,
    Level(TransactionConfirmationStatus),
    FinalizedWithError(TransactionError),
}

pub fn finalized() -> StatusReply {
    StatusReply::Level(TransactionConfirmationStatus::Finalized)
}

pub fn confirmed() -> StatusReply {
    StatusReply::Level(TransactionConfirmationStatus::Confirmed)
}

fn rpc_error(message: &str) -> ClientError {
    solana_client::client_error::ClientError::from(ClientErrorKind::Custom(message.to_string()))
        .into()
}

fn status(
    confirmation_status: TransactionConfirmationStatus,
    err: Option<TransactionError>,
) -> TransactionStatus {
    TransactionStatus {
        slot: 42,
        confirmations: None,
        status: err.clone().map_or(Ok(()), Err),
        err,
        confirmation_status: Some(confirmation_status),
    }
}

/// In-memory ledger that replays scripted status replies and records what
/// the client asked of it.
pub struct MockLedger {
    pub airdrop_signature: Signature,
    pub blockhash: Hash,
    pub fail_airdrop: bool,
    pub fail_send: bool,
    replies: Mutex<VecDeque<StatusReply>>,
    pub airdrops: Mutex<Vec<(Pubkey, u64)>>,
    pub status_queries: Mutex<Vec<(Signature, Instant)>>,
    pub sent: Mutex<Vec<Transaction>>,
}

impl MockLedger {
    pub fn new(replies: impl IntoIterator<Item = StatusReply>) -> Self {
        Self {
            airdrop_signature: Signature::new_unique(),
            blockhash: Hash::new_unique(),
            fail_airdrop: false,
            fail_send: false,
            replies: Mutex::new(replies.into_iter().collect()),
            airdrops: Mutex::default(),
            status_queries: Mutex::default(),
            sent: Mutex::default(),
        }
    }

    pub fn attempts(&self) -> usize {
        self.status_queries.lock().unwrap().len()
    }

    /// Virtual time elapsed between consecutive status queries, in ms.
    pub fn gaps_ms(&self) -> Vec<u128> {
        let queries = self.status_queries.lock().unwrap();

        queries
            .windows(2)
            .map(|pair| (pair[1].1 - pair[0].1).as_millis())
            .collect()
    }
}

#[async_trait]
impl Ledger for MockLedger {
    async fn request_airdrop(&self, to: &Pubkey, lamports: u64) -> ClientResult<Signature> {
        if self.fail_airdrop {
            return Err(rpc_error("airdrop rate limited"));
        }

        self.airdrops.lock().unwrap().push((*to, lamports));
        Ok(self.airdrop_signature)
    }

    async fn get_latest_blockhash(&self) -> ClientResult<Hash> {
        Ok(self.blockhash)
    }

    async fn get_signature_status(
        &self,
        signature: &Signature,
    ) -> ClientResult<Option<TransactionStatus>> {
        self.status_queries
            .lock()
            .unwrap()
            .push((*signature, Instant::now()));

        let reply = self.replies.lock().unwrap().pop_front();

        match reply {
            None | Some(StatusReply::Error) => Err(rpc_error("connection reset")),
            Some(StatusReply::Unknown) => Ok(None),
            Some(StatusReply::Level(level)) => Ok(Some(status(level, None))),
            Some(StatusReply::FinalizedWithError(err)) => Ok(Some(status(
                TransactionConfirmationStatus::Finalized,
                Some(err),
            ))),
        }
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> ClientResult<Signature> {
        if self.fail_send {
            return Err(rpc_error("blockhash not found"));
        }

        self.sent.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}
