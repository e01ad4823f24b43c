//! Polling a signature until the cluster reports it finalized.

use std::time::Duration;

use solana_sdk::signature::Signature;

use solana_transaction_status::TransactionConfirmationStatus;

use tracing::{debug, info, warn};

use crate::{
    error::{ClientError, ClientResult},
    ledger::Ledger,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay: Duration::from_millis(2000),
        }
    }
}

impl RetryPolicy {
    /// Wait applied after `failures` failed status queries:
    /// `initial_delay * 2^failures`, saturating at `Duration::MAX`.
    pub fn delay_for(&self, failures: u32) -> Duration {
        2u32.checked_pow(failures)
            .and_then(|factor| self.initial_delay.checked_mul(factor))
            .unwrap_or(Duration::MAX)
    }
}

fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

/// Poll `signature` until it is finalized or `policy.max_retries` attempts
/// have been spent.
///
/// A failed status query doubles the wait before the next attempt. A query
/// that succeeds with a lesser commitment (or no status at all) waits the
/// current delay without doubling it. Nothing is slept after the last
/// attempt.
pub async fn confirm_with_retry<L>(
    ledger: &L,
    signature: &Signature,
    policy: &RetryPolicy,
) -> ClientResult<()>
where
    L: Ledger + ?Sized,
{
    let mut failures = 0;

    for attempt in 1..=policy.max_retries {
        info!(%signature, attempt, "Checking transaction confirmation...");

        let delay = match ledger.get_signature_status(signature).await {
            Ok(Some(status))
                if status.confirmation_status() == TransactionConfirmationStatus::Finalized =>
            {
                if let Some(err) = status.err {
                    warn!(%signature, error = %err, "Transaction finalized with error");
                }

                info!(%signature, "Transaction confirmed!");
                return Ok(());
            }
            Ok(status) => {
                debug!(
                    %signature,
                    attempt,
                    status = ?status.map(|s| s.confirmation_status()),
                    "Transaction not finalized yet",
                );
                policy.delay_for(failures)
            }
            Err(e) => {
                let delay = policy.delay_for(failures);
                failures += 1;
                warn!(
                    %signature,
                    attempt,
                    error = %e,
                    delay_ms = millis(delay),
                    "Retrying in {}ms...",
                    delay.as_millis(),
                );
                delay
            }
        };

        if attempt < policy.max_retries {
            tokio::time::sleep(delay).await;
        }
    }

    Err(ClientError::Unconfirmed(*signature))
}
