pub mod client;
pub mod config;
pub mod confirm;
pub mod error;
pub mod keypair;
pub mod ledger;

pub use client::{build_ping_instruction, build_ping_transaction, run, PingReport};
pub use config::Config;
pub use confirm::{confirm_with_retry, RetryPolicy};
pub use error::{ClientError, ClientResult};
pub use keypair::load_program_keypair;
pub use ledger::Ledger;
