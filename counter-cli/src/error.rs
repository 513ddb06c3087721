use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no wallet connected; run `connect` first")]
    WalletNotConnected,
    #[error("invalid private key: expected a base58-encoded 64-byte keypair")]
    InvalidPrivateKey,
    #[error("not enough SOL in wallet: {balance} lamports, need at least {required}")]
    InsufficientBalance { balance: u64, required: u64 },
    #[error("expected counter account {0} to have been created")]
    CounterMissing(Pubkey),
    #[error("need exactly 8 bytes to deserialize counter, got {0}")]
    CounterDataLength(usize),
    #[error("expected count to have been {expected}, got {actual}")]
    UnexpectedCount { expected: u64, actual: u64 },
    #[error(transparent)]
    Rpc(#[from] solana_client::client_error::ClientError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("session file is corrupt: {0}")]
    Session(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
