use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    native_token::LAMPORTS_PER_SOL,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use tracing::info;

use crate::error::{CliError, Result};
use crate::instructions::{create_counter_account, increment_counter, COUNTER_ACCOUNT_SIZE};

/// Minimum wallet balance required before attempting the flow.
pub const MIN_BALANCE: u64 = LAMPORTS_PER_SOL / 100;

#[derive(Debug, PartialEq, Eq)]
pub struct CounterAccount {
    pub count: u64,
}

/// Decodes a counter account buffer. The buffer must be exactly 8 bytes;
/// the count is the value of byte zero.
pub fn deserialize_counter_account(data: &[u8]) -> Result<CounterAccount> {
    if data.len() != COUNTER_ACCOUNT_SIZE {
        return Err(CliError::CounterDataLength(data.len()));
    }
    Ok(CounterAccount {
        count: u64::from(data[0]),
    })
}

/// Allocates a fresh counter account, increments it once, then re-reads the
/// account and checks the count landed at 1.
pub async fn increment(client: &RpcClient, payer: &Keypair) -> Result<CounterAccount> {
    let balance = client.get_balance(&payer.pubkey()).await?;
    if balance < MIN_BALANCE {
        return Err(CliError::InsufficientBalance {
            balance,
            required: MIN_BALANCE,
        });
    }

    let counter_keypair = Keypair::new();
    let counter = counter_keypair.pubkey();

    let rent_lamports = client
        .get_minimum_balance_for_rent_exemption(COUNTER_ACCOUNT_SIZE)
        .await?;

    let (blockhash, _) = client
        .get_latest_blockhash_with_commitment(CommitmentConfig::confirmed())
        .await?;
    let tx = Transaction::new_signed_with_payer(
        &[
            create_counter_account(&payer.pubkey(), &counter, rent_lamports),
            increment_counter(&counter),
        ],
        Some(&payer.pubkey()),
        &[payer, &counter_keypair],
        blockhash,
    );

    info!(counter = %counter, "Sending transaction");
    let signature = client.send_and_confirm_transaction(&tx).await?;
    info!(%signature, "Transaction confirmed");

    let account = client
        .get_account_with_commitment(&counter, CommitmentConfig::confirmed())
        .await?
        .value
        .ok_or(CliError::CounterMissing(counter))?;

    let counter_account = deserialize_counter_account(&account.data)?;
    if counter_account.count != 1 {
        return Err(CliError::UnexpectedCount {
            expected: 1,
            actual: counter_account.count,
        });
    }

    info!(count = counter_account.count, "[alloc+increment] done");
    Ok(counter_account)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_eight_bytes() {
        let account = deserialize_counter_account(&[5, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(account, CounterAccount { count: 5 });
    }

    #[test]
    fn count_comes_from_byte_zero() {
        // trailing bytes are ignored, matching the on-chain layout where a
        // single increment only ever touches the low byte
        let account = deserialize_counter_account(&[1, 0xff, 0xff, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(account.count, 1);
    }

    #[test]
    fn rejects_short_buffer() {
        assert!(matches!(
            deserialize_counter_account(&[0; 7]),
            Err(CliError::CounterDataLength(7))
        ));
    }

    #[test]
    fn rejects_long_buffer() {
        assert!(matches!(
            deserialize_counter_account(&[0; 9]),
            Err(CliError::CounterDataLength(9))
        ));
    }

    #[test]
    fn rejects_empty_buffer() {
        assert!(matches!(
            deserialize_counter_account(&[]),
            Err(CliError::CounterDataLength(0))
        ));
    }
}
