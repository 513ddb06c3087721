use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;

/// The deployed counter program.
pub const ID: Pubkey = pubkey!("Cb5aXEgXptKqHHWLifvXu5BeAuVLjojQ5ypq6CfQj1hy");

/// On-chain size of a counter account.
pub const COUNTER_ACCOUNT_SIZE: usize = 8;

const INCREMENT: u8 = 0x00;

/// System instruction funding a fresh counter account owned by the program.
pub fn create_counter_account(
    payer: &Pubkey,
    counter: &Pubkey,
    rent_lamports: u64,
) -> Instruction {
    system_instruction::create_account(
        payer,
        counter,
        rent_lamports,
        COUNTER_ACCOUNT_SIZE as u64,
        &ID,
    )
}

pub fn increment_counter(counter: &Pubkey) -> Instruction {
    Instruction {
        program_id: ID,
        accounts: vec![AccountMeta::new(*counter, false)],
        data: vec![INCREMENT],
    }
}
