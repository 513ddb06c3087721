use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{instruction::ProgramInstruction, state::Counter};

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    match ProgramInstruction::unpack(instruction_data)? {
        ProgramInstruction::Increment => {
            msg!("Instruction: Increment");
            process_increment(program_id, accounts)
        }
    }
}

pub fn process_increment(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();
    let counter_account = next_account_info(accounts_iter)?;

    // The counter account is allocated by the client with this program as
    // its owner; anything else must not be mutated here.
    if counter_account.owner != program_id {
        msg!(
            "Counter account {} is not owned by this program",
            counter_account.key
        );
        return Err(ProgramError::IncorrectProgramId);
    }

    let mut counter = Counter::try_from_slice(&counter_account.data.borrow())?;
    counter.count += 1;
    counter.serialize(&mut &mut counter_account.data.borrow_mut()[..])?;
    msg!("Counter {} count: {}", counter_account.key, counter.count);

    Ok(())
}
