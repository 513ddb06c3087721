use solana_program::program_error::ProgramError;

/// The instruction data is a single discriminator byte; clients send `[0x00]`
/// to increment.
pub enum ProgramInstruction {
    Increment,
}

impl ProgramInstruction {
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        match input.first() {
            Some(0x00) => Ok(Self::Increment),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
