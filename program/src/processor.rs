use borsh::BorshDeserialize;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program_error::{PrintProgramError, ProgramError},
    pubkey::Pubkey,
};

use crate::{error::EscrowError, instruction::EscrowInstruction, instructions};

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = EscrowInstruction::try_from_slice(instruction_data)
        .map_err(|_| ProgramError::InvalidInstructionData)?;

    let result = match instruction {
        EscrowInstruction::Initialize {
            seed,
            token_a_offered_amount,
            token_b_wanted_amount,
        } => instructions::initialize(
            program_id,
            accounts,
            seed,
            token_a_offered_amount,
            token_b_wanted_amount,
        ),
        EscrowInstruction::Take => instructions::take(program_id, accounts),
        EscrowInstruction::Cancel => instructions::cancel(program_id, accounts),
    };

    if let Err(error) = &result {
        error.print::<EscrowError>();
    }
    result
}
