//! Instructions accepted by the escrow program, plus builders for clients.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::addresses::{find_escrow_address, find_vault_address};

#[derive(Debug, BorshSerialize, BorshDeserialize, PartialEq, Eq)]
pub enum EscrowInstruction {
    /// Open an offer: create the escrow record and its vault, then move
    /// the offered tokens into custody.
    ///
    /// Accounts:
    /// 0. `[signer, writable]` maker
    /// 1. `[]` mint of the offered token
    /// 2. `[]` mint of the wanted token
    /// 3. `[writable]` maker token account for the offered mint
    /// 4. `[writable]` escrow record, derived from maker and seed
    /// 5. `[writable]` vault, the record's associated token account
    /// 6. `[]` system program
    /// 7. `[]` token program
    /// 8. `[]` associated token program
    Initialize {
        seed: u64,
        token_a_offered_amount: u64,
        token_b_wanted_amount: u64,
    },
    /// Accept an offer: pay the wanted amount to the maker, take the vault
    /// contents, and close both escrow accounts.
    ///
    /// Accounts:
    /// 0. `[signer, writable]` taker
    /// 1. `[writable]` maker, receives rent from the closed accounts
    /// 2. `[writable]` escrow record
    /// 3. `[]` mint of the offered token
    /// 4. `[]` mint of the wanted token
    /// 5. `[writable]` taker token account for the offered mint
    /// 6. `[writable]` taker token account for the wanted mint
    /// 7. `[writable]` maker token account for the wanted mint
    /// 8. `[writable]` vault
    /// 9. `[]` token program
    Take,
    /// Withdraw an open offer: refund the vault to the maker and close
    /// both escrow accounts.
    ///
    /// Accounts:
    /// 0. `[signer, writable]` maker
    /// 1. `[writable]` escrow record
    /// 2. `[]` mint of the offered token
    /// 3. `[writable]` maker token account for the offered mint
    /// 4. `[writable]` vault
    /// 5. `[]` token program
    Cancel,
}

/// Build an `Initialize` instruction. The escrow record and vault addresses
/// are derived, not chosen.
pub fn initialize(
    program_id: &Pubkey,
    maker: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
    maker_ata_a: &Pubkey,
    seed: u64,
    token_a_offered_amount: u64,
    token_b_wanted_amount: u64,
) -> Result<Instruction, ProgramError> {
    let (escrow, _) = find_escrow_address(program_id, maker, seed);
    let vault = find_vault_address(&escrow, mint_a);
    let data = borsh::to_vec(&EscrowInstruction::Initialize {
        seed,
        token_a_offered_amount,
        token_b_wanted_amount,
    })
    .map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*maker, true),
            AccountMeta::new_readonly(*mint_a, false),
            AccountMeta::new_readonly(*mint_b, false),
            AccountMeta::new(*maker_ata_a, false),
            AccountMeta::new(escrow, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(solana_system_interface::program::id(), false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(spl_associated_token_account::id(), false),
        ],
        data,
    })
}

/// Build a `Take` instruction against an existing escrow record.
pub fn take(
    program_id: &Pubkey,
    taker: &Pubkey,
    maker: &Pubkey,
    escrow: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
    taker_ata_a: &Pubkey,
    taker_ata_b: &Pubkey,
    maker_ata_b: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let vault = find_vault_address(escrow, mint_a);
    let data =
        borsh::to_vec(&EscrowInstruction::Take).map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*taker, true),
            AccountMeta::new(*maker, false),
            AccountMeta::new(*escrow, false),
            AccountMeta::new_readonly(*mint_a, false),
            AccountMeta::new_readonly(*mint_b, false),
            AccountMeta::new(*taker_ata_a, false),
            AccountMeta::new(*taker_ata_b, false),
            AccountMeta::new(*maker_ata_b, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    })
}

/// Build a `Cancel` instruction against an existing escrow record.
pub fn cancel(
    program_id: &Pubkey,
    maker: &Pubkey,
    escrow: &Pubkey,
    mint_a: &Pubkey,
    maker_ata_a: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let vault = find_vault_address(escrow, mint_a);
    let data = borsh::to_vec(&EscrowInstruction::Cancel)
        .map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*maker, true),
            AccountMeta::new(*escrow, false),
            AccountMeta::new_readonly(*mint_a, false),
            AccountMeta::new(*maker_ata_a, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    })
}
