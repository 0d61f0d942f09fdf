use solana_program::{
    account_info::{AccountInfo, next_account_info},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::ESCROW_SEED;
use crate::addresses::{create_escrow_address, find_vault_address};
use crate::error::EscrowError;
use crate::instructions::shared::{
    close_record, close_token_account, load_mint, load_token_account, transfer_tokens,
};
use crate::state::Escrow;

/// Accounts:
/// 0. [signer, writable] maker
/// 1. [writable] escrow record PDA
/// 2. [readonly] mint_a, the offered token
/// 3. [writable] maker token account for mint_a
/// 4. [writable] vault
/// 5. [readonly] token program
pub fn cancel(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let maker = next_account_info(account_info_iter)?;
    let escrow = next_account_info(account_info_iter)?;
    let mint_a = next_account_info(account_info_iter)?;
    let maker_ata_a = next_account_info(account_info_iter)?;
    let vault = next_account_info(account_info_iter)?;
    let token_program = next_account_info(account_info_iter)?;

    // Basic checks
    if !maker.is_signer {
        return Err(EscrowError::Unauthorized.into());
    }
    if !spl_token::check_id(token_program.key) {
        return Err(ProgramError::IncorrectProgramId);
    }
    if escrow.owner != program_id || escrow.data_is_empty() {
        return Err(EscrowError::NotFound.into());
    }
    let record = Escrow::unpack(&escrow.data.borrow())?;

    // Only the maker may withdraw an open offer.
    if record.maker != *maker.key {
        return Err(EscrowError::Unauthorized.into());
    }
    let escrow_key = create_escrow_address(program_id, maker.key, record.seed, record.bump)?;
    if escrow_key != *escrow.key {
        return Err(ProgramError::InvalidSeeds);
    }
    if record.token_mint_a != *mint_a.key {
        return Err(EscrowError::TokenMismatch.into());
    }
    if *vault.key != find_vault_address(escrow.key, mint_a.key) {
        return Err(ProgramError::InvalidSeeds);
    }

    let mint_a_state = load_mint(mint_a)?;
    let vault_state = load_token_account(vault, mint_a.key)?;
    let refund_destination = load_token_account(maker_ata_a, mint_a.key)?;
    if refund_destination.owner != *maker.key {
        return Err(EscrowError::Unauthorized.into());
    }

    // Refund whatever the vault holds, not just the recorded amount.
    msg!("Refunding the vault to the maker");
    let seed_bytes = record.seed.to_le_bytes();
    let escrow_seeds: &[&[u8]] = &[
        ESCROW_SEED,
        maker.key.as_ref(),
        &seed_bytes,
        &[record.bump],
    ];
    transfer_tokens(
        token_program,
        vault,
        mint_a,
        maker_ata_a,
        escrow,
        vault_state.amount,
        mint_a_state.decimals,
        Some(escrow_seeds),
    )?;
    close_token_account(token_program, vault, maker, escrow, Some(escrow_seeds))?;

    msg!("Closing the escrow record");
    close_record(escrow, maker)
}
