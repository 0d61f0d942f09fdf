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
/// 0. [signer, writable] taker
/// 1. [writable] maker, receives rent from the closed accounts
/// 2. [writable] escrow record PDA
/// 3. [readonly] mint_a, the offered token
/// 4. [readonly] mint_b, the wanted token
/// 5. [writable] taker token account for mint_a
/// 6. [writable] taker token account for mint_b
/// 7. [writable] maker token account for mint_b
/// 8. [writable] vault
/// 9. [readonly] token program
pub fn take(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let taker = next_account_info(account_info_iter)?;
    let maker = next_account_info(account_info_iter)?;
    let escrow = next_account_info(account_info_iter)?;
    let mint_a = next_account_info(account_info_iter)?;
    let mint_b = next_account_info(account_info_iter)?;
    let taker_ata_a = next_account_info(account_info_iter)?;
    let taker_ata_b = next_account_info(account_info_iter)?;
    let maker_ata_b = next_account_info(account_info_iter)?;
    let vault = next_account_info(account_info_iter)?;
    let token_program = next_account_info(account_info_iter)?;

    // Basic checks
    if !taker.is_signer {
        return Err(EscrowError::Unauthorized.into());
    }
    if !spl_token::check_id(token_program.key) {
        return Err(ProgramError::IncorrectProgramId);
    }

    // A closed record is indistinguishable from one that never existed.
    if escrow.owner != program_id || escrow.data_is_empty() {
        return Err(EscrowError::NotFound.into());
    }
    let record = Escrow::unpack(&escrow.data.borrow())?;

    if record.maker != *maker.key {
        return Err(EscrowError::Unauthorized.into());
    }
    if taker.key == maker.key {
        return Err(EscrowError::Unauthorized.into());
    }
    let escrow_key = create_escrow_address(program_id, maker.key, record.seed, record.bump)?;
    if escrow_key != *escrow.key {
        return Err(ProgramError::InvalidSeeds);
    }
    if record.token_mint_a != *mint_a.key || record.token_mint_b != *mint_b.key {
        return Err(EscrowError::TokenMismatch.into());
    }
    if *vault.key != find_vault_address(escrow.key, mint_a.key) {
        return Err(ProgramError::InvalidSeeds);
    }

    let mint_a_state = load_mint(mint_a)?;
    let mint_b_state = load_mint(mint_b)?;

    load_token_account(vault, mint_a.key)?;
    let taker_source = load_token_account(taker_ata_b, mint_b.key)?;
    if taker_source.owner != *taker.key {
        return Err(EscrowError::Unauthorized.into());
    }
    if taker_source.amount < record.token_b_wanted_amount {
        return Err(EscrowError::InsufficientFunds.into());
    }
    let taker_destination = load_token_account(taker_ata_a, mint_a.key)?;
    if taker_destination.owner != *taker.key {
        return Err(EscrowError::Unauthorized.into());
    }
    let maker_destination = load_token_account(maker_ata_b, mint_b.key)?;
    if maker_destination.owner != *maker.key {
        return Err(EscrowError::Unauthorized.into());
    }

    msg!("Paying the maker the wanted amount");
    transfer_tokens(
        token_program,
        taker_ata_b,
        mint_b,
        maker_ata_b,
        taker,
        record.token_b_wanted_amount,
        mint_b_state.decimals,
        None,
    )?;

    // The record owns the vault, so its seeds sign the release and the
    // vault closure.
    msg!("Releasing the vault to the taker");
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
        taker_ata_a,
        escrow,
        record.token_a_offered_amount,
        mint_a_state.decimals,
        Some(escrow_seeds),
    )?;
    close_token_account(token_program, vault, maker, escrow, Some(escrow_seeds))?;

    msg!("Closing the escrow record");
    close_record(escrow, maker)
}
