use borsh::BorshSerialize;
use solana_program::{
    account_info::{AccountInfo, next_account_info},
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    pubkey::Pubkey,
    sysvar::{Sysvar, rent::Rent},
};
use solana_system_interface::instruction as system_instruction;
use spl_associated_token_account::instruction::create_associated_token_account;

use crate::ESCROW_SEED;
use crate::addresses::{find_escrow_address, find_vault_address};
use crate::error::EscrowError;
use crate::instructions::shared::{load_mint, load_token_account, transfer_tokens};
use crate::state::Escrow;

/// Accounts:
/// 0. [signer, writable] maker
/// 1. [readonly] mint_a, the offered token
/// 2. [readonly] mint_b, the wanted token
/// 3. [writable] maker token account for mint_a
/// 4. [writable] escrow record PDA
/// 5. [writable] vault, ATA of the record for mint_a
/// 6. [readonly] system program
/// 7. [readonly] token program
/// 8. [readonly] associated token program
pub fn initialize(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    seed: u64,
    token_a_offered_amount: u64,
    token_b_wanted_amount: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let maker = next_account_info(account_info_iter)?;
    let mint_a = next_account_info(account_info_iter)?;
    let mint_b = next_account_info(account_info_iter)?;
    let maker_ata_a = next_account_info(account_info_iter)?;
    let escrow = next_account_info(account_info_iter)?;
    let vault = next_account_info(account_info_iter)?;
    let system_program = next_account_info(account_info_iter)?;
    let token_program = next_account_info(account_info_iter)?;
    let associated_token_program = next_account_info(account_info_iter)?;

    // Basic checks
    if !maker.is_signer {
        return Err(EscrowError::Unauthorized.into());
    }
    if !solana_system_interface::program::check_id(system_program.key)
        || !spl_token::check_id(token_program.key)
        || !spl_associated_token_account::check_id(associated_token_program.key)
    {
        return Err(ProgramError::IncorrectProgramId);
    }
    if token_a_offered_amount == 0 || token_b_wanted_amount == 0 {
        return Err(EscrowError::InvalidAmount.into());
    }
    if mint_a.key == mint_b.key {
        return Err(EscrowError::TokenMismatch.into());
    }

    let mint_a_state = load_mint(mint_a)?;
    load_mint(mint_b)?;

    let maker_source = load_token_account(maker_ata_a, mint_a.key)?;
    if maker_source.owner != *maker.key {
        return Err(EscrowError::Unauthorized.into());
    }
    if maker_source.amount < token_a_offered_amount {
        return Err(EscrowError::InsufficientFunds.into());
    }

    // The record and vault addresses are fixed by derivation, so a second
    // offer under the same (maker, seed) lands on the same accounts.
    let (escrow_key, bump) = find_escrow_address(program_id, maker.key, seed);
    if escrow_key != *escrow.key {
        return Err(ProgramError::InvalidSeeds);
    }
    if !escrow.data_is_empty() {
        return Err(EscrowError::DuplicateOffer.into());
    }
    if *vault.key != find_vault_address(&escrow_key, mint_a.key) {
        return Err(ProgramError::InvalidSeeds);
    }
    if !vault.data_is_empty() {
        return Err(EscrowError::DuplicateOffer.into());
    }

    msg!("Creating escrow record");
    let seed_bytes = seed.to_le_bytes();
    let escrow_seeds: &[&[u8]] = &[ESCROW_SEED, maker.key.as_ref(), &seed_bytes, &[bump]];
    invoke_signed(
        &system_instruction::create_account(
            maker.key,
            escrow.key,
            Rent::get()?.minimum_balance(Escrow::LEN),
            Escrow::LEN as u64,
            program_id,
        ),
        &[maker.clone(), escrow.clone(), system_program.clone()],
        &[escrow_seeds],
    )?;

    let record = Escrow {
        seed,
        maker: *maker.key,
        token_mint_a: *mint_a.key,
        token_mint_b: *mint_b.key,
        token_a_offered_amount,
        token_b_wanted_amount,
        bump,
    };
    record
        .serialize(&mut &mut escrow.data.borrow_mut()[..])
        .map_err(|_| ProgramError::AccountDataTooSmall)?;

    msg!("Creating vault");
    invoke(
        &create_associated_token_account(maker.key, escrow.key, mint_a.key, token_program.key),
        &[
            maker.clone(),
            vault.clone(),
            escrow.clone(),
            mint_a.clone(),
            system_program.clone(),
            token_program.clone(),
            associated_token_program.clone(),
        ],
    )?;

    msg!("Moving offered tokens into custody");
    transfer_tokens(
        token_program,
        maker_ata_a,
        mint_a,
        vault,
        maker,
        token_a_offered_amount,
        mint_a_state.decimals,
        None,
    )?;

    Ok(())
}
