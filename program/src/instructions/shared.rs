//! Helpers shared by the instruction handlers.

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    program_pack::Pack,
    pubkey::Pubkey,
};
use spl_token::instruction as token_instruction;
use spl_token::state::{Account as TokenAccount, Mint};

use crate::error::EscrowError;

/// Move tokens between two token accounts with `transfer_checked`. When the
/// source is owned by the escrow record, `owning_pda_seeds` carries the
/// record's signer seeds.
pub fn transfer_tokens<'a>(
    token_program: &AccountInfo<'a>,
    from: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    to: &AccountInfo<'a>,
    authority: &AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    owning_pda_seeds: Option<&[&[u8]]>,
) -> ProgramResult {
    let transfer_ix = token_instruction::transfer_checked(
        token_program.key,
        from.key,
        mint.key,
        to.key,
        authority.key,
        &[],
        amount,
        decimals,
    )?;
    let account_infos = [
        from.clone(),
        mint.clone(),
        to.clone(),
        authority.clone(),
        token_program.clone(),
    ];
    match owning_pda_seeds {
        Some(seeds) => invoke_signed(&transfer_ix, &account_infos, &[seeds]),
        None => invoke(&transfer_ix, &account_infos),
    }
}

/// Close a token account and send its rent lamports to `destination`.
pub fn close_token_account<'a>(
    token_program: &AccountInfo<'a>,
    account: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
    authority: &AccountInfo<'a>,
    owning_pda_seeds: Option<&[&[u8]]>,
) -> ProgramResult {
    let close_ix = token_instruction::close_account(
        token_program.key,
        account.key,
        destination.key,
        authority.key,
        &[],
    )?;
    let account_infos = [
        account.clone(),
        destination.clone(),
        authority.clone(),
        token_program.clone(),
    ];
    match owning_pda_seeds {
        Some(seeds) => invoke_signed(&close_ix, &account_infos, &[seeds]),
        None => invoke(&close_ix, &account_infos),
    }
}

/// Unpack a token account and require it to hold the given mint.
pub fn load_token_account(
    info: &AccountInfo,
    mint: &Pubkey,
) -> Result<TokenAccount, ProgramError> {
    if info.data_is_empty() || !spl_token::check_id(info.owner) {
        return Err(EscrowError::NotFound.into());
    }
    let account = TokenAccount::unpack(&info.try_borrow_data()?)?;
    if account.mint != *mint {
        return Err(EscrowError::TokenMismatch.into());
    }
    Ok(account)
}

/// Unpack a mint account.
pub fn load_mint(info: &AccountInfo) -> Result<Mint, ProgramError> {
    if !spl_token::check_id(info.owner) {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(Mint::unpack(&info.try_borrow_data()?)?)
}

/// Close the escrow record: move its lamports to `destination`, wipe its
/// data, and hand the account back to the system program so the runtime
/// reaps it at the end of the transaction.
pub fn close_record<'a>(
    record: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
) -> ProgramResult {
    let drained = destination
        .lamports()
        .checked_add(record.lamports())
        .ok_or(EscrowError::ArithmeticOverflow)?;
    **destination.try_borrow_mut_lamports()? = drained;
    **record.try_borrow_mut_lamports()? = 0;
    record.try_borrow_mut_data()?.fill(0);
    record.assign(&solana_system_interface::program::id());
    Ok(())
}
