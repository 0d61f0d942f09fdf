//! Deterministic addressing for escrow records and vaults.
//!
//! Every account the program touches lives at an address any party can
//! recompute on its own: the record at a program address derived from the
//! maker and a seed, the vault at the associated token address of the
//! record. No registry of open offers exists anywhere.

use solana_program::{program_error::ProgramError, pubkey::Pubkey};
use spl_associated_token_account::get_associated_token_address;

use crate::ESCROW_SEED;

/// Derive the escrow record address for `(maker, seed)`.
pub fn find_escrow_address(program_id: &Pubkey, maker: &Pubkey, seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ESCROW_SEED, maker.as_ref(), &seed.to_le_bytes()],
        program_id,
    )
}

/// Rebuild the escrow record address from a stored bump. Fails with
/// `InvalidSeeds` when the bump does not produce a valid program address
/// for these inputs.
pub fn create_escrow_address(
    program_id: &Pubkey,
    maker: &Pubkey,
    seed: u64,
    bump: u8,
) -> Result<Pubkey, ProgramError> {
    Pubkey::create_program_address(
        &[ESCROW_SEED, maker.as_ref(), &seed.to_le_bytes(), &[bump]],
        program_id,
    )
    .map_err(|_| ProgramError::InvalidSeeds)
}

/// The vault is the associated token account of the escrow record for the
/// offered mint.
pub fn find_vault_address(escrow: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(escrow, mint)
}
