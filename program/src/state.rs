use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// One open offer. Written once when the offer is made and never mutated;
/// taking or cancelling the offer deletes the whole account.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct Escrow {
    /// Maker-chosen value, lets one maker keep several offers open.
    pub seed: u64,
    /// The offer creator. The only identity allowed to cancel.
    pub maker: Pubkey,
    /// Mint of the token sitting in the vault.
    pub token_mint_a: Pubkey,
    /// Mint of the token the maker wants in return.
    pub token_mint_b: Pubkey,
    /// Amount of token A locked in the vault.
    pub token_a_offered_amount: u64,
    /// Amount of token B that completes the swap.
    pub token_b_wanted_amount: u64,
    /// Bump for the record's own address derivation.
    pub bump: u8,
}

impl Escrow {
    /// 8 (seed) + 32 (maker) + 32 (mint a) + 32 (mint b) + 8 (offered)
    /// + 8 (wanted) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 32 + 32 + 8 + 8 + 1;

    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        Self::try_from_slice(data).map_err(|_| ProgramError::InvalidAccountData)
    }
}
