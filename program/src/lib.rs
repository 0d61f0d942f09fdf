use solana_program::{declare_id, entrypoint};

pub mod addresses;
pub mod error;
pub mod instruction;
pub mod instructions;
pub mod processor;
pub mod state;

use crate::processor::process_instruction;

declare_id!("EYdUDGL5bWcuW6fY9BDhpCXEeErbi1AaY3ArysgwNh7A");

/// Seed prefix for escrow record addresses.
pub const ESCROW_SEED: &[u8] = b"escrow";

#[cfg(not(feature = "no-entrypoint"))]
entrypoint!(process_instruction);
