use num_derive::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum EscrowError {
    #[error("Offered and wanted amounts must be greater than zero")]
    InvalidAmount,
    #[error("Insufficient token balance")]
    InsufficientFunds,
    #[error("An escrow already exists for this maker and seed")]
    DuplicateOffer,
    #[error("Escrow does not exist")]
    NotFound,
    #[error("Token account does not match the escrow mints")]
    TokenMismatch,
    #[error("Signer is not authorized for this operation")]
    Unauthorized,
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

impl From<EscrowError> for ProgramError {
    fn from(e: EscrowError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for EscrowError {
    fn type_of() -> &'static str {
        "EscrowError"
    }
}

impl PrintProgramError for EscrowError {
    fn print<E>(&self)
    where
        E: 'static
            + std::error::Error
            + DecodeError<E>
            + PrintProgramError
            + num_traits::FromPrimitive,
    {
        msg!(&self.to_string());
    }
}
