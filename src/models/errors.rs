use crate::models::Column;
use thiserror::Error;

/// Why a single row ended up in the bad transactions set.
///
/// The display text of each variant is the reason string shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("missing required field: {0}")]
    MissingField(Column),
    #[error("invalid amount format")]
    InvalidAmount,
    #[error("invalid card number format")]
    InvalidCardNumber,
    #[error("zero amount transaction")]
    ZeroAmount,
    #[error("missing/invalid target card for transfer")]
    InvalidTransferTarget,
    #[error("unrecognized transaction type")]
    UnrecognizedType,
    #[error("total amount overflow")]
    Overflow
}
