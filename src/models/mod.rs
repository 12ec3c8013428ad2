mod account;
mod bad_transaction;
mod column;
mod errors;
#[cfg(test)]
mod tests;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};

pub use account::AccountTotal;
pub use bad_transaction::BadTransaction;
pub use column::{Column, RawRow};
pub use errors::RowError;
pub use transaction::Transaction;

/// The kind of movement a row describes. Anything outside the recognized
/// set is kept verbatim so the validator can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionType {
    Credit,
    Debit,
    Transfer,
    Unrecognized(String)
}

impl TransactionType {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, TransactionType::Unrecognized(_))
    }
}

impl From<&str> for TransactionType {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "credit" => TransactionType::Credit,
            "debit" => TransactionType::Debit,
            "transfer" => TransactionType::Transfer,
            _ => TransactionType::Unrecognized(value.to_string())
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Credit => formatter.write_str("Credit"),
            TransactionType::Debit => formatter.write_str("Debit"),
            TransactionType::Transfer => formatter.write_str("Transfer"),
            TransactionType::Unrecognized(raw) => formatter.write_str(raw)
        }
    }
}
