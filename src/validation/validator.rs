use crate::models::{BadTransaction, Column, RowError, Transaction, TransactionType};
use crate::types::is_card_number;

/// Applies the business rules to parsed candidates. Pure: no state beyond its settings.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    card_number_length: usize
}

impl Validator {
    pub fn new(card_number_length: usize) -> Self {
        Self { card_number_length }
    }

    /// Passes the transaction through untouched, or turns it into a bad transaction
    /// carrying the reason of the first rule it breaks.
    pub fn validate(&self, transaction: Transaction) -> Result<Transaction, BadTransaction> {
        match self.check(&transaction) {
            Ok(()) => Ok(transaction),
            Err(error) => Err(BadTransaction::from_transaction(&transaction, error))
        }
    }

    /// Rules run in a fixed order; the order decides which reason gets reported.
    pub fn check(&self, transaction: &Transaction) -> Result<(), RowError> {
        if transaction.account_name.trim().is_empty() {
            return Err(RowError::MissingField(Column::AccountName));
        }

        if !is_card_number(&transaction.card_number, self.card_number_length) {
            return Err(RowError::InvalidCardNumber);
        }

        if transaction.amount.is_zero() {
            return Err(RowError::ZeroAmount);
        }

        if transaction.transaction_type == TransactionType::Transfer {
            let target = transaction.target_card_number.as_deref().unwrap_or_default();

            if !is_card_number(target, self.card_number_length) {
                return Err(RowError::InvalidTransferTarget);
            }
        }

        if !transaction.transaction_type.is_recognized() {
            return Err(RowError::UnrecognizedType);
        }

        Ok(())
    }
}
