use serde::Serialize;

use crate::models::RowError;
use crate::types::Amount;

/// The running total of one (account name, card number) pair.
///
/// Used for both the chart of accounts and the collections accounts views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountTotal {
    #[serde(rename = "Account Name")]
    pub account_name: String,
    #[serde(rename = "Card Number")]
    pub card_number: String,
    #[serde(rename = "Total Amount")]
    pub total_amount: Amount
}

impl AccountTotal {
    pub fn new(account_name: impl Into<String>, card_number: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            card_number: card_number.into(),
            total_amount: Amount::ZERO
        }
    }

    /// Adds a signed amount to the total. On overflow the total is left untouched.
    pub fn apply(&mut self, amount: Amount) -> Result<(), RowError> {
        self.total_amount = self.total_amount.checked_add(amount)
            .ok_or(RowError::Overflow)?;

        Ok(())
    }

    pub fn is_negative(&self) -> bool {
        self.total_amount.is_sign_negative() && !self.total_amount.is_zero()
    }
}
