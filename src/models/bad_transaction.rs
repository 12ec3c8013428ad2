use serde::Serialize;

use crate::models::{Column, RawRow, RowError, Transaction};
use crate::types::LineNumber;

/// A row that failed parsing or validation, kept for operator review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadTransaction {
    #[serde(skip)]
    pub line: LineNumber,
    #[serde(rename = "Account Name")]
    pub account_name: String,
    #[serde(rename = "Card Number")]
    pub card_number: String,
    #[serde(rename = "Transaction Amount")]
    pub transaction_amount: String,
    #[serde(rename = "Transaction Type")]
    pub transaction_type: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Target Card Number")]
    pub target_card_number: Option<String>,
    #[serde(rename = "Reason")]
    pub reason: String
}

impl BadTransaction {
    /// Captures whatever cells a record had, for rows that never became a `Transaction`.
    pub fn from_raw(row: &RawRow, error: RowError) -> Self {
        let cell = |column: Column| row.get(column).unwrap_or_default().to_string();

        Self {
            line: row.line,
            account_name: cell(Column::AccountName),
            card_number: cell(Column::CardNumber),
            transaction_amount: cell(Column::TransactionAmount),
            transaction_type: cell(Column::TransactionType),
            description: cell(Column::Description),
            target_card_number: row.get(Column::TargetCardNumber)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
            reason: error.to_string()
        }
    }

    pub fn from_transaction(transaction: &Transaction, error: RowError) -> Self {
        Self {
            line: transaction.line,
            account_name: transaction.account_name.clone(),
            card_number: transaction.card_number.clone(),
            transaction_amount: transaction.amount.to_string(),
            transaction_type: transaction.transaction_type.to_string(),
            description: transaction.description.clone(),
            target_card_number: transaction.target_card_number.clone(),
            reason: error.to_string()
        }
    }
}
