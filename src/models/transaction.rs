use crate::models::TransactionType;
use crate::types::{Amount, LineNumber};

/// A typed candidate built from one CSV record.
///
/// Construction only guarantees the row was well-formed (amount parsed,
/// required cells present); business rules are applied later by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// The 1-based line of the record in the uploaded file.
    pub line: LineNumber,
    pub account_name: String,
    pub card_number: String,
    /// Signed amount as written in the file.
    pub amount: Amount,
    pub transaction_type: TransactionType,
    pub description: String,
    /// Counterparty card, only meaningful for transfers.
    pub target_card_number: Option<String>
}
