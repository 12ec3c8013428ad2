use serde::{Deserialize, Serialize};

use crate::models::{AccountTotal, TransactionType};
use crate::types::Amount;

/// How a transaction's amount contributes to its account total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignConvention {
    /// Amounts are summed exactly as written in the file.
    #[default]
    AsSigned,
    /// Credits add the absolute amount, debits and transfers subtract it.
    ByType
}

impl SignConvention {
    pub fn signed_amount(&self, transaction_type: &TransactionType, amount: Amount) -> Amount {
        match (self, transaction_type) {
            (SignConvention::AsSigned, _) => amount,
            (SignConvention::ByType, TransactionType::Credit) => amount.abs(),
            (SignConvention::ByType, TransactionType::Debit | TransactionType::Transfer) => -amount.abs(),
            (SignConvention::ByType, TransactionType::Unrecognized(_)) => amount
        }
    }
}

/// Decides which chart of accounts entries are flagged for collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CollectionsRule {
    /// Total amount strictly below zero.
    #[default]
    NegativeBalance,
    /// Total amount strictly below the threshold.
    Below { threshold: Amount },
    /// Total amount strictly above the threshold.
    Above { threshold: Amount }
}

impl CollectionsRule {
    pub fn matches(&self, account: &AccountTotal) -> bool {
        match self {
            CollectionsRule::NegativeBalance => account.is_negative(),
            CollectionsRule::Below { threshold } => account.total_amount < *threshold,
            CollectionsRule::Above { threshold } => account.total_amount > *threshold
        }
    }
}

/// What a second upload does while another one is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadPolicy {
    /// Fail fast with a busy error.
    #[default]
    Reject,
    /// Wait for the in-flight upload to finish.
    Queue
}
