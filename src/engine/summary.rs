use serde::Serialize;

use crate::storage::ResultSets;
use crate::types::GenerationId;

pub const UPLOAD_MESSAGE: &str = "File uploaded and processed successfully";
pub const RESET_MESSAGE: &str = "System reset successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetSizes {
    pub chart_of_accounts: usize,
    pub collections_accounts: usize,
    pub bad_transactions: usize
}

impl SetSizes {
    pub fn of(sets: &ResultSets) -> Self {
        Self {
            chart_of_accounts: sets.chart_of_accounts.len(),
            collections_accounts: sets.collections_accounts.len(),
            bad_transactions: sets.bad_transactions.len()
        }
    }
}

/// What the caller gets back from a completed upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadSummary {
    pub message: String,
    pub generation: GenerationId,
    /// Rows that made it into the chart of accounts.
    pub good_records: usize,
    pub bad_records: usize,
    pub sizes: SetSizes
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetSummary {
    pub message: String,
    pub generation: GenerationId
}
