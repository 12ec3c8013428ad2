use thiserror::Error;

#[derive(Debug, Error)]
#[error("Unknown result set '{0}' (expected chart_of_accounts, collections_accounts or bad_transactions)")]
pub struct ParseResultSetError(pub String);
