use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::types::errors::ParseResultSetError;

/// Names one of the three result sets held by a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSetName {
    ChartOfAccounts,
    CollectionsAccounts,
    BadTransactions
}

impl ResultSetName {
    pub const ALL: [ResultSetName; 3] = [
        ResultSetName::ChartOfAccounts,
        ResultSetName::CollectionsAccounts,
        ResultSetName::BadTransactions
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultSetName::ChartOfAccounts => "chart_of_accounts",
            ResultSetName::CollectionsAccounts => "collections_accounts",
            ResultSetName::BadTransactions => "bad_transactions"
        }
    }
}

impl Display for ResultSetName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ResultSetName {
    type Err = ParseResultSetError;

    //NOTE: Route-style names (chart-of-accounts) are accepted alongside the snake_case ones
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "chart_of_accounts" => Ok(ResultSetName::ChartOfAccounts),
            "collections_accounts" => Ok(ResultSetName::CollectionsAccounts),
            "bad_transactions" => Ok(ResultSetName::BadTransactions),
            _ => Err(ParseResultSetError(value.to_string()))
        }
    }
}
