use std::collections::HashMap;

use tracing::warn;

use crate::config::SignConvention;
use crate::models::{AccountTotal, BadTransaction, Transaction};

/// The derived views of one upload's valid transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// One entry per (account name, card number), in order of first appearance.
    pub chart_of_accounts: Vec<AccountTotal>,
    /// The chart of accounts entries the collections predicate selected, same order.
    pub collections_accounts: Vec<AccountTotal>,
    /// Transactions that would have overflowed their account total.
    pub rejected: Vec<BadTransaction>
}

/// Groups valid transactions per account and applies the collections predicate to the totals.
///
/// Transactions must be supplied in file order; grouping is stable with
/// respect to it so repeated runs over the same input give identical output.
pub fn classify<P>(transactions: Vec<Transaction>, sign_convention: SignConvention, is_collections: P) -> Classification
where
    P: Fn(&AccountTotal) -> bool
{
    let mut chart_of_accounts: Vec<AccountTotal> = Vec::new();
    let mut positions: HashMap<(String, String), usize> = HashMap::new();
    let mut rejected = Vec::new();

    for transaction in transactions {
        let key = (transaction.account_name.clone(), transaction.card_number.clone());
        let position = *positions.entry(key).or_insert_with(|| {
            chart_of_accounts.push(AccountTotal::new(&transaction.account_name, &transaction.card_number));
            chart_of_accounts.len() - 1
        });

        let amount = sign_convention.signed_amount(&transaction.transaction_type, transaction.amount);

        if let Err(error) = chart_of_accounts[position].apply(amount) {
            warn!("Line [{}] for account [{}] rejected: {error}", transaction.line, transaction.account_name);
            rejected.push(BadTransaction::from_transaction(&transaction, error));
        }
    }

    let collections_accounts = chart_of_accounts.iter()
        .filter(|account| is_collections(account))
        .cloned()
        .collect();

    Classification {
        chart_of_accounts,
        collections_accounts,
        rejected
    }
}
