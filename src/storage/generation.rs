use crate::models::{AccountTotal, BadTransaction};
use crate::types::GenerationId;

/// The three result sets produced by one upload, built off to the side before they are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSets {
    pub chart_of_accounts: Vec<AccountTotal>,
    pub collections_accounts: Vec<AccountTotal>,
    pub bad_transactions: Vec<BadTransaction>
}

impl ResultSets {
    pub fn is_empty(&self) -> bool {
        self.chart_of_accounts.is_empty()
            && self.collections_accounts.is_empty()
            && self.bad_transactions.is_empty()
    }
}

/// One immutable, numbered snapshot of the result sets.
#[derive(Debug, Default)]
pub struct Generation {
    id: GenerationId,
    sets: ResultSets
}

impl Generation {
    pub fn new(id: GenerationId, sets: ResultSets) -> Self {
        Self { id, sets }
    }

    pub fn id(&self) -> GenerationId {
        self.id
    }

    pub fn chart_of_accounts(&self) -> &[AccountTotal] {
        &self.sets.chart_of_accounts
    }

    pub fn collections_accounts(&self) -> &[AccountTotal] {
        &self.sets.collections_accounts
    }

    pub fn bad_transactions(&self) -> &[BadTransaction] {
        &self.sets.bad_transactions
    }

    pub fn sets(&self) -> &ResultSets {
        &self.sets
    }
}
