use crate::models::{AccountTotal, BadTransaction};

/// Rows that can be found by account name or card number.
pub trait Searchable {
    fn account_name(&self) -> &str;
    fn card_number(&self) -> &str;

    /// `term` must already be lowercased.
    fn matches(&self, term: &str) -> bool {
        self.account_name().to_lowercase().contains(term)
            || self.card_number().to_lowercase().contains(term)
    }
}

impl Searchable for AccountTotal {
    fn account_name(&self) -> &str {
        &self.account_name
    }

    fn card_number(&self) -> &str {
        &self.card_number
    }
}

impl Searchable for BadTransaction {
    fn account_name(&self) -> &str {
        &self.account_name
    }

    fn card_number(&self) -> &str {
        &self.card_number
    }
}
