use std::sync::Arc;

use moka::sync::Cache;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::models::{AccountTotal, BadTransaction};
use crate::query::page::{Page, PageRequest};
use crate::query::search::Searchable;
use crate::storage::{Generation, GenerationStore};
use crate::types::{GenerationId, ResultSetName};

type FilterKey = (GenerationId, ResultSetName, String);

/// A page from one of the three result sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Accounts(Page<AccountTotal>),
    BadTransactions(Page<BadTransaction>)
}

impl QueryResponse {
    pub fn total_pages(&self) -> usize {
        match self {
            QueryResponse::Accounts(page) => page.total_pages,
            QueryResponse::BadTransactions(page) => page.total_pages
        }
    }

    pub fn total_items(&self) -> usize {
        match self {
            QueryResponse::Accounts(page) => page.total_items,
            QueryResponse::BadTransactions(page) => page.total_items
        }
    }

    pub fn current_page(&self) -> usize {
        match self {
            QueryResponse::Accounts(page) => page.current_page,
            QueryResponse::BadTransactions(page) => page.current_page
        }
    }

    /// Number of items on the served page.
    pub fn len(&self) -> usize {
        match self {
            QueryResponse::Accounts(page) => page.items.len(),
            QueryResponse::BadTransactions(page) => page.items.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn accounts(&self) -> Option<&Page<AccountTotal>> {
        match self {
            QueryResponse::Accounts(page) => Some(page),
            QueryResponse::BadTransactions(_) => None
        }
    }

    pub fn bad_transactions(&self) -> Option<&Page<BadTransaction>> {
        match self {
            QueryResponse::BadTransactions(page) => Some(page),
            QueryResponse::Accounts(_) => None
        }
    }
}

/// Serves paginated, searchable slices of the current generation. Read-only.
///
/// Search results are cached per generation, so paging through one search
/// filters the set once. A new generation id makes old entries unreachable.
pub struct QueryService<S: GenerationStore> {
    store: Arc<S>,
    filters: Cache<FilterKey, Arc<Vec<usize>>>,
    default_items_per_page: usize,
    max_items_per_page: usize
}

impl<S: GenerationStore> QueryService<S> {
    pub fn new(store: Arc<S>, config: &EngineConfig) -> Self {
        Self {
            store,
            filters: Cache::builder()
                .max_capacity(config.query_cache_capacity)
                .build(),
            default_items_per_page: config.default_items_per_page,
            max_items_per_page: config.max_items_per_page
        }
    }

    /// Serves one page of the named set from a single snapshot of the store.
    pub fn query(&self, set: ResultSetName, request: &PageRequest) -> QueryResponse {
        let generation = self.store.snapshot();

        match set {
            ResultSetName::ChartOfAccounts => {
                QueryResponse::Accounts(self.page_of(&generation, set, generation.chart_of_accounts(), request))
            }
            ResultSetName::CollectionsAccounts => {
                QueryResponse::Accounts(self.page_of(&generation, set, generation.collections_accounts(), request))
            }
            ResultSetName::BadTransactions => {
                QueryResponse::BadTransactions(self.page_of(&generation, set, generation.bad_transactions(), request))
            }
        }
    }

    fn page_of<T>(&self, generation: &Generation, set: ResultSetName, rows: &[T], request: &PageRequest) -> Page<T>
    where
        T: Searchable + Clone
    {
        let items_per_page = request.resolve_items_per_page(self.default_items_per_page, self.max_items_per_page);

        if let Some(requested) = request.items_per_page.filter(|requested| i64::try_from(items_per_page).ok() != Some(*requested)) {
            warn!("Requested page size {requested} for [{set}] adjusted to {items_per_page}");
        }

        let selection = match request.normalized_search() {
            Some(term) => {
                let key = (generation.id(), set, term);

                self.filters.get_with_by_ref(&key, || {
                    debug!("Filtering [{set}] of generation [{}] for '{}'", key.0, key.2);
                    Arc::new(filter_positions(rows, &key.2))
                })
            }
            None => Arc::new((0..rows.len()).collect())
        };

        let page = Page::slice(rows, &selection, request.page, items_per_page);

        if let Some(requested) = request.page.filter(|requested| i64::try_from(page.current_page).ok() != Some(*requested)) {
            warn!("Requested page {requested} for [{set}] clamped to {} of {}", page.current_page, page.total_pages);
        }

        page
    }
}

fn filter_positions<T: Searchable>(rows: &[T], term: &str) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.matches(term))
        .map(|(position, _)| position)
        .collect()
}
