use serde::Serialize;

/// A caller's view request. Every field is optional and nothing in it can make a query fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page; clamped into the valid range.
    pub page: Option<i64>,
    /// Defaulted when absent or not positive, capped at the configured maximum.
    pub items_per_page: Option<i64>,
    pub search_term: String
}

impl PageRequest {
    pub fn new(page: i64, items_per_page: i64) -> Self {
        Self {
            page: Some(page),
            items_per_page: Some(items_per_page),
            search_term: String::new()
        }
    }

    pub fn with_search(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }

    /// Builds a request from raw query-string values. Non-numeric values count as omitted.
    pub fn from_params(page: Option<&str>, items_per_page: Option<&str>, search_term: Option<&str>) -> Self {
        Self {
            page: page.and_then(|value| value.trim().parse().ok()),
            items_per_page: items_per_page.and_then(|value| value.trim().parse().ok()),
            search_term: search_term.unwrap_or_default().to_string()
        }
    }

    pub fn resolve_items_per_page(&self, default: usize, max: usize) -> usize {
        match self.items_per_page {
            Some(requested) if requested > 0 => usize::try_from(requested).unwrap_or(max).min(max),
            _ => default
        }
    }

    /// The lowercased search term, or `None` when the request does not filter.
    /// Whitespace is part of the term.
    pub fn normalized_search(&self) -> Option<String> {
        (!self.search_term.is_empty()).then(|| self.search_term.to_lowercase())
    }
}

/// One page of a filtered result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    /// Never below 1, even for an empty set.
    pub total_pages: usize,
    /// The page actually served after clamping.
    pub current_page: usize
}

impl<T: Clone> Page<T> {
    /// Cuts one page out of `rows`, visiting only the positions listed in `selection`.
    pub fn slice(rows: &[T], selection: &[usize], page: Option<i64>, items_per_page: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        let total_items = selection.len();
        let total_pages = total_items.div_ceil(items_per_page).max(1);
        let current_page = clamp_page(page, total_pages);
        let start = (current_page - 1) * items_per_page;

        let items = selection.iter()
            .skip(start)
            .take(items_per_page)
            .filter_map(|position| rows.get(*position))
            .cloned()
            .collect();

        Self {
            items,
            total_items,
            total_pages,
            current_page
        }
    }
}

fn clamp_page(page: Option<i64>, total_pages: usize) -> usize {
    match page {
        Some(requested) if requested > 1 => usize::try_from(requested).unwrap_or(total_pages).min(total_pages),
        _ => 1
    }
}
